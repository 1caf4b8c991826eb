mod prepare;

use std::io::Write;
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use ndarray::{Array1, Array3};

use crate::data::idx::{IMAGES_MAGIC, LABELS_MAGIC};

/// 将图像编码为 IDX 字节
fn idx_images_bytes(images: &Array3<u8>) -> Vec<u8> {
    let (n, rows, cols) = images.dim();
    let mut bytes = Vec::with_capacity(16 + images.len());
    for value in [IMAGES_MAGIC, n as u32, rows as u32, cols as u32] {
        bytes.extend_from_slice(&value.to_be_bytes());
    }
    bytes.extend(images.iter().copied());
    bytes
}

/// 将标签编码为 IDX 字节
fn idx_labels_bytes(labels: &Array1<u8>) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(8 + labels.len());
    bytes.extend_from_slice(&LABELS_MAGIC.to_be_bytes());
    bytes.extend_from_slice(&(labels.len() as u32).to_be_bytes());
    bytes.extend(labels.iter().copied());
    bytes
}

fn write_gz(path: &Path, bytes: &[u8]) {
    let mut encoder = GzEncoder::new(std::fs::File::create(path).unwrap(), Compression::fast());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap();
}

/// 像素值按位置递增（对 256 取模）的图像，便于检查顺序
fn sequential_images(n: usize) -> Array3<u8> {
    Array3::from_shape_fn((n, 28, 28), |(i, r, c)| ((i * 784 + r * 28 + c) % 256) as u8)
}

fn sequential_labels(n: usize) -> Array1<u8> {
    Array1::from_shape_fn(n, |i| (i % 10) as u8)
}
