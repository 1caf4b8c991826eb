//! IDX 二进制格式解析
//!
//! IDX 图像文件：
//! - [0-3] magic number (0x00000803 = 2051)
//! - [4-7] 图像数量
//! - [8-11] 行数
//! - [12-15] 列数
//! - [16+] 像素数据 (unsigned byte)
//!
//! IDX 标签文件：
//! - [0-3] magic number (0x00000801 = 2049)
//! - [4-7] 标签数量
//! - [8+] 标签数据 (unsigned byte)
//!
//! 所有整数均为大端序。以 `.gz` 结尾的文件会先经过 gzip 解压。

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use ndarray::{Array1, Array3};

use crate::data::error::DataError;

pub const IMAGES_MAGIC: u32 = 2051;
pub const LABELS_MAGIC: u32 = 2049;

/// 解析 IDX 图像文件，返回 [N, rows, cols] 的原始像素
///
/// `expected_dims` 为期望的 (rows, cols)，不一致时报 `FormatError`
pub fn parse_idx_images(path: &Path, expected_dims: (usize, usize)) -> Result<Array3<u8>, DataError> {
    read_images(open_idx(path)?, expected_dims)
}

/// 解析 IDX 标签文件，返回 [N] 的原始标签
pub fn parse_idx_labels(path: &Path) -> Result<Array1<u8>, DataError> {
    read_labels(open_idx(path)?)
}

/// 从任意读取器解析 IDX 图像数据
pub fn read_images<R: Read>(mut reader: R, expected_dims: (usize, usize)) -> Result<Array3<u8>, DataError> {
    let mut header = [0u8; 16];
    reader
        .read_exact(&mut header)
        .map_err(|e| DataError::FormatError(format!("读取头部失败: {e}")))?;

    check_magic(&header, IMAGES_MAGIC)?;
    let num_images = be_u32(&header[4..8]);
    let num_rows = be_u32(&header[8..12]);
    let num_cols = be_u32(&header[12..16]);

    if (num_rows, num_cols) != expected_dims {
        return Err(DataError::FormatError(format!(
            "无效的图像尺寸: {}x{} (期望 {}x{})",
            num_rows, num_cols, expected_dims.0, expected_dims.1
        )));
    }

    let pixel_count = num_images
        .checked_mul(num_rows)
        .and_then(|n| n.checked_mul(num_cols))
        .ok_or_else(|| DataError::FormatError(format!("图像数量过大: {num_images}")))?;
    let pixels = read_payload(reader, pixel_count, "像素")?;

    Array3::from_shape_vec((num_images, num_rows, num_cols), pixels)
        .map_err(|e| DataError::FormatError(format!("像素数据无法组成图像张量: {e}")))
}

/// 从任意读取器解析 IDX 标签数据
pub fn read_labels<R: Read>(mut reader: R) -> Result<Array1<u8>, DataError> {
    let mut header = [0u8; 8];
    reader
        .read_exact(&mut header)
        .map_err(|e| DataError::FormatError(format!("读取头部失败: {e}")))?;

    check_magic(&header, LABELS_MAGIC)?;
    let num_labels = be_u32(&header[4..8]);

    let labels = read_payload(reader, num_labels, "标签")?;
    Ok(Array1::from_vec(labels))
}

fn open_idx(path: &Path) -> Result<Box<dyn Read>, DataError> {
    let file = File::open(path).map_err(|_| DataError::FileNotFound(path.to_path_buf()))?;
    let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(reader)
}

fn check_magic(header: &[u8], expected: u32) -> Result<(), DataError> {
    let magic = u32::from_be_bytes([header[0], header[1], header[2], header[3]]);
    if magic != expected {
        return Err(DataError::FormatError(format!(
            "无效的 magic number: {magic} (期望 {expected})"
        )));
    }
    Ok(())
}

fn be_u32(bytes: &[u8]) -> usize {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize
}

/// 读取恰好 `len` 个字节；不预先按头部声明的长度分配内存
fn read_payload<R: Read>(reader: R, len: usize, what: &str) -> Result<Vec<u8>, DataError> {
    let mut data = Vec::new();
    reader
        .take(len as u64)
        .read_to_end(&mut data)
        .map_err(|e| DataError::FormatError(format!("读取{what}数据失败: {e}")))?;
    if data.len() != len {
        return Err(DataError::FormatError(format!(
            "{what}数据被截断: 期望 {len} 字节, 实际 {} 字节",
            data.len()
        )));
    }
    Ok(data)
}
