//! 数据准备单元测试

use approx::assert_abs_diff_eq;
use ndarray::{Array1, Array3, Array4};

use super::{sequential_images, sequential_labels};
use crate::data::datasets::{RawDataset, Split};
use crate::data::error::DataError;
use crate::data::prepare::{PreparedDataset, prepare};

fn raw_dataset(train: usize, test: usize) -> RawDataset {
    RawDataset {
        train_images: sequential_images(train),
        train_labels: sequential_labels(train),
        test_images: sequential_images(test),
        test_labels: sequential_labels(test),
    }
}

#[test]
fn test_prepare_shapes() {
    let dataset = prepare(raw_dataset(20, 7)).expect("准备数据失败");

    assert_eq!(dataset.train_images().shape(), &[20, 28, 28, 1]);
    assert_eq!(dataset.test_images().shape(), &[7, 28, 28, 1]);
    assert_eq!(dataset.len(Split::Train), 20);
    assert_eq!(dataset.len(Split::Test), 7);
    assert!(!dataset.is_empty());
}

#[test]
fn test_prepare_pixel_values() {
    let raw = raw_dataset(2, 2);
    let expected = raw.train_images.clone();
    let dataset = prepare(raw).unwrap();

    for split in [Split::Train, Split::Test] {
        let images = dataset.images(split);
        let min = images.iter().copied().fold(f32::INFINITY, f32::min);
        let max = images.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert!(min >= 0.0, "像素最小值 {} < 0", min);
        assert!(max <= 1.0, "像素最大值 {} > 1", max);
    }

    for ((i, r, c), &p) in expected.indexed_iter() {
        assert_abs_diff_eq!(
            dataset.train_images()[[i, r, c, 0]],
            p as f32 / 255.0,
            epsilon = 1e-6
        );
    }
}

#[test]
fn test_prepare_labels_unchanged() {
    let raw = raw_dataset(15, 4);
    let train_labels = raw.train_labels.clone();
    let test_labels = raw.test_labels.clone();
    let dataset = prepare(raw).unwrap();

    assert_eq!(dataset.train_labels(), &train_labels);
    assert_eq!(dataset.test_labels(), &test_labels);
}

#[test]
fn test_prepare_count_mismatch() {
    let mut raw = raw_dataset(5, 3);
    raw.test_labels = sequential_labels(4);

    let result = prepare(raw);
    assert!(matches!(
        result,
        Err(DataError::ShapeMismatch { expected, got }) if expected == vec![4, 28, 28, 1] && got == vec![3, 28, 28, 1]
    ));
}

#[test]
fn test_prepared_dataset_rejects_out_of_range_pixels() {
    let mut images = Array4::<f32>::zeros((1, 28, 28, 1));
    images[[0, 3, 3, 0]] = 1.5;
    let labels = Array1::from_vec(vec![0u8]);

    let result = PreparedDataset::new(images.clone(), labels.clone(), images, labels);
    assert!(matches!(result, Err(DataError::FormatError(_))));
}

#[test]
fn test_prepare_empty_test_split() {
    let dataset = prepare(raw_dataset(3, 0)).unwrap();
    assert_eq!(dataset.test_images().shape(), &[0, 28, 28, 1]);
    assert_eq!(dataset.len(Split::Test), 0);
}

#[test]
fn test_summary() {
    let dataset = prepare(raw_dataset(6, 2)).unwrap();
    let summary = dataset.summary();

    assert_eq!(summary.len(), 2);
    assert!(summary[0].contains("train_images.shape: [6, 28, 28, 1]"));
    assert!(summary[1].contains("test_images.shape: [2, 28, 28, 1]"));
    assert!(summary[1].contains("test_labels.len: 2"));
}

/// 完整规模：60000 训练 + 10000 测试
#[test]
fn test_prepare_full_size_shapes() {
    let raw = RawDataset {
        train_images: Array3::zeros((60000, 28, 28)),
        train_labels: Array1::zeros(60000),
        test_images: Array3::from_elem((10000, 28, 28), 255),
        test_labels: Array1::zeros(10000),
    };
    let dataset = prepare(raw).unwrap();

    assert_eq!(dataset.train_images().shape(), &[60000, 28, 28, 1]);
    assert_eq!(dataset.train_labels().len(), 60000);
    assert_eq!(dataset.test_images().shape(), &[10000, 28, 28, 1]);
    assert_eq!(dataset.test_labels().len(), 10000);
    assert_abs_diff_eq!(dataset.test_images()[[9999, 27, 27, 0]], 1.0);
}
