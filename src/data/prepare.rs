//! 数据准备：归一化 + 追加通道维度
//!
//! 输入一次加载得到的 [`RawDataset`]，输出可直接交给训练阶段的 [`PreparedDataset`]。

use ndarray::{Array1, Array4};

use crate::data::datasets::{RawDataset, Split};
use crate::data::error::DataError;
use crate::data::transforms::{add_channel_dim, normalize_pixels};

/// 准备好的数据集
///
/// 构造时即检查不变量：图像为 [N, H, W, 1]、图像数与标签数一致、像素值在 [0, 1]。
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedDataset {
    train_images: Array4<f32>,
    train_labels: Array1<u8>,
    test_images: Array4<f32>,
    test_labels: Array1<u8>,
}

/// 对原始数据集执行完整的准备流程
///
/// 1. 像素除以 255，[0, 255] → [0.0, 1.0]
/// 2. [N, 28, 28] → [N, 28, 28, 1]
/// 3. 标签原样保留
pub fn prepare(raw: RawDataset) -> Result<PreparedDataset, DataError> {
    let RawDataset {
        train_images,
        train_labels,
        test_images,
        test_labels,
    } = raw;

    let train_images = add_channel_dim(normalize_pixels(&train_images))?;
    let test_images = add_channel_dim(normalize_pixels(&test_images))?;

    PreparedDataset::new(train_images, train_labels, test_images, test_labels)
}

impl PreparedDataset {
    /// 由已处理好的数组构造，并校验不变量
    pub fn new(
        train_images: Array4<f32>,
        train_labels: Array1<u8>,
        test_images: Array4<f32>,
        test_labels: Array1<u8>,
    ) -> Result<Self, DataError> {
        check_split(&train_images, &train_labels)?;
        check_split(&test_images, &test_labels)?;
        Ok(Self {
            train_images,
            train_labels,
            test_images,
            test_labels,
        })
    }

    pub fn train_images(&self) -> &Array4<f32> {
        &self.train_images
    }

    pub fn train_labels(&self) -> &Array1<u8> {
        &self.train_labels
    }

    pub fn test_images(&self) -> &Array4<f32> {
        &self.test_images
    }

    pub fn test_labels(&self) -> &Array1<u8> {
        &self.test_labels
    }

    pub fn images(&self, split: Split) -> &Array4<f32> {
        match split {
            Split::Train => &self.train_images,
            Split::Test => &self.test_images,
        }
    }

    pub fn labels(&self, split: Split) -> &Array1<u8> {
        match split {
            Split::Train => &self.train_labels,
            Split::Test => &self.test_labels,
        }
    }

    /// 某个划分的样本数量
    pub fn len(&self, split: Split) -> usize {
        self.labels(split).len()
    }

    /// 两个划分都没有样本
    pub fn is_empty(&self) -> bool {
        self.train_labels.is_empty() && self.test_labels.is_empty()
    }

    /// 形状与元素类型摘要，每个划分一行
    pub fn summary(&self) -> Vec<String> {
        [Split::Train, Split::Test]
            .iter()
            .map(|&split| {
                format!(
                    "{split}_images.shape: {:?}, of f32; {split}_labels.len: {}",
                    self.images(split).shape(),
                    self.len(split)
                )
            })
            .collect()
    }
}

fn check_split(images: &Array4<f32>, labels: &Array1<u8>) -> Result<(), DataError> {
    let (n, h, w, c) = images.dim();
    if c != 1 || n != labels.len() {
        return Err(DataError::ShapeMismatch {
            expected: vec![labels.len(), h, w, 1],
            got: images.shape().to_vec(),
        });
    }
    if let Some(&bad) = images.iter().find(|p| !(0.0..=1.0).contains(*p)) {
        return Err(DataError::FormatError(format!(
            "像素值 {bad} 超出 [0, 1] 范围"
        )));
    }
    Ok(())
}
