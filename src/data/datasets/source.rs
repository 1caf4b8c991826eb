//! 数据集来源：下载地址、文件名与校验码
//!
//! 两个来源的文件名与 IDX 格式完全相同，只有下载地址和 MD5 不同，
//! 因此可以互相替换而不改动后续处理流程。

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Split;

/// Fashion-MNIST 下载地址（与 Keras `fashion_mnist.load_data()` 使用同一镜像）
const FASHION_MNIST_BASE_URL: &str = "https://storage.googleapis.com/tensorflow/tf-keras-datasets/";

/// MNIST 下载地址（使用 AWS S3 镜像，原官网 yann.lecun.com 不稳定）
const MNIST_BASE_URL: &str = "https://ossci-datasets.s3.amazonaws.com/mnist/";

/// 按 [训练图像, 训练标签, 测试图像, 测试标签] 排列的 (文件名, gz 文件 MD5)
const FASHION_MNIST_FILES: [(&str, &str); 4] = [
    ("train-images-idx3-ubyte", "8d4fb7e6c68d591d4c3dfef9ec88bf0d"),
    ("train-labels-idx1-ubyte", "25c81989df183df01b3e8a0aad5dffbe"),
    ("t10k-images-idx3-ubyte", "bef4ecab320f06d8554ea6380940ec79"),
    ("t10k-labels-idx1-ubyte", "bb300cfdad3c16e7a12a480ee83cd310"),
];

const MNIST_FILES: [(&str, &str); 4] = [
    ("train-images-idx3-ubyte", "f68b3c2dcbeaaa9fbdd348bbdeb94873"),
    ("train-labels-idx1-ubyte", "d53e105ee54ea40749a09fcbcd1e9432"),
    ("t10k-images-idx3-ubyte", "9fb629c4189551a2d022fa330f9573f3"),
    ("t10k-labels-idx1-ubyte", "ec29112dd5afa0611ce80d1b7f02629c"),
];

/// 数据集中的单个文件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetFile {
    /// 解压后的文件名（gz 文件名为 `{name}.gz`）
    pub name: &'static str,
    /// gz 文件的 MD5
    pub md5: &'static str,
}

impl DatasetFile {
    pub fn gz_name(&self) -> String {
        format!("{}.gz", self.name)
    }
}

/// 可选的数据集来源
///
/// 两者均为 28x28 灰度图、10 个类别、60000 训练样本 + 10000 测试样本。
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetSource {
    /// Zalando 的 Fashion-MNIST 服饰图像数据集
    #[default]
    FashionMnist,
    /// MNIST 手写数字数据集
    Mnist,
}

impl DatasetSource {
    /// 数据集名称，同时作为缓存子目录名
    pub fn name(&self) -> &'static str {
        match self {
            DatasetSource::FashionMnist => "fashion_mnist",
            DatasetSource::Mnist => "mnist",
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            DatasetSource::FashionMnist => FASHION_MNIST_BASE_URL,
            DatasetSource::Mnist => MNIST_BASE_URL,
        }
    }

    /// 单张图像的 (rows, cols)
    pub fn image_dims(&self) -> (usize, usize) {
        (28, 28)
    }

    /// 类别数
    pub fn num_classes(&self) -> usize {
        10
    }

    pub fn images_file(&self, split: Split) -> DatasetFile {
        self.file(match split {
            Split::Train => 0,
            Split::Test => 2,
        })
    }

    pub fn labels_file(&self, split: Split) -> DatasetFile {
        self.file(match split {
            Split::Train => 1,
            Split::Test => 3,
        })
    }

    fn file(&self, index: usize) -> DatasetFile {
        let files = match self {
            DatasetSource::FashionMnist => &FASHION_MNIST_FILES,
            DatasetSource::Mnist => &MNIST_FILES,
        };
        let (name, md5) = files[index];
        DatasetFile { name, md5 }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
