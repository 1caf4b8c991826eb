//! 内置数据集
//!
//! 提供常用的预定义图像数据集：
//! - Fashion-MNIST：服饰图像分类（默认来源）
//! - MNIST：手写数字分类
//!
//! 两者都以 IDX 格式分发，加载结果为 [`RawDataset`]（未归一化的原始像素与标签）。

mod source;

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};
use ndarray::{Array1, Array3};

use crate::data::download::download_file;
use crate::data::error::DataError;
use crate::data::idx::{parse_idx_images, parse_idx_labels};

pub use source::{DatasetFile, DatasetSource};

/// 数据集划分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    pub fn name(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 一次加载得到的四个原始数组
#[derive(Debug, Clone, PartialEq)]
pub struct RawDataset {
    /// 训练图像 [N, 28, 28]，值 0-255
    pub train_images: Array3<u8>,
    /// 训练标签 [N]
    pub train_labels: Array1<u8>,
    /// 测试图像 [M, 28, 28]，值 0-255
    pub test_images: Array3<u8>,
    /// 测试标签 [M]
    pub test_labels: Array1<u8>,
}

/// 获取默认数据目录
pub fn default_data_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ml_build")
        .join("datasets")
}

/// 数据集加载器
///
/// # 使用示例
///
/// ```ignore
/// let raw = DatasetLoader::new(DatasetSource::FashionMnist)
///     .root("/data/fashion_mnist")
///     .download(false)
///     .load()?;
/// ```
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    source: DatasetSource,
    root: Option<PathBuf>,
    base_url: Option<String>,
    download: bool,
}

impl DatasetLoader {
    /// 默认：缓存目录 `<cache>/ml_build/datasets/<name>`，来源自带的下载地址，自动下载
    pub fn new(source: DatasetSource) -> Self {
        Self {
            source,
            root: None,
            base_url: None,
            download: true,
        }
    }

    /// 数据文件所在目录
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// 覆盖下载地址（镜像），需以 `/` 结尾
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// 是否自动下载缺失的文件
    pub fn download(mut self, download: bool) -> Self {
        self.download = download;
        self
    }

    pub fn source(&self) -> DatasetSource {
        self.source
    }

    /// 实际使用的数据目录
    pub fn data_dir(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| default_data_dir().join(self.source.name()))
    }

    /// 加载训练集与测试集的图像和标签
    pub fn load(&self) -> Result<RawDataset, DataError> {
        let data_dir = self.data_dir();
        info!("加载数据集 {} (目录: {data_dir:?})", self.source);

        Ok(RawDataset {
            train_images: self.load_images(&data_dir, Split::Train)?,
            train_labels: self.load_labels(&data_dir, Split::Train)?,
            test_images: self.load_images(&data_dir, Split::Test)?,
            test_labels: self.load_labels(&data_dir, Split::Test)?,
        })
    }

    fn load_images(&self, data_dir: &Path, split: Split) -> Result<Array3<u8>, DataError> {
        let path = self.ensure_file(data_dir, self.source.images_file(split))?;
        parse_idx_images(&path, self.source.image_dims())
    }

    fn load_labels(&self, data_dir: &Path, split: Split) -> Result<Array1<u8>, DataError> {
        let path = self.ensure_file(data_dir, self.source.labels_file(split))?;
        parse_idx_labels(&path)
    }

    /// 确保文件存在，必要时下载
    fn ensure_file(&self, data_dir: &Path, file: DatasetFile) -> Result<PathBuf, DataError> {
        // 优先检查解压后的文件
        let uncompressed_path = data_dir.join(file.name);
        if uncompressed_path.exists() {
            debug!("使用已解压文件 {uncompressed_path:?}");
            return Ok(uncompressed_path);
        }

        let gz_path = data_dir.join(file.gz_name());
        if gz_path.exists() {
            debug!("使用缓存文件 {gz_path:?}");
            return Ok(gz_path);
        }

        if !self.download {
            return Err(DataError::FileNotFound(uncompressed_path));
        }

        std::fs::create_dir_all(data_dir)?;
        let base_url = self.base_url.as_deref().unwrap_or(self.source.base_url());
        let url = format!("{}{}", base_url, file.gz_name());
        download_file(&url, &gz_path, Some(file.md5))?;
        Ok(gz_path)
    }
}
