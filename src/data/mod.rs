//! 数据加载与准备模块
//!
//! 提供数据集下载、IDX 解析、像素变换以及准备流程。
//!
//! # 主要组件
//!
//! - [`DatasetLoader`]: 按来源加载（必要时下载）四个 IDX 文件
//! - [`DatasetSource`]: Fashion-MNIST / MNIST
//! - [`prepare`]: 归一化像素并追加通道维度，得到 [`PreparedDataset`]
//! - [`transforms`]: 数据变换函数
//! - [`DataError`]: 数据加载错误类型
//!
//! # 使用示例
//!
//! ```ignore
//! use ml_build::data::{prepare, DatasetLoader, DatasetSource};
//!
//! let raw = DatasetLoader::new(DatasetSource::FashionMnist).load()?;
//! let dataset = prepare(raw)?;
//! assert_eq!(dataset.train_images().shape(), &[60000, 28, 28, 1]);
//! ```

pub mod datasets;
pub mod download;
pub mod error;
pub mod idx;
pub mod prepare;
pub mod transforms;

#[cfg(test)]
mod tests;

// Re-exports
pub use datasets::{DatasetLoader, DatasetSource, RawDataset, Split, default_data_dir};
pub use error::DataError;
pub use prepare::{PreparedDataset, prepare};
