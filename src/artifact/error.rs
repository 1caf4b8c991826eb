//! 产物读写错误类型定义

use std::path::PathBuf;
use thiserror::Error;

/// 序列化/反序列化产物时的错误
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// IO 错误（创建目录、写文件等）
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 写入 npy 失败
    #[error("写入 npy 失败: {0}")]
    WriteNpy(#[from] ndarray_npy::WriteNpyError),

    /// 读取 npy 失败
    #[error("读取 npy 失败: {0}")]
    ReadNpy(#[from] ndarray_npy::ReadNpyError),

    /// bincode 编解码失败
    #[error("bincode 编解码失败: {0}")]
    Bincode(#[from] bincode::Error),

    /// 无法从扩展名推断产物格式
    #[error("无法识别的产物格式: {0}")]
    UnknownFormat(PathBuf),
}
