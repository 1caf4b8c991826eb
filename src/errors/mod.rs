use thiserror::Error;

use crate::artifact::ArtifactError;
use crate::config::ConfigError;
use crate::data::DataError;
use crate::install::InstallError;

/// 依赖安装失败时的进程退出码
pub const EXIT_INSTALL_FAILED: u8 = 1;
/// 其余失败（配置、数据、产物）的进程退出码
pub const EXIT_BUILD_FAILED: u8 = 2;

/// 构建阶段的顶层错误
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("依赖安装失败: {0}")]
    Install(#[from] InstallError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("数据准备失败: {0}")]
    Data(#[from] DataError),

    #[error("产物写入失败: {0}")]
    Artifact(#[from] ArtifactError),
}

impl BuildError {
    pub fn exit_code(&self) -> u8 {
        match self {
            BuildError::Install(_) => EXIT_INSTALL_FAILED,
            _ => EXIT_BUILD_FAILED,
        }
    }
}
