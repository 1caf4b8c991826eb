//! 依赖安装
//!
//! 调用宿主包管理器，按依赖清单安装所需的包。安装失败即视为致命错误，
//! 不重试、不做部分安装的恢复。

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use std::process::Command;

use log::{error, info};
use thiserror::Error;

/// 默认依赖清单文件名（位于工作目录）
pub const DEFAULT_MANIFEST: &str = "requirements.txt";

/// 默认 Python 解释器
pub const DEFAULT_PYTHON: &str = "python3";

/// 依赖安装错误
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("依赖清单不存在: {0}")]
    ManifestNotFound(PathBuf),

    #[error("无法启动包管理器 `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// `code` 为 None 表示进程被信号终止
    #[error("包管理器 `{program}` 以非零状态退出 (退出码: {code:?})")]
    NonZeroExit { program: String, code: Option<i32> },
}

/// 环境准备步骤：把依赖清单中的包装到宿主环境
pub trait Installer {
    fn install(&self, manifest: &Path) -> Result<(), InstallError>;

    /// 用于日志的简短描述
    fn describe(&self) -> String;
}

/// 以 `<python> -m pip install -r <manifest>` 安装依赖
#[derive(Debug, Clone)]
pub struct PipInstaller {
    python: PathBuf,
}

impl PipInstaller {
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
        }
    }

    pub fn python(&self) -> &Path {
        &self.python
    }

    /// 构造（但不执行）安装命令
    pub fn command(&self, manifest: &Path) -> Command {
        let mut command = Command::new(&self.python);
        command.args(["-m", "pip", "install", "-r"]).arg(manifest);
        command
    }
}

impl Default for PipInstaller {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

impl Installer for PipInstaller {
    fn install(&self, manifest: &Path) -> Result<(), InstallError> {
        run_install(self.command(manifest), manifest)
    }

    fn describe(&self) -> String {
        format!("{} -m pip", self.python.display())
    }
}

/// 执行任意安装命令，阻塞直到其退出
pub fn run_install(mut command: Command, manifest: &Path) -> Result<(), InstallError> {
    if !manifest.is_file() {
        let err = InstallError::ManifestNotFound(manifest.to_path_buf());
        error!("{err}");
        return Err(err);
    }

    let program = command.get_program().to_string_lossy().into_owned();
    info!("正在根据 {manifest:?} 安装依赖 ({program}) ...");

    let status = command.status().map_err(|source| InstallError::Spawn {
        program: program.clone(),
        source,
    });
    let result = match status {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(InstallError::NonZeroExit {
            program,
            code: status.code(),
        }),
        Err(err) => Err(err),
    };

    match &result {
        Ok(()) => info!("依赖安装成功"),
        Err(err) => error!("安装依赖时出错: {err}"),
    }
    result
}
