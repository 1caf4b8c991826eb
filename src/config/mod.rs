//! 构建阶段的配置
//!
//! 默认值与原始构建脚本一致（Fashion-MNIST、`requirements.txt`、`training_data/`），
//! 因此不带任何参数运行即可。需要替换数据来源或输出位置时，
//! 可通过 JSON 配置文件或命令行参数覆盖，命令行优先。


use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::artifact::ArtifactFormat;
use crate::data::{DatasetLoader, DatasetSource};
use crate::install::{DEFAULT_MANIFEST, DEFAULT_PYTHON};

/// 输出目录名
pub const OUTPUT_DIR_NAME: &str = "training_data";

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("读取配置文件 {path:?} 失败: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("解析配置文件 {path:?} 失败: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 构建阶段的完整配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// 依赖清单路径
    pub manifest: PathBuf,
    /// 运行 pip 的 Python 解释器
    pub python: PathBuf,
    /// 跳过依赖安装（环境已就绪时）
    pub skip_install: bool,
    /// 数据集来源
    pub source: DatasetSource,
    /// 覆盖数据集下载地址
    pub base_url: Option<String>,
    /// 数据集缓存目录，None 则使用 `default_data_dir()/<name>`
    pub data_dir: Option<PathBuf>,
    /// 是否自动下载缺失的数据文件
    pub download: bool,
    /// 产物输出目录
    pub output_dir: PathBuf,
    /// 产物格式
    pub format: ArtifactFormat,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            python: PathBuf::from(DEFAULT_PYTHON),
            skip_install: false,
            source: DatasetSource::default(),
            base_url: None,
            data_dir: None,
            download: true,
            output_dir: default_output_dir(),
            format: ArtifactFormat::default(),
        }
    }
}

impl BuildConfig {
    /// 从 JSON 文件读取配置，缺省字段取默认值
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 按配置构造数据集加载器
    pub fn dataset_loader(&self) -> DatasetLoader {
        let mut loader = DatasetLoader::new(self.source).download(self.download);
        if let Some(root) = &self.data_dir {
            loader = loader.root(root);
        }
        if let Some(base_url) = &self.base_url {
            loader = loader.base_url(base_url);
        }
        loader
    }
}

/// 默认输出目录：crate 根目录下的 `training_data/`
pub fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(OUTPUT_DIR_NAME)
}

/// 命令行参数
///
/// 全部可选；不带参数时与原始构建脚本行为一致。
#[derive(Parser, Debug, Default)]
#[command(name = "ml_build")]
#[command(about = "安装依赖并准备训练数据（ML 流水线的构建阶段）")]
pub struct Cli {
    /// JSON 配置文件
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// 依赖清单路径
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// 运行 pip 的 Python 解释器
    #[arg(long)]
    pub python: Option<PathBuf>,

    /// 跳过依赖安装
    #[arg(long)]
    pub skip_install: bool,

    /// 数据集来源
    #[arg(long, value_enum)]
    pub source: Option<DatasetSource>,

    /// 数据集下载地址（镜像）
    #[arg(long)]
    pub base_url: Option<String>,

    /// 数据集缓存目录
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// 不下载缺失的数据文件
    #[arg(long)]
    pub no_download: bool,

    /// 产物输出目录
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// 产物格式
    #[arg(long, value_enum)]
    pub format: Option<ArtifactFormat>,
}

impl Cli {
    /// 合并配置文件（若有）与命令行参数
    pub fn into_config(self) -> Result<BuildConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => BuildConfig::from_json_file(path)?,
            None => BuildConfig::default(),
        };

        if let Some(manifest) = self.manifest {
            config.manifest = manifest;
        }
        if let Some(python) = self.python {
            config.python = python;
        }
        if self.skip_install {
            config.skip_install = true;
        }
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = Some(base_url);
        }
        if let Some(data_dir) = self.data_dir {
            config.data_dir = Some(data_dir);
        }
        if self.no_download {
            config.download = false;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        Ok(config)
    }
}
