//! 构建阶段流水线
//!
//! 两个顺序步骤：先安装依赖，再准备数据并写出产物。
//! 安装失败时立即返回，不会进行任何数据准备。

use log::info;

use crate::artifact::{Artifact, save_prepared};
use crate::config::BuildConfig;
use crate::data::{Split, prepare};
use crate::errors::BuildError;
use crate::install::Installer;

/// 一次成功运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// 按写入顺序排列的产物
    pub artifacts: Vec<Artifact>,
    pub train_len: usize,
    pub test_len: usize,
}

pub struct BuildStage<I: Installer> {
    config: BuildConfig,
    installer: I,
}

impl<I: Installer> BuildStage<I> {
    pub fn new(config: BuildConfig, installer: I) -> Self {
        Self { config, installer }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn installer(&self) -> &I {
        &self.installer
    }

    pub fn run(&self) -> Result<BuildReport, BuildError> {
        self.install_requirements()?;
        self.prepare_data()
    }

    /// 第一步：安装依赖
    pub fn install_requirements(&self) -> Result<(), BuildError> {
        if self.config.skip_install {
            info!("跳过依赖安装");
            return Ok(());
        }
        info!("[1/2] 使用 {} 安装依赖", self.installer.describe());
        self.installer.install(&self.config.manifest)?;
        Ok(())
    }

    /// 第二步：加载、归一化、重塑并写出四个数组
    pub fn prepare_data(&self) -> Result<BuildReport, BuildError> {
        info!("[2/2] 准备数据集 {}", self.config.source);
        let raw = self.config.dataset_loader().load()?;
        let dataset = prepare(raw)?;
        for line in dataset.summary() {
            info!("{line}");
        }

        let artifacts = save_prepared(&dataset, &self.config.output_dir, self.config.format)?;
        info!(
            "构建完成: {} 个产物写入 {:?}",
            artifacts.len(),
            self.config.output_dir
        );

        Ok(BuildReport {
            artifacts,
            train_len: dataset.len(Split::Train),
            test_len: dataset.len(Split::Test),
        })
    }
}
