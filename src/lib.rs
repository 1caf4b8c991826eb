//! # ML Build
//!
//! 机器学习 CI/CD 演示流水线中的"构建"阶段：
//! 1. 调用包管理器安装依赖清单中的包，失败则以退出码 1 终止；
//! 2. 加载 Fashion-MNIST（或 MNIST），将像素从 [0, 255] 缩放到 [0, 1]，
//!    把图像重塑为 [N, 28, 28, 1]，再将四个数组分别序列化到输出目录，
//!    供后续独立的训练阶段读取。
//!

pub mod artifact;
pub mod config;
pub mod data;
pub mod errors;
pub mod install;
pub mod pipeline;

pub use errors::BuildError;
pub use pipeline::{BuildReport, BuildStage};
