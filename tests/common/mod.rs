//! 集成测试公共工具：合成 IDX 数据集、假的依赖安装器

use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;

use ml_build::data::{DatasetSource, Split};
use ml_build::install::{InstallError, Installer};

/// 在 `dir` 下按 `source` 的文件名写入 gz 压缩的合成数据集
///
/// 第 i 张图像的所有像素都等于 `i % 256`，标签为 `i % 10`。
pub fn write_synthetic_dataset(dir: &Path, source: DatasetSource, train: usize, test: usize) {
    std::fs::create_dir_all(dir).unwrap();
    for (split, n) in [(Split::Train, train), (Split::Test, test)] {
        let mut images = Vec::with_capacity(16 + n * 784);
        for value in [2051u32, n as u32, 28, 28] {
            images.extend_from_slice(&value.to_be_bytes());
        }
        for i in 0..n {
            images.extend(std::iter::repeat((i % 256) as u8).take(784));
        }

        let mut labels = Vec::with_capacity(8 + n);
        labels.extend_from_slice(&2049u32.to_be_bytes());
        labels.extend_from_slice(&(n as u32).to_be_bytes());
        labels.extend((0..n).map(|i| (i % 10) as u8));

        write_gz(&dir.join(source.images_file(split).gz_name()), &images);
        write_gz(&dir.join(source.labels_file(split).gz_name()), &labels);
    }
}

fn write_gz(path: &Path, bytes: &[u8]) {
    let mut encoder = GzEncoder::new(std::fs::File::create(path).unwrap(), Compression::fast());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap();
}

/// 记录调用、按预设结果返回的安装器
pub struct FakeInstaller {
    exit_code: Option<i32>,
    pub calls: RefCell<Vec<PathBuf>>,
}

impl FakeInstaller {
    pub fn succeeding() -> Self {
        Self {
            exit_code: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Installer for FakeInstaller {
    fn install(&self, manifest: &Path) -> Result<(), InstallError> {
        self.calls.borrow_mut().push(manifest.to_path_buf());
        match self.exit_code {
            None => Ok(()),
            Some(code) => Err(InstallError::NonZeroExit {
                program: "fake-pip".to_string(),
                code: Some(code),
            }),
        }
    }

    fn describe(&self) -> String {
        "fake-pip".to_string()
    }
}
