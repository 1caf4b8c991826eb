//! 产物（artifact）读写
//!
//! 每个数组单独写入输出目录下的一个文件，文件名由划分与字段组成
//! （`train_images`、`train_labels`、`test_images`、`test_labels`），
//! 扩展名由 [`ArtifactFormat`] 决定。文件内只有一个数组，不附加版本号或校验信息。

mod error;


use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use ndarray::{Array, Array1, Array4, Dimension};
use ndarray_npy::{ReadableElement, WritableElement, read_npy, write_npy};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::data::{PreparedDataset, Split};

pub use error::ArtifactError;

/// 产物的序列化格式
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactFormat {
    /// NumPy `.npy`，训练阶段可直接 `numpy.load`
    #[default]
    Npy,
    /// bincode 编码的 ndarray（serde 表示）
    Bincode,
}

impl ArtifactFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactFormat::Npy => "npy",
            ArtifactFormat::Bincode => "bin",
        }
    }

    /// 根据文件扩展名推断格式
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("npy") => Ok(ArtifactFormat::Npy),
            Some("bin") => Ok(ArtifactFormat::Bincode),
            _ => Err(ArtifactError::UnknownFormat(path.to_path_buf())),
        }
    }
}

/// 四种产物
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    TrainImages,
    TrainLabels,
    TestImages,
    TestLabels,
}

impl ArtifactKind {
    /// 写入顺序
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::TrainImages,
        ArtifactKind::TrainLabels,
        ArtifactKind::TestImages,
        ArtifactKind::TestLabels,
    ];

    pub fn stem(&self) -> &'static str {
        match self {
            ArtifactKind::TrainImages => "train_images",
            ArtifactKind::TrainLabels => "train_labels",
            ArtifactKind::TestImages => "test_images",
            ArtifactKind::TestLabels => "test_labels",
        }
    }

    pub fn split(&self) -> Split {
        match self {
            ArtifactKind::TrainImages | ArtifactKind::TrainLabels => Split::Train,
            ArtifactKind::TestImages | ArtifactKind::TestLabels => Split::Test,
        }
    }

    pub fn file_name(&self, format: ArtifactFormat) -> String {
        format!("{}.{}", self.stem(), format.extension())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stem())
    }
}

/// 一个已写入磁盘的产物
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    /// 文件大小（字节）
    pub bytes: u64,
}

/// 将准备好的数据集的四个数组逐个写入 `dir`
///
/// 目录不存在时创建（已存在不报错）；同名文件直接覆盖。
/// 中途失败时已写入的文件保留原样。
pub fn save_prepared(
    dataset: &PreparedDataset,
    dir: &Path,
    format: ArtifactFormat,
) -> Result<Vec<Artifact>, ArtifactError> {
    std::fs::create_dir_all(dir)?;

    let mut artifacts = Vec::with_capacity(ArtifactKind::ALL.len());
    for kind in ArtifactKind::ALL {
        let path = dir.join(kind.file_name(format));
        match kind {
            ArtifactKind::TrainImages | ArtifactKind::TestImages => {
                save_array(dataset.images(kind.split()), &path, format)?
            }
            ArtifactKind::TrainLabels | ArtifactKind::TestLabels => {
                save_array(dataset.labels(kind.split()), &path, format)?
            }
        }
        let bytes = std::fs::metadata(&path)?.len();
        info!("已写入 {kind}: {path:?} ({bytes} 字节)");
        artifacts.push(Artifact { kind, path, bytes });
    }
    Ok(artifacts)
}

/// 将单个数组写入文件（覆盖）
pub fn save_array<A, D>(
    array: &Array<A, D>,
    path: &Path,
    format: ArtifactFormat,
) -> Result<(), ArtifactError>
where
    A: WritableElement + Serialize,
    D: Dimension + Serialize,
{
    match format {
        ArtifactFormat::Npy => write_npy(path, array)?,
        ArtifactFormat::Bincode => {
            let mut writer = BufWriter::new(File::create(path)?);
            bincode::serialize_into(&mut writer, array)?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// 从文件读取单个数组
pub fn load_array<A, D>(path: &Path, format: ArtifactFormat) -> Result<Array<A, D>, ArtifactError>
where
    A: ReadableElement + DeserializeOwned,
    D: Dimension + DeserializeOwned,
{
    let array = match format {
        ArtifactFormat::Npy => read_npy(path)?,
        ArtifactFormat::Bincode => {
            let reader = BufReader::new(File::open(path)?);
            bincode::deserialize_from(reader)?
        }
    };
    Ok(array)
}

/// 读取图像产物 [N, H, W, 1]
pub fn load_images(path: &Path, format: ArtifactFormat) -> Result<Array4<f32>, ArtifactError> {
    load_array(path, format)
}

/// 读取标签产物 [N]
pub fn load_labels(path: &Path, format: ArtifactFormat) -> Result<Array1<u8>, ArtifactError> {
    load_array(path, format)
}
