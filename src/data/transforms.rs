//! 数据变换函数
//!
//! 提供图像预处理操作：像素归一化、追加通道维度。

use ndarray::{Array3, Array4};

use crate::data::error::DataError;

/// 像素最大值，归一化时的除数
pub const PIXEL_MAX: f32 = 255.0;

/// 将 0-255 像素值归一化到 0-1
///
/// # 参数
/// - `images`: 原始像素，形状 [N, H, W]，值范围 [0, 255]
///
/// # 返回
/// 归一化后的图像，形状不变，值范围 [0, 1]
pub fn normalize_pixels(images: &Array3<u8>) -> Array3<f32> {
    images.mapv(|p| f32::from(p) / PIXEL_MAX)
}

/// 为图像追加单通道维度：[N, H, W] → [N, H, W, 1]（NHWC 格式）
///
/// 只改变维度结构，不改变元素数量和顺序。
pub fn add_channel_dim(images: Array3<f32>) -> Result<Array4<f32>, DataError> {
    let (n, h, w) = images.dim();
    // 非标准布局时 into_shape 会失败，先转为标准布局
    let images = if images.is_standard_layout() {
        images
    } else {
        images.as_standard_layout().into_owned()
    };
    images
        .into_shape((n, h, w, 1))
        .map_err(|_| DataError::ShapeMismatch {
            expected: vec![n, h, w, 1],
            got: vec![n, h, w],
        })
}
