//! # 图标派生变换
//!
//! 从源图生成指定边长的正方形 RGBA 图标。
//!
//! ## 功能
//! - 统一转换为 RGBA（无 alpha 通道的源图补全不透明 alpha）
//! - Lanczos3 高质量重采样到目标尺寸
//! - 合成到全透明画布后保存为 PNG
//!
//! ## 依赖关系
//! - 被 `commands/icons.rs` 调用
//! - 使用 `image` crate

use crate::error::{RelkitError, Result};

use image::imageops::{self, FilterType};
use image::{ImageError, ImageFormat, RgbaImage};
use std::fs;
use std::path::Path;

/// 从源图派生一个 size x size 的 PNG 图标并写入 dest
///
/// dest 的父目录不存在时自动创建。
pub fn derive_icon(source: &Path, size: u32, dest: &Path) -> Result<()> {
    let img = image::open(source).map_err(|e| match e {
        ImageError::IoError(source_err) => RelkitError::FileReadError {
            path: source.display().to_string(),
            source: source_err,
        },
        other => RelkitError::ImageDecodeError {
            path: source.display().to_string(),
            reason: other.to_string(),
        },
    })?;

    // 统一色彩模式，再重采样到精确的目标边长
    let rgba = img.to_rgba8();
    let resized = imageops::resize(&rgba, size, size, FilterType::Lanczos3);

    // 全透明画布，重采样结果锚定在原点
    let mut canvas = RgbaImage::new(size, size);
    imageops::replace(&mut canvas, &resized, 0, 0);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| RelkitError::FileWriteError {
            path: dest.display().to_string(),
            source: e,
        })?;
    }

    canvas
        .save_with_format(dest, ImageFormat::Png)
        .map_err(|e| RelkitError::FileWriteError {
            path: dest.display().to_string(),
            source: match e {
                ImageError::IoError(source_err) => source_err,
                other => std::io::Error::new(std::io::ErrorKind::Other, other.to_string()),
            },
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_derives_exact_size_with_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("app_icon.png");
        RgbImage::from_pixel(512, 512, image::Rgb([200, 40, 40]))
            .save(&source)
            .unwrap();

        let dest = dir.path().join("mipmap-xhdpi/ic_launcher.png");
        derive_icon(&source, 96, &dest).unwrap();

        let icon = image::open(&dest).unwrap().to_rgba8();
        assert_eq!(icon.width(), 96);
        assert_eq!(icon.height(), 96);

        // RGB 源图补全为不透明 alpha
        assert!(icon.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn test_creates_destination_directories() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("logo.png");
        RgbImage::from_pixel(64, 64, image::Rgb([0, 0, 0]))
            .save(&source)
            .unwrap();

        let dest = dir.path().join("a/b/c/icon.png");
        derive_icon(&source, 48, &dest).unwrap();
        assert!(dest.exists());
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = derive_icon(
            &dir.path().join("absent.png"),
            48,
            &dir.path().join("out.png"),
        );
        assert!(matches!(result, Err(RelkitError::FileReadError { .. })));
    }

    #[test]
    fn test_malformed_source_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("broken.png");
        std::fs::write(&source, b"not a png").unwrap();

        let result = derive_icon(&source, 48, &dir.path().join("out.png"));
        assert!(matches!(result, Err(RelkitError::ImageDecodeError { .. })));
    }
}
