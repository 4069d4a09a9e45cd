// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for common raster formats (PNG, JPEG, GIF, etc.).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::{Path, PathBuf};

/// A decoded image ready for the Iced image widget.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Image`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img_bytes = std::fs::read(path.as_ref()).map_err(|e| Error::Io(e.to_string()))?;
    decode(&img_bytes)
}

/// Asynchronous variant of [`load_image`] for use inside `Task::perform`.
///
/// The read is delegated to tokio's file system; decoding happens on the
/// same task. Each call resolves exactly once, success or failure.
///
/// # Errors
///
/// Same conditions as [`load_image`].
pub async fn load_image_async(path: PathBuf) -> Result<ImageData> {
    let img_bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| Error::Io(e.to_string()))?;
    decode(&img_bytes)
}

fn decode(img_bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(img_bytes).map_err(|e| Error::Image(e.to_string()))?;
    let (width, height) = img.dimensions();

    let rgba_img = img.to_rgba8();
    let pixels = rgba_img.into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    #[test]
    fn load_missing_file_reports_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does-not-exist.png");

        let err = load_image(&missing).expect_err("missing file should fail");
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn load_corrupt_file_reports_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("broken.png");
        fs::write(&image_path, b"definitely not a png").expect("failed to write file");

        let err = load_image(&image_path).expect_err("corrupt file should fail");
        assert!(matches!(err, Error::Image(_)));
    }

    #[tokio::test]
    async fn async_load_matches_sync_load() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(3, 3, Rgba([0, 255, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image_async(image_path.clone())
            .await
            .expect("async png load should succeed");
        assert_eq!(data.width, 3);
        assert_eq!(data.height, 3);
    }
}
