//! # Photo Pipeline
//!
//! Turns a user-selected image file into the compact data-URL string stored
//! inside a country record. The pipeline runs in fixed stages:
//!
//! ```text
//! decode (file → bitmap) → scale (fixed width, aspect kept) → encode (JPEG → base64 data URL)
//! ```
//!
//! Each stage fails with its own [`PhotoError`] variant so callers can tell
//! a bad path from a broken image from an encoder fault.
//!
//! Storing photos as base64 JPEG inside the JSON store keeps everything in
//! one slot at the cost of store size; the fixed width and quality keep each
//! entry small.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use thiserror::Error;

/// Prefix every stored photo string carries.
pub const DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("could not decode photo: {0}")]
    Decode(image::ImageError),

    #[error("could not encode photo: {0}")]
    Encode(image::ImageError),
}

/// Knobs for the pipeline, sourced from [`crate::config::MunduaConfig`].
#[derive(Debug, Clone, Copy)]
pub struct PhotoOptions {
    /// Target width in pixels; height scales proportionally.
    pub max_width: u32,
    /// JPEG quality factor (0-100).
    pub quality: u8,
}

impl Default for PhotoOptions {
    fn default() -> Self {
        Self {
            max_width: 800,
            quality: 50,
        }
    }
}

/// Run the full pipeline on an image file.
pub fn process(path: &Path, opts: &PhotoOptions) -> Result<String, PhotoError> {
    let original = decode(path)?;
    let scaled = scale(&original, opts.max_width);
    encode(&scaled, opts.quality)
}

fn decode(path: &Path) -> Result<DynamicImage, PhotoError> {
    if !path.is_file() {
        return Err(PhotoError::NotAFile(path.to_path_buf()));
    }
    image::open(path).map_err(PhotoError::Decode)
}

/// Rescale to the target width, height proportional. The original is always
/// resampled, even when it is already narrower than the target.
fn scale(image: &DynamicImage, max_width: u32) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    let target_height = ((height as f64) * (max_width as f64) / (width as f64))
        .round()
        .max(1.0) as u32;
    image.resize_exact(max_width, target_height, FilterType::Triangle)
}

fn encode(image: &DynamicImage, quality: u8) -> Result<String, PhotoError> {
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    // JPEG has no alpha channel; flatten before encoding.
    DynamicImage::ImageRgb8(image.to_rgb8())
        .write_with_encoder(encoder)
        .map_err(PhotoError::Encode)?;
    Ok(format!("{}{}", DATA_URL_PREFIX, STANDARD.encode(&buf)))
}

/// Media type and decoded byte size of a stored photo string, for display.
pub fn describe(data_url: &str) -> (String, usize) {
    let (media_type, payload) = data_url
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .unwrap_or(("unknown", data_url));
    // 4 base64 chars encode 3 bytes; close enough for display.
    (media_type.to_string(), payload.len() * 3 / 4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::TempDir;

    fn sample_image(dir: &TempDir, width: u32, height: u32) -> std::path::PathBuf {
        let mut img = RgbImage::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = image::Rgb([(x % 256) as u8, (y % 256) as u8, 128]);
        }
        let path = dir.path().join("sample.png");
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn pipeline_produces_a_jpeg_data_url() {
        let dir = TempDir::new().unwrap();
        let path = sample_image(&dir, 160, 120);

        let encoded = process(&path, &PhotoOptions::default()).unwrap();
        assert!(encoded.starts_with(DATA_URL_PREFIX));
    }

    #[test]
    fn scaling_preserves_aspect_ratio() {
        let dir = TempDir::new().unwrap();
        let path = sample_image(&dir, 1600, 1200);

        let opts = PhotoOptions {
            max_width: 80,
            quality: 50,
        };
        let encoded = process(&path, &opts).unwrap();

        let bytes = STANDARD
            .decode(encoded.strip_prefix(DATA_URL_PREFIX).unwrap())
            .unwrap();
        let round_tripped = image::load_from_memory(&bytes).unwrap();
        assert_eq!(round_tripped.width(), 80);
        assert_eq!(round_tripped.height(), 60);
    }

    #[test]
    fn narrow_images_are_scaled_up_to_the_target_width() {
        let dir = TempDir::new().unwrap();
        let path = sample_image(&dir, 40, 20);

        let opts = PhotoOptions {
            max_width: 80,
            quality: 50,
        };
        let encoded = process(&path, &opts).unwrap();

        let bytes = STANDARD
            .decode(encoded.strip_prefix(DATA_URL_PREFIX).unwrap())
            .unwrap();
        let round_tripped = image::load_from_memory(&bytes).unwrap();
        assert_eq!(round_tripped.width(), 80);
        assert_eq!(round_tripped.height(), 40);
    }

    #[test]
    fn rejects_paths_that_are_not_files() {
        let dir = TempDir::new().unwrap();
        let err = process(dir.path(), &PhotoOptions::default()).unwrap_err();
        assert!(matches!(err, PhotoError::NotAFile(_)));
    }

    #[test]
    fn rejects_files_that_are_not_images() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, "plain text").unwrap();

        let err = process(&path, &PhotoOptions::default()).unwrap_err();
        assert!(matches!(err, PhotoError::Decode(_)));
    }

    #[test]
    fn describe_reports_media_type_and_size() {
        let (media_type, size) = describe("data:image/jpeg;base64,aaaaaaaa");
        assert_eq!(media_type, "image/jpeg");
        assert_eq!(size, 6);
    }
}
