//! Diaper photo ingestion: decode, downscale, re-encode as JPEG.
//!
//! `compress` is a pure transform from raw file bytes to a bounded-size JPEG.
//! It knows nothing about where the result is stored or how it is shown.

use crate::errors::AppResult;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ExtendedColorType, ImageEncoder};
use std::fmt;
use std::fs;
use std::path::Path;

pub const DEFAULT_MAX_WIDTH: u32 = 800;
pub const DEFAULT_QUALITY: f32 = 0.7;

/// Encoding of an `EncodedImage`. Only JPEG is produced today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
}

impl ImageFormat {
    pub fn mime(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

/// A recompressed image ready to be previewed, attached to an entry, or
/// embedded in a document.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("bytes", &self.bytes.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .finish()
    }
}

impl EncodedImage {
    /// `data:image/jpeg;base64,...`
    pub fn data_uri(&self) -> String {
        let b64 = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.format.mime(), b64)
    }

    /// Height/width ratio, used to fit the image into a layout box.
    pub fn aspect(&self) -> f32 {
        if self.width == 0 {
            return 1.0;
        }
        self.height as f32 / self.width as f32
    }
}

/// Target size for an image of `width`×`height` capped at `max_width`.
/// Never upscales; keeps at least one pixel in each direction.
pub fn scaled_size(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width || width == 0 {
        return (width, height);
    }
    let scale = max_width as f64 / width as f64;
    let h = ((height as f64) * scale).round().max(1.0) as u32;
    (max_width, h)
}

/// Decode `raw`, downscale to `max_width` and encode as JPEG at `quality`
/// (0.0..=1.0).
pub fn compress(raw: &[u8], max_width: u32, quality: f32) -> AppResult<EncodedImage> {
    let img = image::load_from_memory(raw)?;

    let (w, h) = scaled_size(img.width(), img.height(), max_width.max(1));
    let img = if (w, h) != (img.width(), img.height()) {
        img.resize_exact(w, h, FilterType::Triangle)
    } else {
        img
    };

    // JPEG has no alpha channel
    let rgb = img.to_rgb8();

    let q = (quality.clamp(0.01, 1.0) * 100.0).round() as u8;
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, q).write_image(
        rgb.as_raw(),
        w,
        h,
        ExtendedColorType::Rgb8,
    )?;

    tracing::debug!(width = w, height = h, quality = q, size = bytes.len(), "image recompressed");

    Ok(EncodedImage {
        bytes,
        width: w,
        height: h,
        format: ImageFormat::Jpeg,
    })
}

/// Read a file from disk and run it through `compress`.
pub fn compress_file(path: &Path, max_width: u32, quality: f32) -> AppResult<EncodedImage> {
    let raw = fs::read(path)?;
    compress(&raw, max_width, quality)
}
