//! The fixed enhancement transform: contrast x1.5 followed by brightness
//! x1.2, applied per RGB channel with 8-bit clamping after each step.
//!
//! Operates on encoded bytes in and out so the blob store layer never sees
//! a half-written image: a decode or encode failure here produces no output
//! at all.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use thiserror::Error;

/// Multiplicative contrast factor applied about the image's mean luma.
pub const CONTRAST_FACTOR: f32 = 1.5;
/// Multiplicative brightness factor applied after the contrast step.
pub const BRIGHTNESS_FACTOR: f32 = 1.2;

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Resolve the encode format from a filename's extension (case-insensitive).
pub fn format_for(name: &str) -> Result<ImageFormat, EnhanceError> {
    Path::new(name)
        .extension()
        .and_then(ImageFormat::from_extension)
        .ok_or_else(|| EnhanceError::UnsupportedFormat(name.to_string()))
}

/// Decode `data`, apply the two enhancement steps, and re-encode in
/// `format`. JPEG output drops the alpha channel; everything else keeps it.
pub fn enhance_image(data: &[u8], format: ImageFormat) -> Result<Vec<u8>, EnhanceError> {
    let img = image::load_from_memory(data).map_err(EnhanceError::Decode)?;

    let mut pixels = img.into_rgba8();
    adjust_contrast(&mut pixels, CONTRAST_FACTOR);
    adjust_brightness(&mut pixels, BRIGHTNESS_FACTOR);

    let out = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(pixels).to_rgb8().into(),
        _ => DynamicImage::ImageRgba8(pixels),
    };

    let mut buf = Cursor::new(Vec::new());
    out.write_to(&mut buf, format).map_err(EnhanceError::Encode)?;
    Ok(buf.into_inner())
}

/// Scale each channel away from the image's mean luma.
///
/// The pivot is the rounded mean of the ITU-R 601-2 luma of the original
/// pixels, so a uniform image passes through unchanged regardless of the
/// factor. Alpha is untouched.
fn adjust_contrast(pixels: &mut RgbaImage, factor: f32) {
    let mean = luma_mean(pixels);
    for p in pixels.pixels_mut() {
        for c in &mut p.0[..3] {
            *c = (mean + factor * (*c as f32 - mean) + 0.5).clamp(0.0, 255.0) as u8;
        }
    }
}

/// Multiply each channel by `factor`, clamping to the 8-bit range.
fn adjust_brightness(pixels: &mut RgbaImage, factor: f32) {
    for p in pixels.pixels_mut() {
        for c in &mut p.0[..3] {
            *c = (*c as f32 * factor + 0.5).clamp(0.0, 255.0) as u8;
        }
    }
}

/// Rounded mean of the per-pixel integer luma (ITU-R 601-2 weights).
fn luma_mean(pixels: &RgbaImage) -> f32 {
    let mut total: u64 = 0;
    for p in pixels.pixels() {
        let [r, g, b, _] = p.0;
        total += (r as u64 * 299 + g as u64 * 587 + b as u64 * 114) / 1000;
    }
    let count = (pixels.width() as u64 * pixels.height() as u64).max(1);
    ((total as f64 / count as f64) + 0.5).floor() as f32
}
