// SPDX-License-Identifier: MPL-2.0
//! Encoding of composed views into PNG, JPEG and `data:` URLs.

use crate::config::BACKGROUND_RGB;
use crate::error::{Error, Result};
use base64::Engine;
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::codecs::png::PngEncoder;
use image_rs::{ExtendedColorType, ImageEncoder, RgbaImage};

/// Output format for encoded images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// PNG format (lossless, keeps transparent corners).
    #[default]
    Png,
    /// JPEG format (lossy, corners flattened onto the screen background).
    Jpeg,
}

impl ImageFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
        }
    }

    /// Returns the MIME type for this format.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }

    /// Detects the format from a MIME type.
    #[must_use]
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime {
            "image/png" => Some(ImageFormat::Png),
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }
}

/// Encodes the image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| Error::Image(format!("PNG encoding failed: {e}")))?;
    Ok(buf)
}

/// Encodes the image as JPEG bytes with the given quality (1-100).
///
/// JPEG has no alpha channel, so transparent pixels are blended onto the
/// screen background color.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode_jpeg(image: &RgbaImage, quality: u8) -> Result<Vec<u8>> {
    let bg = BACKGROUND_RGB;
    let mut rgb_data = Vec::with_capacity((image.width() * image.height() * 3) as usize);
    for pixel in image.pixels() {
        let alpha = f32::from(pixel.0[3]) / 255.0;
        let inv = 1.0 - alpha;
        for channel in 0..3 {
            let value = f32::from(pixel.0[channel]).mul_add(alpha, f32::from(bg[channel]) * inv);
            rgb_data.push(value.round() as u8);
        }
    }

    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100))
        .write_image(
            &rgb_data,
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| Error::Image(format!("JPEG encoding failed: {e}")))?;
    Ok(buf)
}

/// Encodes the image in `format` and wraps it in a base64 `data:` URL.
pub fn to_data_url(image: &RgbaImage, format: ImageFormat, quality: u8) -> Result<String> {
    let bytes = match format {
        ImageFormat::Png => encode_png(image)?,
        ImageFormat::Jpeg => encode_jpeg(image, quality)?,
    };
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{encoded}", format.mime_type()))
}

/// Splits a base64 `data:` URL into its MIME type and decoded payload.
pub fn decode_data_url(url: &str) -> Result<(String, Vec<u8>)> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| Error::Image("Not a data URL".to_string()))?;
    let (metadata, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::Image("Malformed data URL: missing comma".to_string()))?;

    let mime = metadata
        .strip_suffix(";base64")
        .ok_or_else(|| Error::Image("Only base64 data URLs are supported".to_string()))?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| Error::Image(format!("Invalid base64 payload: {e}")))?;

    Ok((mime.to_string(), bytes))
}
