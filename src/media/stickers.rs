// SPDX-License-Identifier: MPL-2.0
//! Bundled emoji stickers.
//!
//! Stickers are SVG documents embedded at compile time. They are shown as
//! vector images in the picker and rasterized with `resvg` when the view is
//! composed for export.

use crate::error::{Error, Result};
use image_rs::RgbaImage;
use resvg::usvg;
use std::fmt;

/// Identifier of one of the bundled stickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StickerId {
    Grin,
    HeartEyes,
    Party,
    Sunglasses,
    Heart,
    Star,
}

impl StickerId {
    /// All stickers in picker order.
    pub const ALL: [StickerId; 6] = [
        StickerId::Grin,
        StickerId::HeartEyes,
        StickerId::Party,
        StickerId::Sunglasses,
        StickerId::Heart,
        StickerId::Star,
    ];

    /// Stable name, also used as the asset file stem.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            StickerId::Grin => "grin",
            StickerId::HeartEyes => "heart-eyes",
            StickerId::Party => "party",
            StickerId::Sunglasses => "sunglasses",
            StickerId::Heart => "heart",
            StickerId::Star => "star",
        }
    }

    /// Raw SVG document for this sticker.
    #[must_use]
    pub fn svg_data(self) -> &'static [u8] {
        match self {
            StickerId::Grin => include_bytes!("../../assets/stickers/grin.svg"),
            StickerId::HeartEyes => include_bytes!("../../assets/stickers/heart-eyes.svg"),
            StickerId::Party => include_bytes!("../../assets/stickers/party.svg"),
            StickerId::Sunglasses => include_bytes!("../../assets/stickers/sunglasses.svg"),
            StickerId::Heart => include_bytes!("../../assets/stickers/heart.svg"),
            StickerId::Star => include_bytes!("../../assets/stickers/star.svg"),
        }
    }

    /// Rasterizes the sticker into a square RGBA image of `size` pixels.
    pub fn rasterize(self, size: u32) -> Result<RgbaImage> {
        rasterize_svg(self.svg_data(), size, size)
    }
}

impl fmt::Display for StickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders an SVG document scaled to exactly `width` x `height` pixels.
pub(crate) fn rasterize_svg(data: &[u8], width: u32, height: u32) -> Result<RgbaImage> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())?;

    let orig_size = tree.size();
    if orig_size.width() <= 0.0 || orig_size.height() <= 0.0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / orig_size.width(),
        height as f32 / orig_size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; the image crate expects straight alpha.
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| Error::Svg("Rasterized SVG has unexpected buffer size".into()))
}
