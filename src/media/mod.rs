// SPDX-License-Identifier: MPL-2.0
//! Image composition and encoding.
//!
//! - [`stickers`] - Bundled emoji stickers and SVG rasterization
//! - [`compose`] - Off-screen rendering of the composed sticker view
//! - [`encode`] - PNG/JPEG encoders and `data:` URL helpers

pub mod compose;
pub mod encode;
pub mod stickers;

pub use compose::{Background, ViewSnapshot};
pub use encode::ImageFormat;
pub use stickers::StickerId;

/// File extensions offered by the image picker.
pub const PICKABLE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff",
];
