// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Canvas**: Size of the composed sticker view
//! - **Sticker**: Base sticker size and default placement
//! - **Export**: Encoder quality and output file naming

// ==========================================================================
// Canvas Defaults
// ==========================================================================

/// Width of the composed view (background + sticker) in pixels.
pub const CANVAS_WIDTH: u32 = 320;

/// Height of the composed view in pixels.
pub const CANVAS_HEIGHT: u32 = 440;

/// Corner radius applied to the background image.
pub const CANVAS_CORNER_RADIUS: f32 = 18.0;

/// Screen background color (`#25292e`), also used to flatten JPEG exports.
pub const BACKGROUND_RGB: [u8; 3] = [0x25, 0x29, 0x2e];

// ==========================================================================
// Sticker Defaults
// ==========================================================================

/// Edge length of a sticker at 1x scale.
pub const STICKER_BASE_SIZE: u32 = 40;

/// Scale applied when the sticker is enlarged with a double click.
pub const STICKER_ENLARGED_SCALE: u32 = 2;

/// Vertical offset of a freshly placed sticker, measured from the canvas top.
pub const STICKER_DEFAULT_Y: f32 = 90.0;

// ==========================================================================
// Export Defaults
// ==========================================================================

/// JPEG quality (1-100) used by the download exporter.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Minimum accepted JPEG quality.
pub const MIN_JPEG_QUALITY: u8 = 1;

/// Maximum accepted JPEG quality.
pub const MAX_JPEG_QUALITY: u8 = 100;

/// File name offered for downloaded images.
pub const DEFAULT_DOWNLOAD_FILE_NAME: &str = "sticker-smash.jpeg";

/// Prefix of images saved into the gallery.
pub const GALLERY_FILE_PREFIX: &str = "sticker-smash";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(CANVAS_WIDTH > 0);
    assert!(CANVAS_HEIGHT > 0);
    assert!(STICKER_BASE_SIZE * STICKER_ENLARGED_SCALE <= CANVAS_WIDTH);
    assert!(STICKER_DEFAULT_Y >= 0.0);
    assert!(MIN_JPEG_QUALITY > 0);
    assert!(DEFAULT_JPEG_QUALITY >= MIN_JPEG_QUALITY);
    assert!(DEFAULT_JPEG_QUALITY <= MAX_JPEG_QUALITY);
};
