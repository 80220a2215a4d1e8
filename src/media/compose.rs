// SPDX-License-Identifier: MPL-2.0
//! Composition of the sticker view into a static image.
//!
//! This is the off-screen equivalent of what the image viewer shows: the
//! background (picked photo or bundled placeholder) scaled to cover the
//! 320x440 canvas with rounded corners, and the placed sticker on top.

use crate::config::{CANVAS_CORNER_RADIUS, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::error::{Error, Result};
use crate::media::stickers::rasterize_svg;
use crate::session::{ImageRef, PlacedSticker};
use image_rs::imageops::{self, FilterType};
use image_rs::RgbaImage;

/// Bundled placeholder shown until the user picks a photo.
pub const PLACEHOLDER_SVG: &[u8] = include_bytes!("../../assets/images/background.svg");

/// Source of the background layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Placeholder,
    Picked(ImageRef),
}

/// Everything needed to reproduce the on-screen composed view.
///
/// This is the "view handle" passed to exporters; it is a plain value so it
/// can be moved into asynchronous capability calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub background: Background,
    pub sticker: Option<PlacedSticker>,
}

impl ViewSnapshot {
    /// Composes the snapshot at its native 320x440 size.
    pub fn compose(&self) -> Result<RgbaImage> {
        self.compose_at(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    /// Composes the snapshot and scales the result to `width` x `height`.
    pub fn compose_at(&self, width: u32, height: u32) -> Result<RgbaImage> {
        if width == 0 || height == 0 {
            return Err(Error::Image(format!(
                "Invalid output size: {width}x{height}"
            )));
        }

        let mut canvas = self.render_background()?;
        round_corners(&mut canvas, CANVAS_CORNER_RADIUS);

        if let Some(placed) = &self.sticker {
            let size = placed.placement.size();
            let sticker = placed.id.rasterize(size)?;
            imageops::overlay(
                &mut canvas,
                &sticker,
                placed.placement.x.round() as i64,
                placed.placement.y.round() as i64,
            );
        }

        if (width, height) == (CANVAS_WIDTH, CANVAS_HEIGHT) {
            Ok(canvas)
        } else {
            Ok(imageops::resize(&canvas, width, height, FilterType::Lanczos3))
        }
    }

    fn render_background(&self) -> Result<RgbaImage> {
        match &self.background {
            Background::Placeholder => rasterize_svg(PLACEHOLDER_SVG, CANVAS_WIDTH, CANVAS_HEIGHT),
            Background::Picked(image) => {
                let decoded = image_rs::open(image.as_path())?;
                // Cover: scale to fill the canvas, crop the overflow around the center.
                Ok(decoded
                    .resize_to_fill(CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Lanczos3)
                    .to_rgba8())
            }
        }
    }
}

/// Output size for a capture constrained by an optional width and height.
///
/// A missing dimension is derived from the canvas aspect ratio.
#[must_use]
pub fn output_size(width: Option<u32>, height: Option<u32>) -> (u32, u32) {
    let aspect = CANVAS_WIDTH as f32 / CANVAS_HEIGHT as f32;
    match (width, height) {
        (Some(w), Some(h)) => (w, h),
        (Some(w), None) => (w, ((w as f32 / aspect).round() as u32).max(1)),
        (None, Some(h)) => (((h as f32 * aspect).round() as u32).max(1), h),
        (None, None) => (CANVAS_WIDTH, CANVAS_HEIGHT),
    }
}

/// Clears the alpha channel outside a rounded rectangle.
fn round_corners(image: &mut RgbaImage, radius: f32) {
    let (width, height) = image.dimensions();
    let (w, h) = (width as f32, height as f32);
    let radius = radius.min(w / 2.0).min(h / 2.0);

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        // Sample the pixel center
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        let cx = if px < radius {
            radius
        } else if px > w - radius {
            w - radius
        } else {
            continue;
        };
        let cy = if py < radius {
            radius
        } else if py > h - radius {
            h - radius
        } else {
            continue;
        };

        let distance = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
        if distance > radius {
            pixel.0[3] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::stickers::StickerId;
    use crate::session::StickerPlacement;

    fn placeholder_with(sticker: Option<PlacedSticker>) -> ViewSnapshot {
        ViewSnapshot {
            background: Background::Placeholder,
            sticker,
        }
    }

    #[test]
    fn placeholder_composes_at_canvas_size() {
        let image = placeholder_with(None).compose().expect("compose");
        assert_eq!(image.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }

    #[test]
    fn corners_are_transparent_and_center_is_opaque() {
        let image = placeholder_with(None).compose().expect("compose");
        assert_eq!(image.get_pixel(0, 0).0[3], 0);
        assert_eq!(image.get_pixel(CANVAS_WIDTH - 1, CANVAS_HEIGHT - 1).0[3], 0);
        assert_eq!(image.get_pixel(CANVAS_WIDTH / 2, CANVAS_HEIGHT / 2).0[3], 255);
    }

    #[test]
    fn sticker_changes_pixels_in_its_region() {
        let plain = placeholder_with(None).compose().expect("compose");
        let placement = StickerPlacement::default();
        let decorated = placeholder_with(Some(PlacedSticker {
            id: StickerId::Grin,
            placement,
        }))
        .compose()
        .expect("compose");

        let cx = (placement.x as u32) + 20;
        let cy = (placement.y as u32) + 20;
        assert_ne!(plain.get_pixel(cx, cy), decorated.get_pixel(cx, cy));
        // Far away from the sticker nothing changes
        assert_eq!(plain.get_pixel(10, 400), decorated.get_pixel(10, 400));
    }

    #[test]
    fn compose_at_scales_output() {
        let image = placeholder_with(None).compose_at(160, 220).expect("compose");
        assert_eq!(image.dimensions(), (160, 220));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(placeholder_with(None).compose_at(0, 440).is_err());
    }

    #[test]
    fn missing_background_file_is_an_error() {
        let snapshot = ViewSnapshot {
            background: Background::Picked(ImageRef::new("/definitely/not/here.png")),
            sticker: None,
        };
        assert!(snapshot.compose().is_err());
    }

    #[test]
    fn output_size_derives_missing_dimension() {
        assert_eq!(output_size(None, Some(440)), (320, 440));
        assert_eq!(output_size(Some(160), None), (160, 220));
        assert_eq!(output_size(None, None), (CANVAS_WIDTH, CANVAS_HEIGHT));
        assert_eq!(output_size(Some(10), Some(20)), (10, 20));
    }
}
