// SPDX-License-Identifier: MPL-2.0
//! View capture into a local file.

use super::run_blocking;
use crate::media::compose::output_size;
use crate::media::encode::{encode_jpeg, encode_png};
use crate::media::{ImageFormat, ViewSnapshot};
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// Errors raised while capturing the view.
#[derive(Debug, Clone, Error)]
pub enum CaptureError {
    #[error("failed to compose view: {0}")]
    Compose(String),
    #[error("failed to write capture: {0}")]
    Io(String),
}

/// Size and quality of a capture.
///
/// A missing width or height is derived from the canvas aspect ratio.
/// Quality 1.0 produces a lossless PNG; anything lower produces a JPEG.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub quality: f32,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: Some(crate::config::CANVAS_HEIGHT),
            quality: 1.0,
        }
    }
}

impl CaptureOptions {
    #[must_use]
    pub fn format(&self) -> ImageFormat {
        if self.quality >= 1.0 {
            ImageFormat::Png
        } else {
            ImageFormat::Jpeg
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn jpeg_quality(&self) -> u8 {
        (self.quality.clamp(0.01, 1.0) * 100.0).round() as u8
    }
}

/// Renders the composed view to a local image file.
#[async_trait]
pub trait ViewCapture: Send + Sync {
    async fn capture_view(
        &self,
        snapshot: &ViewSnapshot,
        options: CaptureOptions,
    ) -> Result<PathBuf, CaptureError>;
}

/// Off-screen capture that composes the snapshot and writes it to a scratch
/// directory.
#[derive(Debug)]
pub struct RasterCapture {
    capture_dir: PathBuf,
    counter: AtomicU64,
}

impl RasterCapture {
    pub fn new(capture_dir: impl Into<PathBuf>) -> Self {
        Self {
            capture_dir: capture_dir.into(),
            counter: AtomicU64::new(0),
        }
    }

    fn next_path(&self, format: ImageFormat) -> PathBuf {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        self.capture_dir.join(format!(
            "capture-{}-{n}.{}",
            std::process::id(),
            format.extension()
        ))
    }
}

#[async_trait]
impl ViewCapture for RasterCapture {
    async fn capture_view(
        &self,
        snapshot: &ViewSnapshot,
        options: CaptureOptions,
    ) -> Result<PathBuf, CaptureError> {
        let snapshot = snapshot.clone();
        let format = options.format();
        let dir = self.capture_dir.clone();
        let path = self.next_path(format);

        run_blocking(
            move || {
                let (width, height) = output_size(options.width, options.height);
                let image = snapshot
                    .compose_at(width, height)
                    .map_err(|e| CaptureError::Compose(e.to_string()))?;
                let bytes = match format {
                    ImageFormat::Png => encode_png(&image),
                    ImageFormat::Jpeg => encode_jpeg(&image, options.jpeg_quality()),
                }
                .map_err(|e| CaptureError::Compose(e.to_string()))?;

                fs::create_dir_all(&dir).map_err(|e| CaptureError::Io(e.to_string()))?;
                fs::write(&path, bytes).map_err(|e| CaptureError::Io(e.to_string()))?;
                tracing::debug!(path = %path.display(), width, height, "view captured");
                Ok(path)
            },
            CaptureError::Io,
        )
        .await
    }
}
