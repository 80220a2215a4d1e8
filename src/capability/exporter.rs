// SPDX-License-Identifier: MPL-2.0
//! The two export branches behind a single trait.
//!
//! [`GallerySaveExporter`] captures the view to a file and saves it into
//! the media library. [`DownloadExporter`] renders the view to a JPEG data
//! URL and downloads it. One of them is chosen at startup, see
//! [`super::platform`].

use super::capture::{CaptureError, CaptureOptions, ViewCapture};
use super::download::{DataUrlRenderer, DownloadError, Downloader, RenderOptions};
use super::gallery::{MediaLibrary, SaveError};
use super::permission::MediaPermission;
use super::run_blocking;
use crate::media::ViewSnapshot;
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Where an export ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportReceipt {
    SavedToGallery { path: PathBuf },
    Downloaded { path: PathBuf },
}

impl ExportReceipt {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ExportReceipt::SavedToGallery { path } | ExportReceipt::Downloaded { path } => path,
        }
    }
}

/// Errors raised by an export, tagged with the failing step.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("capture failed: {0}")]
    Capture(#[from] CaptureError),
    #[error("save failed: {0}")]
    Save(#[from] SaveError),
    #[error("render failed: {0}")]
    Render(DownloadError),
    #[error("download failed: {0}")]
    Download(DownloadError),
}

/// Persists a snapshot of the composed view.
#[async_trait]
pub trait Exporter: Send + Sync {
    async fn export(&self, snapshot: ViewSnapshot) -> Result<ExportReceipt, ExportError>;
}

/// Capture, ensure permission, save into the media library.
pub struct GallerySaveExporter {
    capture: Arc<dyn ViewCapture>,
    permission: Arc<dyn MediaPermission>,
    library: Arc<dyn MediaLibrary>,
    options: CaptureOptions,
}

impl GallerySaveExporter {
    pub fn new(
        capture: Arc<dyn ViewCapture>,
        permission: Arc<dyn MediaPermission>,
        library: Arc<dyn MediaLibrary>,
    ) -> Self {
        Self {
            capture,
            permission,
            library,
            options: CaptureOptions::default(),
        }
    }
}

#[async_trait]
impl Exporter for GallerySaveExporter {
    async fn export(&self, snapshot: ViewSnapshot) -> Result<ExportReceipt, ExportError> {
        let captured = self.capture.capture_view(&snapshot, self.options).await?;

        // Save is attempted whatever the permission outcome.
        if !self.permission.status().await.is_granted() {
            let status = self.permission.request().await;
            if !status.is_granted() {
                tracing::warn!(?status, "saving to gallery without permission");
            }
        }

        let path = match self.library.save_to_library(&captured).await {
            Ok(path) => path,
            Err(e) => {
                discard_capture(captured).await;
                return Err(e.into());
            }
        };
        tracing::info!(path = %path.display(), "image saved to gallery");
        Ok(ExportReceipt::SavedToGallery { path })
    }
}

/// Removes a capture that never made it into the library.
async fn discard_capture(path: PathBuf) {
    let shown = path.display().to_string();
    let removed = run_blocking(
        move || fs::remove_file(&path).map_err(|e| e.to_string()),
        std::convert::identity,
    )
    .await;
    if let Err(error) = removed {
        tracing::debug!(path = %shown, %error, "capture left behind");
    }
}

/// Render to a data URL and download it.
pub struct DownloadExporter {
    renderer: Arc<dyn DataUrlRenderer>,
    downloader: Arc<dyn Downloader>,
    options: RenderOptions,
    file_name: String,
}

impl DownloadExporter {
    pub fn new(
        renderer: Arc<dyn DataUrlRenderer>,
        downloader: Arc<dyn Downloader>,
        options: RenderOptions,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            renderer,
            downloader,
            options,
            file_name: file_name.into(),
        }
    }
}

#[async_trait]
impl Exporter for DownloadExporter {
    async fn export(&self, snapshot: ViewSnapshot) -> Result<ExportReceipt, ExportError> {
        let data_url = self
            .renderer
            .render_to_data_url(&snapshot, self.options)
            .await
            .map_err(ExportError::Render)?;
        let path = self
            .downloader
            .trigger_download(data_url, &self.file_name)
            .await
            .map_err(ExportError::Download)?;
        tracing::info!(path = %path.display(), "image downloaded");
        Ok(ExportReceipt::Downloaded { path })
    }
}
