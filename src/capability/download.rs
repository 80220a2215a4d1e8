// SPDX-License-Identifier: MPL-2.0
//! Data URL rendering and browser-style downloads.

use super::run_blocking;
use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::media::encode::{decode_data_url, to_data_url};
use crate::media::{ImageFormat, ViewSnapshot};
use async_trait::async_trait;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the download branch.
#[derive(Debug, Clone, Error)]
pub enum DownloadError {
    #[error("failed to render view: {0}")]
    Render(String),
    #[error("invalid data URL: {0}")]
    InvalidDataUrl(String),
    #[error("failed to write download: {0}")]
    Io(String),
}

/// Output parameters of a data URL render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// JPEG quality in `0.0..=1.0`.
    pub quality: f32,
    pub width: u32,
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            quality: 0.95,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

impl RenderOptions {
    /// Options for a JPEG quality on the 1-100 scale.
    #[must_use]
    pub fn with_jpeg_quality(quality: u8) -> Self {
        Self {
            quality: f32::from(quality) / 100.0,
            ..Self::default()
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn jpeg_quality(&self) -> u8 {
        (self.quality.clamp(0.01, 1.0) * 100.0).round() as u8
    }
}

/// Renders the composed view as a `data:` URL.
#[async_trait]
pub trait DataUrlRenderer: Send + Sync {
    async fn render_to_data_url(
        &self,
        snapshot: &ViewSnapshot,
        options: RenderOptions,
    ) -> Result<String, DownloadError>;
}

/// Saves a `data:` URL under a suggested file name.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Returns the path the download was written to.
    async fn trigger_download(
        &self,
        data_url: String,
        file_name: &str,
    ) -> Result<PathBuf, DownloadError>;
}

/// Composes the snapshot and encodes it as a JPEG data URL.
#[derive(Debug, Default, Clone)]
pub struct RasterDataUrlRenderer;

#[async_trait]
impl DataUrlRenderer for RasterDataUrlRenderer {
    async fn render_to_data_url(
        &self,
        snapshot: &ViewSnapshot,
        options: RenderOptions,
    ) -> Result<String, DownloadError> {
        let snapshot = snapshot.clone();
        run_blocking(
            move || {
                let image = snapshot
                    .compose_at(options.width, options.height)
                    .map_err(|e| DownloadError::Render(e.to_string()))?;
                to_data_url(&image, ImageFormat::Jpeg, options.jpeg_quality())
                    .map_err(|e| DownloadError::Render(e.to_string()))
            },
            DownloadError::Render,
        )
        .await
    }
}

/// Writes downloads into a directory without ever overwriting a file.
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    download_dir: PathBuf,
}

impl DirectoryDownloader {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
        }
    }
}

/// `name.ext`, then `name (1).ext`, `name (2).ext`, ...
fn candidate_name(file_name: &str, attempt: u32) -> String {
    if attempt == 0 {
        return file_name.to_string();
    }
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem} ({attempt}).{ext}"),
        _ => format!("{file_name} ({attempt})"),
    }
}

/// Creates the first free candidate in `dir` and fills it with `write`.
///
/// A file whose write fails is removed again.
fn write_new_file(
    dir: &Path,
    file_name: &str,
    write: impl FnOnce(&mut File) -> io::Result<()>,
) -> io::Result<PathBuf> {
    let mut attempt = 0;
    loop {
        let path = dir.join(candidate_name(file_name, attempt));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                if let Err(e) = write(&mut file) {
                    drop(file);
                    if let Err(remove) = fs::remove_file(&path) {
                        tracing::warn!(
                            path = %path.display(),
                            error = %remove,
                            "partial download left behind"
                        );
                    }
                    return Err(e);
                }
                return Ok(path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e),
        }
    }
}

#[async_trait]
impl Downloader for DirectoryDownloader {
    async fn trigger_download(
        &self,
        data_url: String,
        file_name: &str,
    ) -> Result<PathBuf, DownloadError> {
        let dir = self.download_dir.clone();
        // Never let a configured name escape the download directory
        let file_name = Path::new(file_name)
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DownloadError::Io(format!("invalid file name: {file_name}")))?
            .to_string();

        run_blocking(
            move || {
                let (_mime, bytes) = decode_data_url(&data_url)
                    .map_err(|e| DownloadError::InvalidDataUrl(e.to_string()))?;
                fs::create_dir_all(&dir).map_err(|e| DownloadError::Io(e.to_string()))?;
                write_new_file(&dir, &file_name, |file| file.write_all(&bytes))
                    .map_err(|e| DownloadError::Io(e.to_string()))
            },
            DownloadError::Io,
        )
        .await
    }
}
