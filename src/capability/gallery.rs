// SPDX-License-Identifier: MPL-2.0
//! Saving captured images into the media library.

use super::run_blocking;
use crate::config::GALLERY_FILE_PREFIX;
use async_trait::async_trait;
use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while saving into the media library.
#[derive(Debug, Clone, Error)]
pub enum SaveError {
    #[error("gallery directory is not available: {0}")]
    Unavailable(String),
    #[error("failed to save image: {0}")]
    Io(String),
}

/// Stores a local image file in the media library.
#[async_trait]
pub trait MediaLibrary: Send + Sync {
    /// Saves the file and returns its location inside the library.
    async fn save_to_library(&self, path: &Path) -> Result<PathBuf, SaveError>;
}

/// Media library backed by a gallery directory.
#[derive(Debug, Clone)]
pub struct DirectoryMediaLibrary {
    gallery_dir: PathBuf,
}

impl DirectoryMediaLibrary {
    pub fn new(gallery_dir: impl Into<PathBuf>) -> Self {
        Self {
            gallery_dir: gallery_dir.into(),
        }
    }
}

/// Reserves `sticker-smash-YYYYMMDD-HHMMSS[-n].<ext>` in `dir` by creating
/// it empty, so concurrent saves never share a name.
fn reserve_target(dir: &Path, stamp: &str, extension: &str) -> io::Result<(PathBuf, File)> {
    let base = format!("{GALLERY_FILE_PREFIX}-{stamp}");
    let mut n = 0;
    loop {
        let name = if n == 0 {
            format!("{base}.{extension}")
        } else {
            format!("{base}-{n}.{extension}")
        };
        let candidate = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => n += 1,
            Err(e) => return Err(e),
        }
    }
}

/// Moves `source` onto the reserved `target`, copying into `reserved` when
/// renaming fails (other filesystem, or a platform that refuses to replace).
fn move_file(source: &Path, target: &Path, mut reserved: File) -> io::Result<()> {
    if fs::rename(source, target).is_ok() {
        return Ok(());
    }
    io::copy(&mut File::open(source)?, &mut reserved)?;
    if let Err(e) = fs::remove_file(source) {
        tracing::debug!(path = %source.display(), error = %e, "capture left behind");
    }
    Ok(())
}

#[async_trait]
impl MediaLibrary for DirectoryMediaLibrary {
    async fn save_to_library(&self, path: &Path) -> Result<PathBuf, SaveError> {
        let dir = self.gallery_dir.clone();
        let source = path.to_path_buf();

        run_blocking(
            move || {
                let meta = fs::metadata(&dir)
                    .map_err(|e| SaveError::Unavailable(format!("{}: {e}", dir.display())))?;
                if !meta.is_dir() || meta.permissions().readonly() {
                    return Err(SaveError::Unavailable(dir.display().to_string()));
                }

                let extension = source
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("png")
                    .to_string();
                let stamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
                let (target, reserved) = reserve_target(&dir, &stamp, &extension)
                    .map_err(|e| SaveError::Io(e.to_string()))?;

                if let Err(e) = move_file(&source, &target, reserved) {
                    let _ = fs::remove_file(&target);
                    return Err(SaveError::Io(e.to_string()));
                }
                Ok(target)
            },
            SaveError::Io,
        )
        .await
    }
}
