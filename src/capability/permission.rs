// SPDX-License-Identifier: MPL-2.0
//! Media library permission.
//!
//! On the desktop the "media library" is a gallery directory. Permission is
//! modelled on that directory: it is unknown until the directory exists,
//! granted when it can be written to and denied when it is read-only.

use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// Access status for the media library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionStatus {
    /// Never asked.
    #[default]
    Unknown,
    Granted,
    Denied,
}

impl PermissionStatus {
    #[must_use]
    pub fn is_granted(self) -> bool {
        self == PermissionStatus::Granted
    }
}

/// Queries and requests write access to the media library.
#[async_trait]
pub trait MediaPermission: Send + Sync {
    async fn status(&self) -> PermissionStatus;
    async fn request(&self) -> PermissionStatus;
}

/// Permission backed by the gallery directory.
#[derive(Debug, Clone)]
pub struct DirectoryPermission {
    gallery_dir: PathBuf,
}

impl DirectoryPermission {
    pub fn new(gallery_dir: impl Into<PathBuf>) -> Self {
        Self {
            gallery_dir: gallery_dir.into(),
        }
    }

    #[must_use]
    pub fn gallery_dir(&self) -> &Path {
        &self.gallery_dir
    }
}

fn probe(dir: &Path) -> PermissionStatus {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() && !meta.permissions().readonly() => PermissionStatus::Granted,
        Ok(_) => PermissionStatus::Denied,
        Err(_) => PermissionStatus::Unknown,
    }
}

#[async_trait]
impl MediaPermission for DirectoryPermission {
    async fn status(&self) -> PermissionStatus {
        let dir = self.gallery_dir.clone();
        tokio::task::spawn_blocking(move || probe(&dir))
            .await
            .unwrap_or(PermissionStatus::Unknown)
    }

    async fn request(&self) -> PermissionStatus {
        let dir = self.gallery_dir.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = fs::create_dir_all(&dir) {
                tracing::warn!(dir = %dir.display(), error = %e, "gallery directory unavailable");
                return PermissionStatus::Denied;
            }
            match probe(&dir) {
                PermissionStatus::Granted => PermissionStatus::Granted,
                _ => PermissionStatus::Denied,
            }
        })
        .await
        .unwrap_or(PermissionStatus::Denied)
    }
}
