// SPDX-License-Identifier: MPL-2.0
//! Host detection and capability wiring.

use super::capture::RasterCapture;
use super::download::{DirectoryDownloader, RasterDataUrlRenderer, RenderOptions};
use super::exporter::{DownloadExporter, Exporter, GallerySaveExporter};
use super::gallery::DirectoryMediaLibrary;
use super::image_picker::{DialogImagePicker, ImagePicker};
use super::permission::{DirectoryPermission, MediaPermission};
use crate::app::paths;
use crate::config::{Config, ExportMode};
use crate::error::{Error, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// Host the application runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    /// Desktop with a writable media library.
    Native,
    /// Browser host, exports are downloads.
    Web,
}

impl HostPlatform {
    #[must_use]
    pub fn detect() -> Self {
        if cfg!(target_arch = "wasm32") {
            HostPlatform::Web
        } else {
            HostPlatform::Native
        }
    }

    /// Resolves `auto` against this host.
    #[must_use]
    pub fn resolve(self, mode: ExportMode) -> ExportMode {
        match (mode, self) {
            (ExportMode::Auto, HostPlatform::Native) => ExportMode::Gallery,
            (ExportMode::Auto, HostPlatform::Web) => ExportMode::Download,
            (explicit, _) => explicit,
        }
    }
}

/// Capabilities injected into the workflow controller.
#[derive(Clone)]
pub struct Capabilities {
    pub image_picker: Arc<dyn ImagePicker>,
    pub permission: Arc<dyn MediaPermission>,
    pub exporter: Arc<dyn Exporter>,
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities").finish_non_exhaustive()
    }
}

impl Capabilities {
    /// Builds the desktop adapters for `config` on `platform`.
    ///
    /// The exporter branch is chosen here, once.
    pub fn from_config(config: &Config, platform: HostPlatform) -> Result<Self> {
        let gallery_dir = paths::get_gallery_dir_with_override(config.export.gallery_dir.clone())
            .ok_or_else(|| Error::Config("no gallery directory available".into()))?;
        let download_dir =
            paths::get_download_dir_with_override(config.export.download_dir.clone())
                .ok_or_else(|| Error::Config("no download directory available".into()))?;
        Ok(Self::from_dirs(config, platform, gallery_dir, download_dir))
    }

    /// Builds the adapters around already resolved directories.
    pub fn from_dirs(
        config: &Config,
        platform: HostPlatform,
        gallery_dir: PathBuf,
        download_dir: PathBuf,
    ) -> Self {
        let permission: Arc<dyn MediaPermission> =
            Arc::new(DirectoryPermission::new(gallery_dir.clone()));

        let mode = platform.resolve(config.export.mode);
        let exporter: Arc<dyn Exporter> = match mode {
            ExportMode::Download => Arc::new(DownloadExporter::new(
                Arc::new(RasterDataUrlRenderer),
                Arc::new(DirectoryDownloader::new(download_dir)),
                RenderOptions::with_jpeg_quality(config.export.clamped_jpeg_quality()),
                config.export.file_name.clone(),
            )),
            ExportMode::Gallery | ExportMode::Auto => Arc::new(GallerySaveExporter::new(
                Arc::new(RasterCapture::new(paths::get_capture_dir())),
                permission.clone(),
                Arc::new(DirectoryMediaLibrary::new(gallery_dir)),
            )),
        };
        tracing::info!(?platform, ?mode, "export branch selected");

        Self {
            image_picker: Arc::new(DialogImagePicker),
            permission,
            exporter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn auto_resolves_per_host() {
        assert_eq!(
            HostPlatform::Native.resolve(ExportMode::Auto),
            ExportMode::Gallery
        );
        assert_eq!(
            HostPlatform::Web.resolve(ExportMode::Auto),
            ExportMode::Download
        );
        assert_eq!(
            HostPlatform::Native.resolve(ExportMode::Download),
            ExportMode::Download
        );
    }

    #[test]
    fn desktop_build_detects_native() {
        assert_eq!(HostPlatform::detect(), HostPlatform::Native);
    }

    #[test]
    fn capabilities_build_from_explicit_dirs() {
        let temp = tempdir().expect("tempdir");
        let mut config = Config::default();
        config.export.mode = ExportMode::Download;
        config.export.gallery_dir = Some(temp.path().join("gallery"));
        config.export.download_dir = Some(temp.path().join("downloads"));

        assert!(Capabilities::from_config(&config, HostPlatform::Native).is_ok());
    }
}
