// SPDX-License-Identifier: MPL-2.0
//! Platform capabilities used by the workflow controller.
//!
//! Each capability is a narrow async trait with a desktop adapter. The
//! controller holds them as `Arc<dyn _>` so tests can inject deterministic
//! fakes.
//!
//! # Available Capabilities
//!
//! - [`image_picker`]: let the user choose a background photo
//! - [`permission`]: media library access status and request
//! - [`capture`]: render the composed view to a local file
//! - [`gallery`]: move a captured file into the media library
//! - [`download`]: render the view to a data URL and download it
//! - [`exporter`]: the two export branches behind one trait
//! - [`platform`]: host detection and capability wiring

pub mod capture;
pub mod download;
pub mod exporter;
pub mod gallery;
pub mod image_picker;
pub mod permission;
pub mod platform;

pub use capture::{CaptureError, CaptureOptions, RasterCapture, ViewCapture};
pub use download::{
    DataUrlRenderer, DirectoryDownloader, DownloadError, Downloader, RasterDataUrlRenderer,
    RenderOptions,
};
pub use exporter::{DownloadExporter, ExportError, ExportReceipt, Exporter, GallerySaveExporter};
pub use gallery::{DirectoryMediaLibrary, MediaLibrary, SaveError};
pub use image_picker::{DialogImagePicker, ImagePicker, PickOutcome};
pub use permission::{DirectoryPermission, MediaPermission, PermissionStatus};
pub use platform::{Capabilities, HostPlatform};

/// Runs blocking work (decoding, encoding, file I/O) off the event loop.
///
/// A panicked or cancelled worker is reported through `on_join_error`.
pub(crate) async fn run_blocking<T, E, F>(
    work: F,
    on_join_error: impl FnOnce(String) -> E,
) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    match tokio::task::spawn_blocking(work).await {
        Ok(result) => result,
        Err(join_error) => Err(on_join_error(join_error.to_string())),
    }
}
