// SPDX-License-Identifier: MPL-2.0
//! Image selection.

use crate::media::PICKABLE_EXTENSIONS;
use crate::session::ImageRef;
use async_trait::async_trait;

/// Result of asking the user for a photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The user dismissed the picker.
    Cancelled,
    /// The user chose an image.
    Picked { uri: ImageRef },
}

/// Lets the user choose a single image.
///
/// Implementations never fail: anything that goes wrong is reported as
/// [`PickOutcome::Cancelled`].
#[async_trait]
pub trait ImagePicker: Send + Sync {
    async fn pick_image(&self) -> PickOutcome;
}

/// Native open dialog filtered to image files.
#[derive(Debug, Default, Clone)]
pub struct DialogImagePicker;

#[async_trait]
impl ImagePicker for DialogImagePicker {
    async fn pick_image(&self) -> PickOutcome {
        let mut dialog = rfd::AsyncFileDialog::new().add_filter("Images", PICKABLE_EXTENSIONS);
        if let Some(dir) = dirs::picture_dir() {
            dialog = dialog.set_directory(dir);
        }

        match dialog.pick_file().await {
            Some(handle) => PickOutcome::Picked {
                uri: ImageRef::new(handle.path()),
            },
            None => PickOutcome::Cancelled,
        }
    }
}
