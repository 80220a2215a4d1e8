// SPDX-License-Identifier: MPL-2.0
//! Session state and its named transitions.
//!
//! `SessionState` is an immutable value: every transition takes `&self` and
//! returns the next state, or a [`TransitionError`] when the transition is
//! not allowed from the current state. Rejected transitions leave the
//! caller's state untouched.

use crate::capability::PermissionStatus;
use crate::config::{
    CANVAS_HEIGHT, CANVAS_WIDTH, STICKER_BASE_SIZE, STICKER_DEFAULT_Y, STICKER_ENLARGED_SCALE,
};
use crate::media::{Background, StickerId, ViewSnapshot};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reference to a user-picked background image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(PathBuf);

impl ImageRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for ImageRef {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&str> for ImageRef {
    fn from(path: &str) -> Self {
        Self(PathBuf::from(path))
    }
}

/// Whether the editing controls are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowMode {
    /// No photo confirmed yet; only "choose photo" actions are available.
    #[default]
    Initial,
    /// Photo confirmed; sticker, reset and export actions are available.
    Editing,
}

/// Position and size of a placed sticker, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickerPlacement {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Size multiplier, 1 or [`STICKER_ENLARGED_SCALE`].
    pub scale: u32,
}

impl Default for StickerPlacement {
    fn default() -> Self {
        Self {
            x: (CANVAS_WIDTH - STICKER_BASE_SIZE) as f32 / 2.0,
            y: STICKER_DEFAULT_Y,
            scale: 1,
        }
    }
}

impl StickerPlacement {
    /// Edge length of the sticker in pixels.
    #[must_use]
    pub fn size(self) -> u32 {
        STICKER_BASE_SIZE * self.scale
    }

    /// Moves the sticker, keeping it fully inside the canvas.
    #[must_use]
    pub fn moved_to(self, x: f32, y: f32) -> Self {
        let size = self.size() as f32;
        Self {
            x: clamp_axis(x, CANVAS_WIDTH as f32 - size),
            y: clamp_axis(y, CANVAS_HEIGHT as f32 - size),
            ..self
        }
    }

    /// Switches between normal and enlarged size, growing around the center.
    #[must_use]
    pub fn toggled_scale(self) -> Self {
        let next_scale = if self.scale == 1 {
            STICKER_ENLARGED_SCALE
        } else {
            1
        };
        let delta = (STICKER_BASE_SIZE * next_scale) as f32 - self.size() as f32;
        Self {
            scale: next_scale,
            ..self
        }
        .moved_to(self.x - delta / 2.0, self.y - delta / 2.0)
    }
}

fn clamp_axis(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max.max(0.0))
}

/// A sticker placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedSticker {
    pub id: StickerId,
    pub placement: StickerPlacement,
}

/// Reasons a transition is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("action requires editing mode")]
    NotEditing,
    #[error("a photo is already confirmed")]
    AlreadyEditing,
    #[error("sticker picker is not open")]
    PickerClosed,
    #[error("no sticker placed")]
    NoSticker,
}

pub type TransitionResult = std::result::Result<SessionState, TransitionError>;

/// In-memory description of the current editing session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    selected_image: Option<ImageRef>,
    mode: WorkflowMode,
    sticker_picker_open: bool,
    sticker: Option<PlacedSticker>,
    media_permission: PermissionStatus,
}

impl SessionState {
    /// Fresh session: no image, initial mode, no sticker, permission unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected_image(&self) -> Option<&ImageRef> {
        self.selected_image.as_ref()
    }

    #[must_use]
    pub fn mode(&self) -> WorkflowMode {
        self.mode
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.mode == WorkflowMode::Editing
    }

    #[must_use]
    pub fn sticker_picker_open(&self) -> bool {
        self.sticker_picker_open
    }

    #[must_use]
    pub fn sticker(&self) -> Option<&PlacedSticker> {
        self.sticker.as_ref()
    }

    /// Media permission as resolved by the startup check.
    ///
    /// Exports re-check and request permission on their own and never
    /// write the outcome back, so this is not refreshed by a save.
    #[must_use]
    pub fn media_permission(&self) -> PermissionStatus {
        self.media_permission
    }

    /// Snapshot of the composed view for export.
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            background: self
                .selected_image
                .clone()
                .map_or(Background::Placeholder, Background::Picked),
            sticker: self.sticker,
        }
    }

    /// A successful pick: remember the image and enter editing mode.
    ///
    /// Allowed from both modes.
    #[must_use]
    pub fn image_picked(&self, image: ImageRef) -> SessionState {
        SessionState {
            selected_image: Some(image),
            mode: WorkflowMode::Editing,
            ..self.clone()
        }
    }

    /// Accept the placeholder without picking a photo.
    pub fn confirm_placeholder(&self) -> TransitionResult {
        if self.is_editing() {
            return Err(TransitionError::AlreadyEditing);
        }
        Ok(SessionState {
            mode: WorkflowMode::Editing,
            ..self.clone()
        })
    }

    /// Back to the initial footer.
    ///
    /// The selected image and placed sticker are kept on purpose; only the
    /// mode changes (and a dangling picker overlay is closed). Idempotent.
    #[must_use]
    pub fn reset(&self) -> SessionState {
        SessionState {
            mode: WorkflowMode::Initial,
            sticker_picker_open: false,
            ..self.clone()
        }
    }

    pub fn open_sticker_picker(&self) -> TransitionResult {
        self.require_editing()?;
        Ok(SessionState {
            sticker_picker_open: true,
            ..self.clone()
        })
    }

    #[must_use]
    pub fn close_sticker_picker(&self) -> SessionState {
        SessionState {
            sticker_picker_open: false,
            ..self.clone()
        }
    }

    /// Place `id` at the default position and close the picker.
    pub fn select_sticker(&self, id: StickerId) -> TransitionResult {
        if !self.sticker_picker_open {
            return Err(TransitionError::PickerClosed);
        }
        Ok(SessionState {
            sticker: Some(PlacedSticker {
                id,
                placement: StickerPlacement::default(),
            }),
            ..self.close_sticker_picker()
        })
    }

    pub fn move_sticker(&self, x: f32, y: f32) -> TransitionResult {
        self.update_placement(|placement| placement.moved_to(x, y))
    }

    pub fn toggle_sticker_scale(&self) -> TransitionResult {
        self.update_placement(StickerPlacement::toggled_scale)
    }

    /// Ensures export is currently available.
    pub fn require_editing(&self) -> std::result::Result<(), TransitionError> {
        if self.is_editing() {
            Ok(())
        } else {
            Err(TransitionError::NotEditing)
        }
    }

    #[must_use]
    pub fn with_media_permission(&self, status: PermissionStatus) -> SessionState {
        SessionState {
            media_permission: status,
            ..self.clone()
        }
    }

    fn update_placement(
        &self,
        update: impl FnOnce(StickerPlacement) -> StickerPlacement,
    ) -> TransitionResult {
        self.require_editing()?;
        let placed = self.sticker.ok_or(TransitionError::NoSticker)?;
        Ok(SessionState {
            sticker: Some(PlacedSticker {
                placement: update(placed.placement),
                ..placed
            }),
            ..self.clone()
        })
    }
}
