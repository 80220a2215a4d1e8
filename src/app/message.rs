// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::ExportMode;
use crate::media::Background;
use crate::session::Action;
use crate::ui::image_viewer;
use crate::ui::notifications;
use crate::ui::sticker_picker;
use iced::widget::image::Handle;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A workflow action, from a button or a finished capability call.
    Workflow(Action),
    Viewer(image_viewer::Message),
    StickerPicker(sticker_picker::Message),
    /// The on-screen background raster for `source` is ready.
    BackgroundRendered {
        source: Background,
        result: Result<Handle, String>,
    },
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image to start editing right away.
    pub file_path: Option<String>,
    /// Optional export branch, overrides `[export] mode`.
    pub export_mode: Option<ExportMode>,
}
