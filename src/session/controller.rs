// SPDX-License-Identifier: MPL-2.0
//! Workflow controller.
//!
//! The controller owns the [`SessionState`] and is the only place it is
//! replaced. Work is split in two steps so the UI toolkit stays in charge of
//! scheduling:
//!
//! 1. [`WorkflowController::dispatch`] applies an [`Action`] synchronously
//!    and returns the [`Effect`] it requires.
//! 2. [`WorkflowController::perform`] turns that effect into a `'static`
//!    future calling the capability; the future resolves into the follow-up
//!    action, which is dispatched again.
//!
//! [`WorkflowController::run`] drives both steps to completion and is what
//! tests use. User-facing messages are queued as [`Notice`]s.

use super::state::{SessionState, TransitionError};
use crate::capability::{
    Capabilities, ExportError, ExportReceipt, PermissionStatus, PickOutcome,
};
use crate::media::{StickerId, ViewSnapshot};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;

/// Something the user (or a finished capability call) asks for.
#[derive(Debug, Clone)]
pub enum Action {
    /// Startup permission check.
    CheckPermission,
    PermissionResolved(PermissionStatus),
    PickImage,
    ImagePicked(PickOutcome),
    ConfirmPlaceholder,
    Reset,
    OpenStickerPicker,
    CloseStickerPicker,
    SelectSticker(StickerId),
    MoveSticker { x: f32, y: f32 },
    ToggleStickerScale,
    Export,
    ExportFinished(Result<ExportReceipt, ExportError>),
}

/// Capability work requested by a dispatched action.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    PickImage,
    QueryPermission { may_request: bool },
    Export(ViewSnapshot),
}

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A short message for the user, as a localization key plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub key: &'static str,
    pub args: Vec<(String, String)>,
}

impl Notice {
    fn new(kind: NoticeKind, key: &'static str) -> Self {
        Self {
            kind,
            key,
            args: Vec::new(),
        }
    }

    fn with_arg(mut self, name: &str, value: impl Into<String>) -> Self {
        self.args.push((name.to_string(), value.into()));
        self
    }
}

pub const NOTICE_NO_IMAGE_PICKED: &str = "notice-no-image-picked";
pub const NOTICE_SAVED_TO_GALLERY: &str = "notice-saved-to-gallery";
pub const NOTICE_DOWNLOADED: &str = "notice-downloaded";
pub const NOTICE_SAVE_FAILED: &str = "notice-save-failed";

/// Owns the session state and mediates every transition.
#[derive(Debug)]
pub struct WorkflowController {
    state: SessionState,
    capabilities: Capabilities,
    permission_requested: bool,
    notices: Vec<Notice>,
}

impl WorkflowController {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            state: SessionState::new(),
            capabilities,
            permission_requested: false,
            notices: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Drains queued notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Applies `action`; rejected transitions are logged and ignored.
    pub fn dispatch(&mut self, action: Action) -> Effect {
        let name = action_name(&action);
        match self.apply(action) {
            Ok(effect) => {
                tracing::debug!(action = name, ?effect, mode = ?self.state.mode(), "action applied");
                effect
            }
            Err(reason) => {
                tracing::debug!(action = name, %reason, "action rejected");
                Effect::None
            }
        }
    }

    /// Applies `action`, reporting why a transition was refused.
    ///
    /// On error the state is left exactly as it was.
    pub fn apply(&mut self, action: Action) -> Result<Effect, TransitionError> {
        let state = &self.state;
        let (next, effect) = match action {
            Action::CheckPermission => {
                let may_request = !self.permission_requested;
                self.permission_requested = true;
                return Ok(Effect::QueryPermission { may_request });
            }
            Action::PermissionResolved(status) => (state.with_media_permission(status), Effect::None),
            Action::PickImage => return Ok(Effect::PickImage),
            Action::ImagePicked(PickOutcome::Picked { uri }) => (state.image_picked(uri), Effect::None),
            Action::ImagePicked(PickOutcome::Cancelled) => {
                self.push(Notice::new(NoticeKind::Info, NOTICE_NO_IMAGE_PICKED));
                return Ok(Effect::None);
            }
            Action::ConfirmPlaceholder => (state.confirm_placeholder()?, Effect::None),
            Action::Reset => (state.reset(), Effect::None),
            Action::OpenStickerPicker => (state.open_sticker_picker()?, Effect::None),
            Action::CloseStickerPicker => (state.close_sticker_picker(), Effect::None),
            Action::SelectSticker(id) => (state.select_sticker(id)?, Effect::None),
            Action::MoveSticker { x, y } => (state.move_sticker(x, y)?, Effect::None),
            Action::ToggleStickerScale => (state.toggle_sticker_scale()?, Effect::None),
            Action::Export => {
                state.require_editing()?;
                return Ok(Effect::Export(state.snapshot()));
            }
            Action::ExportFinished(result) => {
                self.export_finished(result);
                return Ok(Effect::None);
            }
        };
        self.state = next;
        Ok(effect)
    }

    /// Turns `effect` into a future resolving to the follow-up action.
    pub fn perform(&self, effect: Effect) -> Option<BoxFuture<'static, Action>> {
        match effect {
            Effect::None => None,
            Effect::PickImage => {
                let picker = self.capabilities.image_picker.clone();
                Some(async move { Action::ImagePicked(picker.pick_image().await) }.boxed())
            }
            Effect::QueryPermission { may_request } => {
                let permission = self.capabilities.permission.clone();
                Some(
                    async move {
                        let status = permission.status().await;
                        let status = if status == PermissionStatus::Unknown && may_request {
                            permission.request().await
                        } else {
                            status
                        };
                        Action::PermissionResolved(status)
                    }
                    .boxed(),
                )
            }
            Effect::Export(snapshot) => {
                let exporter = self.capabilities.exporter.clone();
                Some(async move { Action::ExportFinished(exporter.export(snapshot).await) }.boxed())
            }
        }
    }

    /// Dispatches `action` and every follow-up until nothing is pending.
    pub async fn run(&mut self, action: Action) {
        let mut next = Some(action);
        while let Some(action) = next.take() {
            let effect = self.dispatch(action);
            if let Some(future) = self.perform(effect) {
                next = Some(future.await);
            }
        }
    }

    fn export_finished(&mut self, result: Result<ExportReceipt, ExportError>) {
        let notice = match result {
            Ok(ExportReceipt::SavedToGallery { .. }) => {
                Notice::new(NoticeKind::Success, NOTICE_SAVED_TO_GALLERY)
            }
            Ok(ExportReceipt::Downloaded { path }) => {
                Notice::new(NoticeKind::Success, NOTICE_DOWNLOADED)
                    .with_arg("path", path.display().to_string())
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                Notice::new(NoticeKind::Error, NOTICE_SAVE_FAILED)
            }
        };
        self.push(notice);
    }

    fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::CheckPermission => "check-permission",
        Action::PermissionResolved(_) => "permission-resolved",
        Action::PickImage => "pick-image",
        Action::ImagePicked(_) => "image-picked",
        Action::ConfirmPlaceholder => "confirm-placeholder",
        Action::Reset => "reset",
        Action::OpenStickerPicker => "open-sticker-picker",
        Action::CloseStickerPicker => "close-sticker-picker",
        Action::SelectSticker(_) => "select-sticker",
        Action::MoveSticker { .. } => "move-sticker",
        Action::ToggleStickerScale => "toggle-sticker-scale",
        Action::Export => "export",
        Action::ExportFinished(_) => "export-finished",
    }
}
