// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Every state change goes through [`handle_workflow_action`]: the
//! controller applies the action, queued notices become toasts, and any
//! capability work is scheduled as a `Task` whose result comes back as
//! another workflow action.

use super::Message;
use crate::media::{Background, ViewSnapshot};
use crate::session::{Action, WorkflowController};
use crate::ui::image_viewer::{self, Event as ViewerEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::sticker_picker;
use iced::widget::image::Handle;
use iced::Task;

/// Mutable application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub controller: &'a mut WorkflowController,
    pub viewer: &'a mut image_viewer::State,
    pub notifications: &'a mut notifications::Manager,
    pub background: &'a mut Option<Handle>,
    pub background_source: &'a mut Option<Background>,
}

pub fn handle_workflow_action(ctx: &mut UpdateContext<'_>, action: Action) -> Task<Message> {
    let effect = ctx.controller.dispatch(action);

    for notice in ctx.controller.take_notices() {
        ctx.notifications.push(Notification::from(notice));
    }

    let effect_task = match ctx.controller.perform(effect) {
        Some(future) => Task::perform(future, Message::Workflow),
        None => Task::none(),
    };

    Task::batch([effect_task, refresh_background(ctx)])
}

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: image_viewer::Message,
) -> Task<Message> {
    let sticker = ctx.controller.state().sticker().copied();
    match image_viewer::update(ctx.viewer, message, sticker.as_ref()) {
        ViewerEvent::None => Task::none(),
        ViewerEvent::MoveSticker { x, y } => {
            handle_workflow_action(ctx, Action::MoveSticker { x, y })
        }
        ViewerEvent::ToggleStickerScale => {
            handle_workflow_action(ctx, Action::ToggleStickerScale)
        }
    }
}

pub fn handle_sticker_picker_message(
    ctx: &mut UpdateContext<'_>,
    message: sticker_picker::Message,
) -> Task<Message> {
    let action = match message {
        sticker_picker::Message::Select(id) => Action::SelectSticker(id),
        sticker_picker::Message::Close => Action::CloseStickerPicker,
    };
    handle_workflow_action(ctx, action)
}

pub fn handle_background_rendered(
    ctx: &mut UpdateContext<'_>,
    source: Background,
    result: Result<Handle, String>,
) -> Task<Message> {
    // A newer pick superseded this render
    if ctx.background_source.as_ref() != Some(&source) {
        return Task::none();
    }

    match result {
        Ok(handle) => *ctx.background = Some(handle),
        Err(error) => {
            tracing::warn!(?source, %error, "background could not be rendered");
            *ctx.background = None;
        }
    }
    Task::none()
}

/// Starts rendering the background when the selected image changed.
pub fn refresh_background(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let source = ctx.controller.state().snapshot().background;
    if ctx.background_source.as_ref() == Some(&source) {
        return Task::none();
    }

    *ctx.background_source = Some(source.clone());
    Task::perform(render_background(source.clone()), move |result| {
        Message::BackgroundRendered {
            source: source.clone(),
            result,
        }
    })
}

/// Composes `source` without a sticker into an image handle.
async fn render_background(source: Background) -> Result<Handle, String> {
    let snapshot = ViewSnapshot {
        background: source,
        sticker: None,
    };

    tokio::task::spawn_blocking(move || {
        let image = snapshot.compose().map_err(|e| e.to_string())?;
        let (width, height) = image.dimensions();
        Ok(Handle::from_rgba(width, height, image.into_raw()))
    })
    .await
    .map_err(|e| e.to_string())?
}
