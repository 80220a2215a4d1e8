// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the workflow and the UI.
//!
//! The `App` struct owns the [`WorkflowController`] together with the
//! purely visual state (drag tracking, the rendered background, toasts) and
//! translates iced messages into workflow actions.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::capability::{Capabilities, HostPlatform, PickOutcome};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::media::Background;
use crate::session::{Action, ImageRef, WorkflowController};
use crate::ui::design_tokens::sizing;
use crate::ui::image_viewer;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    controller: WorkflowController,
    viewer: image_viewer::State,
    /// Raster of the current background, once rendered.
    background: Option<Handle>,
    /// Background the raster above was (or is being) rendered from.
    background_source: Option<Background>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.controller.state().mode())
            .field("has_background", &self.background.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, builds the platform capabilities and kicks off
    /// the startup permission check.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(mode) = flags.export_mode {
            config.export.mode = mode;
        }

        let i18n = I18n::new(flags.lang.clone(), &config);
        let capabilities = build_capabilities(&config);

        let mut app = Self::with_capabilities(i18n, config.general.theme_mode, capabilities);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let mut tasks = vec![app.handle(Action::CheckPermission)];
        if let Some(path) = flags.file_path {
            tasks.push(app.handle(Action::ImagePicked(PickOutcome::Picked {
                uri: ImageRef::new(path),
            })));
        }

        (app, Task::batch(tasks))
    }

    fn with_capabilities(i18n: I18n, theme_mode: ThemeMode, capabilities: Capabilities) -> Self {
        Self {
            i18n,
            theme_mode,
            controller: WorkflowController::new(capabilities),
            viewer: image_viewer::State::default(),
            background: None,
            background_source: None,
            notifications: notifications::Manager::new(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Workflow(action) => update::handle_workflow_action(&mut ctx, action),
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::StickerPicker(picker_message) => {
                update::handle_sticker_picker_message(&mut ctx, picker_message)
            }
            Message::BackgroundRendered { source, result } => {
                update::handle_background_rendered(&mut ctx, source, result)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                ctx.notifications.expire(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: self.controller.state(),
            background: self.background.as_ref(),
            notifications: &self.notifications,
        })
    }

    fn handle(&mut self, action: Action) -> Task<Message> {
        update::handle_workflow_action(&mut self.update_context(), action)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            controller: &mut self.controller,
            viewer: &mut self.viewer,
            notifications: &mut self.notifications,
            background: &mut self.background,
            background_source: &mut self.background_source,
        }
    }
}

/// Builds the capabilities for this host, falling back to scratch
/// directories when the platform directories cannot be resolved.
fn build_capabilities(config: &Config) -> Capabilities {
    let platform = HostPlatform::detect();
    match Capabilities::from_config(config, platform) {
        Ok(capabilities) => capabilities,
        Err(error) => {
            tracing::error!(%error, "platform directories unavailable, exporting to temp dir");
            let scratch = std::env::temp_dir().join("sticker_smash");
            Capabilities::from_dirs(
                config,
                platform,
                scratch.join("gallery"),
                scratch.join("downloads"),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{
        ExportError, ExportReceipt, Exporter, ImagePicker, MediaPermission, PermissionStatus,
    };
    use crate::media::{StickerId, ViewSnapshot};
    use crate::session::WorkflowMode;
    use crate::ui::notifications::Severity;
    use crate::ui::sticker_picker;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct CancelPicker;

    #[async_trait]
    impl ImagePicker for CancelPicker {
        async fn pick_image(&self) -> PickOutcome {
            PickOutcome::Cancelled
        }
    }

    struct GrantedPermission;

    #[async_trait]
    impl MediaPermission for GrantedPermission {
        async fn status(&self) -> PermissionStatus {
            PermissionStatus::Granted
        }

        async fn request(&self) -> PermissionStatus {
            PermissionStatus::Granted
        }
    }

    struct GalleryExporter;

    #[async_trait]
    impl Exporter for GalleryExporter {
        async fn export(&self, _snapshot: ViewSnapshot) -> Result<ExportReceipt, ExportError> {
            Ok(ExportReceipt::SavedToGallery {
                path: "/gallery/sticker.png".into(),
            })
        }
    }

    fn app() -> App {
        App::with_capabilities(
            I18n::default(),
            ThemeMode::Light,
            Capabilities {
                image_picker: Arc::new(CancelPicker),
                permission: Arc::new(GrantedPermission),
                exporter: Arc::new(GalleryExporter),
            },
        )
    }

    #[test]
    fn starts_on_initial_screen() {
        let app = app();
        assert_eq!(app.controller.state().mode(), WorkflowMode::Initial);
        assert!(!app.notifications.has_notifications());
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn confirm_placeholder_enters_editing_and_renders_background() {
        let mut app = app();
        let _ = app.update(Message::Workflow(Action::ConfirmPlaceholder));

        assert!(app.controller.state().is_editing());
        assert_eq!(app.background_source, Some(Background::Placeholder));
    }

    #[test]
    fn picking_an_image_switches_background_source() {
        let mut app = app();
        let _ = app.update(Message::Workflow(Action::ConfirmPlaceholder));
        let _ = app.update(Message::Workflow(Action::ImagePicked(PickOutcome::Picked {
            uri: ImageRef::from("photo.png"),
        })));

        assert_eq!(
            app.background_source,
            Some(Background::Picked(ImageRef::from("photo.png")))
        );
    }

    #[test]
    fn stale_background_render_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::Workflow(Action::ImagePicked(PickOutcome::Picked {
            uri: ImageRef::from("new.png"),
        })));

        let _ = app.update(Message::BackgroundRendered {
            source: Background::Placeholder,
            result: Ok(Handle::from_rgba(1, 1, vec![0, 0, 0, 255])),
        });
        assert!(app.background.is_none());

        let _ = app.update(Message::BackgroundRendered {
            source: Background::Picked(ImageRef::from("new.png")),
            result: Ok(Handle::from_rgba(1, 1, vec![0, 0, 0, 255])),
        });
        assert!(app.background.is_some());
    }

    #[test]
    fn sticker_picker_messages_drive_the_workflow() {
        let mut app = app();
        let _ = app.update(Message::Workflow(Action::ConfirmPlaceholder));
        let _ = app.update(Message::Workflow(Action::OpenStickerPicker));
        assert!(app.controller.state().sticker_picker_open());

        let _ = app.update(Message::StickerPicker(sticker_picker::Message::Select(
            StickerId::ALL[0],
        )));
        let state = app.controller.state();
        assert!(!state.sticker_picker_open());
        assert_eq!(state.sticker().map(|s| s.id), Some(StickerId::ALL[0]));
    }

    #[test]
    fn export_outcome_becomes_a_toast() {
        let mut app = app();
        let _ = app.update(Message::Workflow(Action::ExportFinished(Ok(
            ExportReceipt::SavedToGallery {
                path: "/gallery/sticker.png".into(),
            },
        ))));

        let toast = app.notifications.visible().next().expect("toast");
        assert_eq!(toast.severity(), Severity::Success);
    }

    #[test]
    fn rejected_action_changes_nothing() {
        let mut app = app();
        let _ = app.update(Message::Workflow(Action::OpenStickerPicker));
        assert!(!app.controller.state().sticker_picker_open());
        assert!(!app.notifications.has_notifications());
    }
}
