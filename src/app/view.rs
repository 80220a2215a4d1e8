// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout, top to bottom: the image canvas, then either the initial footer
//! or the editing options row. The sticker sheet and toasts are stacked on
//! top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::session::{Action, SessionState};
use crate::ui::controls;
use crate::ui::design_tokens::spacing;
use crate::ui::icons;
use crate::ui::image_viewer::{self, ViewContext as ImageViewerContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::sticker_picker;
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{Column, Container, Row, Stack};
use iced::{alignment, Element, Length, Padding};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a SessionState,
    pub background: Option<&'a Handle>,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let canvas = image_viewer::view(ImageViewerContext {
        background: ctx.background,
        sticker: ctx.session.sticker(),
        interactive: ctx.session.is_editing(),
    })
    .map(Message::Viewer);

    let footer = if ctx.session.is_editing() {
        view_options(ctx.i18n)
    } else {
        view_initial_footer(ctx.i18n)
    };

    let screen = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .spacing(spacing::XL)
        .padding(Padding {
            top: spacing::IMAGE_TOP,
            ..Padding::ZERO
        })
        .push(canvas)
        .push(footer);

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill).push(
        Container::new(screen)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::screen),
    );

    if ctx.session.sticker_picker_open() {
        layers = layers.push(sticker_picker::view(ctx.i18n).map(Message::StickerPicker));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn view_initial_footer(i18n: &I18n) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(controls::labeled(
            i18n.tr("button-choose-photo"),
            true,
            Message::Workflow(Action::PickImage),
        ))
        .push(controls::labeled(
            i18n.tr("button-use-photo"),
            false,
            Message::Workflow(Action::ConfirmPlaceholder),
        ))
        .into()
}

fn view_options(i18n: &I18n) -> Element<'_, Message> {
    Row::new()
        .spacing(spacing::OPTIONS_GAP)
        .align_y(alignment::Vertical::Center)
        .push(controls::icon_button(
            icons::refresh(),
            i18n.tr("button-reset"),
            Message::Workflow(Action::Reset),
        ))
        .push(controls::circle_button(Message::Workflow(
            Action::OpenStickerPicker,
        )))
        .push(controls::icon_button(
            icons::save(),
            i18n.tr("button-save"),
            Message::Workflow(Action::Export),
        ))
        .into()
}
