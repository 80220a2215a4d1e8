// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Whole-window background.
///
/// Dark themes use the fixed slate screen color; light themes follow the
/// active Iced palette.
pub fn screen(theme: &Theme) -> container::Style {
    let background = if theme.extended_palette().is_dark {
        palette::SLATE_900
    } else {
        theme.extended_palette().background.base.color
    };

    container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Sticker sheet body.
pub fn sheet(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_900)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Sticker sheet title bar.
pub fn sheet_header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_700)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the sticker sheet.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}
