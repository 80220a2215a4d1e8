// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary footer button: white pill inside an accent ring.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::GRAY_100,
        button::Status::Pressed => palette::GRAY_200,
        _ => WHITE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::SLATE_900,
        border: Border {
            color: palette::ACCENT_500,
            width: border::WIDTH_ACCENT,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Secondary footer button: plain label on the screen background.
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Icon-over-label buttons (Reset, Save) and picker thumbnails.
pub fn icon(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round "add sticker" button.
pub fn circle(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Hovered => (palette::GRAY_100, shadow::MD),
        button::Status::Pressed => (palette::GRAY_200, shadow::NONE),
        _ => (WHITE, shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::SLATE_900,
        border: Border {
            color: palette::ACCENT_500,
            width: border::WIDTH_ACCENT,
            radius: radius::FULL.into(),
        },
        shadow,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_has_accent_ring() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, palette::ACCENT_500);
        assert_eq!(style.background, Some(Background::Color(WHITE)));
    }

    #[test]
    fn icon_button_highlights_on_hover() {
        let theme = Theme::Dark;
        let normal = icon(&theme, button::Status::Active);
        let hover = icon(&theme, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }
}
