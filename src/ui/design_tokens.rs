// SPDX-License-Identifier: MPL-2.0
//! Design tokens: every color, size and spacing value the UI uses.
//!
//! The screen is a dark slate with a yellow accent; the image canvas is a
//! fixed 320x440 card with rounded corners. Values here are in logical
//! pixels.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Secondary text on the slate background.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.92, 0.92, 0.93);

    /// Screen background, `#25292e`. Also the JPEG export fill color.
    pub const SLATE_900: Color = Color::from_rgb(37.0 / 255.0, 41.0 / 255.0, 46.0 / 255.0);
    /// Sticker sheet header, `#464c55`.
    pub const SLATE_700: Color = Color::from_rgb(70.0 / 255.0, 76.0 / 255.0, 85.0 / 255.0);

    /// Accent yellow, `#ffd33d`.
    pub const ACCENT_500: Color = Color::from_rgb(1.0, 211.0 / 255.0, 61.0 / 255.0);

    // Toast severities
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Pressed-state wash on icon buttons.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Scrim behind the sticker sheet.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

// ============================================================================
// Layout
// ============================================================================

/// 8px grid plus the two fixed gaps of the editing screen.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    /// Gap between the image and the top of the window.
    pub const IMAGE_TOP: f32 = 58.0;
    /// Horizontal gap around the add-sticker button.
    pub const OPTIONS_GAP: f32 = 60.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 38.0;

    // Footer buttons
    pub const BUTTON_WIDTH: f32 = 320.0;
    pub const BUTTON_HEIGHT: f32 = 68.0;
    pub const CIRCLE_BUTTON: f32 = 84.0;

    /// Picker thumbnail edge length.
    pub const STICKER_THUMB: f32 = 100.0;
    pub const SHEET_HEIGHT: f32 = 220.0;
    pub const SHEET_HEADER_HEIGHT: f32 = 48.0;

    pub const TOAST_WIDTH: f32 = 320.0;

    pub const WINDOW_WIDTH: f32 = 420.0;
    pub const WINDOW_HEIGHT: f32 = 760.0;
}

pub mod typography {
    /// Sheet title.
    pub const TITLE_SM: f32 = 16.0;
    /// Footer button labels.
    pub const BODY_LG: f32 = 16.0;
    /// Toast messages.
    pub const BODY: f32 = 14.0;
    /// Labels under icon buttons.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Borders and Shadows
// ============================================================================

pub mod border {
    /// Toast accent stripe.
    pub const WIDTH_MD: f32 = 2.0;
    /// Yellow ring around the primary and circle buttons.
    pub const WIDTH_ACCENT: f32 = 4.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 10.0;
    /// Image canvas and sticker sheet corners.
    pub const LG: f32 = 18.0;
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Floating toasts.
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::XL > spacing::LG);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::CIRCLE_BUTTON > sizing::ICON_LG);
    assert!(sizing::SHEET_HEIGHT > sizing::STICKER_THUMB + sizing::SHEET_HEADER_HEIGHT);
    assert!(sizing::WINDOW_WIDTH > sizing::BUTTON_WIDTH);

    assert!(border::WIDTH_ACCENT > border::WIDTH_MD);
};
