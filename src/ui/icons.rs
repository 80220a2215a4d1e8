// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are monochrome SVG documents embedded at compile time via
//! `include_bytes!`. Handles are cached using `OnceLock` so each document is
//! parsed once; tint them with [`styles::overlay::tint`](super::styles::overlay::tint).
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `refresh` not `reset_session`).

use crate::media::StickerId;
use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Defines an icon function returning an `Svg` widget backed by a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Action Icons
// =============================================================================

define_icon!(refresh, "refresh.svg", "Circular arrow: start over.");
define_icon!(save, "save.svg", "Tray with downward arrow.");
define_icon!(plus, "plus.svg", "Plus sign.");
define_icon!(close, "close.svg", "Cross.");

// =============================================================================
// Notification Icons
// =============================================================================

define_icon!(checkmark, "checkmark.svg", "Checkmark: success.");
define_icon!(info, "info.svg", "Letter i in a circle: information.");
define_icon!(warning, "warning.svg", "Exclamation mark in a triangle.");

// =============================================================================
// Stickers
// =============================================================================

/// Vector image of a bundled sticker.
pub fn sticker(id: StickerId) -> Svg<'static> {
    static HANDLES: OnceLock<Mutex<HashMap<StickerId, Handle>>> = OnceLock::new();
    let handles = HANDLES.get_or_init(|| Mutex::new(HashMap::new()));
    let handle = match handles.lock() {
        Ok(mut cache) => cache
            .entry(id)
            .or_insert_with(|| Handle::from_memory(id.svg_data()))
            .clone(),
        Err(_) => Handle::from_memory(id.svg_data()),
    };
    Svg::new(handle)
}

/// Sets a square size on an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
