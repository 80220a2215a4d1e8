// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `view` producing its own `Message` type and, where it keeps
//! local state, an `update` returning an `Event` for the application.
//!
//! # Components
//!
//! - [`image_viewer`] - Image canvas with the draggable sticker
//! - [`sticker_picker`] - Bottom sheet for choosing a sticker
//! - [`controls`] - Footer buttons
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, SVG tints)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading

pub mod controls;
pub mod design_tokens;
pub mod icons;
pub mod image_viewer;
pub mod notifications;
pub mod sticker_picker;
pub mod styles;
pub mod theming;
