// SPDX-License-Identifier: MPL-2.0
//! `sticker_smash` is a small photo sticker editor built with the Iced GUI
//! framework.
//!
//! The user picks a photo (or keeps the bundled placeholder), drops an emoji
//! sticker on it, drags and resizes the sticker, then saves the composition
//! to the gallery or downloads it as a JPEG.
//!
//! - [`session`] - Workflow state machine and controller
//! - [`capability`] - Image picker, permission, capture and export adapters
//! - [`media`] - Stickers, composition and encoding
//! - [`app`] / [`ui`] - Iced application shell and widgets

pub mod app;
pub mod capability;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod session;
pub mod ui;
