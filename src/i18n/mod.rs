// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at compile time. The active
//! locale comes from the CLI, then the config file, then the OS, and falls
//! back to `en-US`.

pub mod fluent;
