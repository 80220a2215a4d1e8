// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Workflow notices (picked nothing, saved, failed) are shown as toasts in
//! the bottom-right corner without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification` and its `Severity`
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget rendering
//!
//! # Behavior
//!
//! - Duration: 3s for success/info, 5s for warnings, manual dismiss for errors
//! - At most 3 visible toasts, others are queued

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
