// SPDX-License-Identifier: MPL-2.0
//! Notification data: severity, message key and arguments.

use crate::session::{Notice, NoticeKind};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Green, 3s.
    Success,
    /// Blue, 3s.
    Info,
    /// Orange, 5s.
    Warning,
    /// Red, stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// `None` means manual dismiss.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

impl From<NoticeKind> for Severity {
    fn from(kind: NoticeKind) -> Self {
        match kind {
            NoticeKind::Info => Severity::Info,
            NoticeKind::Success => Severity::Success,
            NoticeKind::Error => Severity::Error,
        }
    }
}

/// A toast waiting to be shown or currently on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Localization key, resolved at render time.
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Whether the notification has been visible for its full duration at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|d| now.saturating_duration_since(self.created_at) >= d)
    }
}

impl From<Notice> for Notification {
    fn from(notice: Notice) -> Self {
        notice
            .args
            .into_iter()
            .fold(Notification::new(notice.kind.into(), notice.key), |n, (k, v)| {
                n.with_arg(k, v)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::new(Severity::Success, "a");
        let n2 = Notification::new(Severity::Success, "a");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
        let n = Notification::new(Severity::Error, "e");
        assert!(!n.is_expired_at(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn success_expires_after_three_seconds() {
        let n = Notification::new(Severity::Success, "s");
        assert!(!n.is_expired_at(Instant::now()));
        assert!(n.is_expired_at(Instant::now() + Duration::from_secs(3)));
    }

    #[test]
    fn warning_lasts_longer_than_info() {
        assert!(
            Severity::Warning.auto_dismiss_duration() > Severity::Info.auto_dismiss_duration()
        );
    }

    #[test]
    fn notice_converts_with_arguments() {
        let notice = Notice {
            kind: NoticeKind::Success,
            key: "notice-downloaded",
            args: vec![("path".into(), "/tmp/a.jpeg".into())],
        };
        let notification = Notification::from(notice);

        assert_eq!(notification.severity(), Severity::Success);
        assert_eq!(notification.message_key(), "notice-downloaded");
        assert_eq!(
            notification.message_args(),
            &[("path".to_string(), "/tmp/a.jpeg".to_string())]
        );
    }
}
