// SPDX-License-Identifier: MPL-2.0
//! A single toast notification.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Unique, monotonically increasing notification identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

fn next_id() -> NotificationId {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    NotificationId(COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// How long a toast stays visible before auto-dismissing.
const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(4);

/// A queued or visible toast. The message is a localization key resolved at
/// render time, so toasts survive a locale switch.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    message_key: String,
    severity: Severity,
    created_at: Instant,
}

impl Notification {
    fn new(message_key: &str, severity: Severity) -> Self {
        Self {
            id: next_id(),
            message_key: message_key.to_owned(),
            severity,
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn success(message_key: &str) -> Self {
        Self::new(message_key, Severity::Success)
    }

    #[must_use]
    pub fn info(message_key: &str) -> Self {
        Self::new(message_key, Severity::Info)
    }

    #[must_use]
    pub fn warning(message_key: &str) -> Self {
        Self::new(message_key, Severity::Warning)
    }

    #[must_use]
    pub fn error(message_key: &str) -> Self {
        Self::new(message_key, Severity::Error)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether this notification has outlived its display window.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.created_at.elapsed() >= AUTO_DISMISS_AFTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = Notification::info("toast-a");
        let b = Notification::info("toast-b");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn fresh_notifications_do_not_auto_dismiss() {
        let toast = Notification::success("toast-key");
        assert!(!toast.should_auto_dismiss());
    }

    #[test]
    fn constructors_set_severity() {
        assert_eq!(Notification::success("k").severity(), Severity::Success);
        assert_eq!(Notification::info("k").severity(), Severity::Info);
        assert_eq!(Notification::warning("k").severity(), Severity::Warning);
        assert_eq!(Notification::error("k").severity(), Severity::Error);
    }
}
