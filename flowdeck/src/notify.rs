//! Notification log for the panel UI.
//!
//! The panel surfaces operation outcomes as transient notifications; this
//! module keeps the bounded history those toasts render from. Warnings
//! and errors additionally go to the tracing log, success messages are
//! UI-only.

use crate::config::DEFAULT_NOTIFICATION_HISTORY;
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::sync::Mutex;
use tracing::{error, warn};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Success,
    Warning,
    Error,
}

impl NotifyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifyLevel::Success => "success",
            NotifyLevel::Warning => "warning",
            NotifyLevel::Error => "error",
        }
    }
}

/// One entry in the notification history.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotifyLevel,
    pub message: String,
    pub at: DateTime<Local>,
}

/// Bounded, thread-safe notification history.
///
/// Shared between the panel loop and spawned request tasks via `Arc`.
/// Best-effort and UI-only: no return values, no failure mode.
pub struct Notifier {
    history: Mutex<VecDeque<Notification>>,
    capacity: usize,
}

impl Notifier {
    /// Creates a notifier keeping at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            history: Mutex::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    /// Record a success notification.
    pub fn success(&self, message: impl Into<String>) {
        self.push(NotifyLevel::Success, message.into());
    }

    /// Record a warning; also logged.
    pub fn warn(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.push(NotifyLevel::Warning, message);
    }

    /// Record an error; also logged.
    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        error!("{}", message);
        self.push(NotifyLevel::Error, message);
    }

    fn push(&self, level: NotifyLevel, message: String) {
        let mut history = self.history.lock().unwrap();
        history.push_back(Notification {
            level,
            message,
            at: Local::now(),
        });
        while history.len() > self.capacity {
            history.pop_front();
        }
    }

    /// The newest `count` notifications, newest first.
    pub fn recent(&self, count: usize) -> Vec<Notification> {
        let history = self.history.lock().unwrap();
        history.iter().rev().take(count).cloned().collect()
    }

    /// The newest notification, if any.
    pub fn latest(&self) -> Option<Notification> {
        self.history.lock().unwrap().back().cloned()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_returns_newest_first() {
        let notifier = Notifier::new(10);
        notifier.success("first");
        notifier.error("second");

        let recent = notifier.recent(10);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].message, "second");
        assert_eq!(recent[0].level, NotifyLevel::Error);
        assert_eq!(recent[1].message, "first");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let notifier = Notifier::new(2);
        notifier.success("one");
        notifier.success("two");
        notifier.success("three");

        let recent = notifier.recent(10);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].message, "three");
        assert_eq!(recent[1].message, "two");
    }

    #[test]
    fn test_latest() {
        let notifier = Notifier::new(5);
        assert!(notifier.latest().is_none());

        notifier.warn("careful");
        let latest = notifier.latest().unwrap();
        assert_eq!(latest.message, "careful");
        assert_eq!(latest.level, NotifyLevel::Warning);
    }

    #[test]
    fn test_zero_capacity_keeps_one_entry() {
        let notifier = Notifier::new(0);
        notifier.success("kept");
        assert_eq!(notifier.recent(10).len(), 1);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(NotifyLevel::Success.as_str(), "success");
        assert_eq!(NotifyLevel::Warning.as_str(), "warning");
        assert_eq!(NotifyLevel::Error.as_str(), "error");
    }
}
