//! Toast notifications
//!
//! Short-lived messages shown in the status bar, e.g. when a transfer
//! commits or is cancelled.

use ratatui::style::Color;
use std::time::{Duration, Instant};

/// How long a toast stays up
pub const DEFAULT_TOAST: Duration = Duration::from_secs(3);

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
}

impl NotificationType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType, now: Instant) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: now,
            duration: DEFAULT_TOAST,
        }
    }

    pub fn info(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, NotificationType::Info, now)
    }

    pub fn success(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, NotificationType::Success, now)
    }

    pub fn warning(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, NotificationType::Warning, now)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// A queue of notifications; the oldest live one is shown
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn remove_expired(&mut self, now: Instant) {
        self.notifications.retain(|n| !n.is_expired(now));
    }

    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let now = Instant::now();
        let n = Notification::info("Test message", now);
        assert_eq!(n.message, "Test message");
        assert_eq!(n.notification_type, NotificationType::Info);
        assert_eq!(NotificationType::Success.color(), Color::Green);
    }

    #[test]
    fn test_queue_expiry() {
        let now = Instant::now();
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::success("First", now).with_duration(Duration::from_secs(1)));
        queue.push(Notification::warning("Second", now));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "First");

        queue.remove_expired(now + Duration::from_secs(1));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().message, "Second");

        queue.remove_expired(now + Duration::from_secs(3));
        assert!(queue.is_empty());
    }
}
