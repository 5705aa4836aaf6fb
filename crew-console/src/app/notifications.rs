//! Short-lived notifications shown over the main screen

use std::time::{Duration, Instant};

use super::commands::NotificationLevel;

#[derive(Debug, Clone)]
pub struct Notification {
    pub timestamp: Instant,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    pub auto_dismiss_after: Option<Duration>,
}

pub struct NotificationManager {
    notifications: Vec<Notification>,
    max_notifications: usize,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            max_notifications: 20,
        }
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationLevel::Error, title.into(), message.into())
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationLevel::Success, title.into(), message.into())
    }

    pub fn warning(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationLevel::Warning, title.into(), message.into())
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationLevel::Info, title.into(), message.into())
    }

    pub fn push(&mut self, level: NotificationLevel, title: String, message: String) {
        self.notifications.push(Notification {
            timestamp: Instant::now(),
            level,
            title,
            message,
            auto_dismiss_after: Some(Duration::from_secs(5)),
        });

        if self.notifications.len() > self.max_notifications {
            self.notifications.remove(0);
        }
    }

    /// Notifications that have not expired yet, oldest first
    pub fn get_active(&self) -> Vec<&Notification> {
        let now = Instant::now();
        self.notifications
            .iter()
            .filter(|n| Self::is_live(n, now))
            .collect()
    }

    pub fn cleanup_expired(&mut self) {
        let now = Instant::now();
        self.notifications.retain(|n| Self::is_live(n, now));
    }

    fn is_live(notification: &Notification, now: Instant) -> bool {
        match notification.auto_dismiss_after {
            Some(duration) => now.duration_since(notification.timestamp) < duration,
            None => true,
        }
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
