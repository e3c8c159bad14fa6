//! User-facing notifications raised by the form sessions.

use log::{error, info};

/// Notification texts shown by the form sessions
pub mod messages {
    pub const CREATE_SUCCESS: &str = "Project created.";
    pub const CREATE_FAILURE: &str = "Failed to create project.";
    pub const EDIT_SUCCESS: &str = "Project updated.";
    pub const EDIT_FAILURE: &str = "Failed to update project.";
    pub const MISSING_IMAGE: &str = "No image file provided.";
    pub const MISSING_FIELDS: &str = "Missing required fields";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success<S: Into<String>>(message: S) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Surface that displays notifications to the admin
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => info!("{}", notification.message),
            NotificationLevel::Error => error!("{}", notification.message),
        }
    }
}
