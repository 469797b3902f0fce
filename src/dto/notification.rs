//! Toast-style notifications emitted by the view.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationVariant::Success => "success",
            NotificationVariant::Error => "error",
            NotificationVariant::Warning => "warning",
            NotificationVariant::Info => "info",
        }
    }
}

/// Title, message and severity of one user-facing notification.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            message: message.into(),
            variant: NotificationVariant::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
            variant: NotificationVariant::Error,
        }
    }
}
