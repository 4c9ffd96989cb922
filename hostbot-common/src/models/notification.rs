// File: hostbot-common/src/models/notification.rs

use std::fmt;
use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Bot request submitted!";
pub const SUCCESS_DESCRIPTION: &str = "Check your Discord DM for confirmation.";
pub const FAILURE_MESSAGE: &str = "Submission failed";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
        }
    }
}

/// The (kind, message, description) triple handed to the notification surface.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub description: Option<String>,
}

impl Notification {
    pub fn submitted() -> Self {
        Self {
            kind: NotificationKind::Success,
            message: SUCCESS_MESSAGE.to_string(),
            description: Some(SUCCESS_DESCRIPTION.to_string()),
        }
    }

    pub fn submission_failed(reason: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: FAILURE_MESSAGE.to_string(),
            description: Some(reason.into()),
        }
    }

    /// Local validation errors carry the message alone.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            description: None,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(d) => write!(f, "{}: {}", self.message, d),
            None => write!(f, "{}", self.message),
        }
    }
}
