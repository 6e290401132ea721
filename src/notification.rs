//! Plugin-raised notifications.
//!
//! Plugins surface pending alerts through the store; each alert is scoped
//! either to a client (carries the client id) or to a device (no client id,
//! the plugin must be device-capable).

use serde::{Deserialize, Serialize};

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single alert raised by a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    /// Create a new notification.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            severity,
        }
    }
}

/// A pending notification together with its origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveNotification {
    /// Plugin that raised the notification.
    pub plugin_id: String,
    /// The alert itself.
    pub notification: Notification,
    /// Client the alert is scoped to; absent for device-level alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}
