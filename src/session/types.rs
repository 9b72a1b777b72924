//! Types for incoming notifications

use serde::{Deserialize, Serialize};

/// A delivered notification plus delivery metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    /// Unique identifier for this delivery
    pub id: String,
    /// Notification title
    pub title: String,
    /// Notification body text
    pub body: String,
    /// Opaque provider data map
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// When the notification arrived (RFC 3339)
    pub received_at: String,
}

impl NotificationRecord {
    /// Create a new record stamped with a fresh id and arrival time
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            body: body.into(),
            data: None,
            received_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Attach the opaque data map
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// How the user interacted with a delivered notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "id", rename_all = "snake_case")]
pub enum UserAction {
    Tap,
    Dismiss,
    ActionButton(String),
}

/// The user interacted with a delivered notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    /// The notification that was interacted with
    pub record: NotificationRecord,
    /// What the user did
    pub action: UserAction,
}

/// Events emitted by the platform/provider side into the session feed
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderEvent {
    /// A notification was delivered while the session is listening
    Received(NotificationRecord),
    /// The user interacted with a delivered notification
    Response(NotificationResponse),
}
