//! Types for outbound push messages

use serde::{Deserialize, Serialize};

/// The provider's push-send envelope. Field names are the wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushMessage {
    /// Recipient push tokens
    pub to: Vec<String>,
    /// Sound to play on delivery
    pub sound: String,
    /// Notification title
    pub title: String,
    /// Notification body text
    pub body: String,
    /// Opaque data map, omitted from the wire when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl PushMessage {
    /// Create a message with the default sound
    pub fn new(
        to: Vec<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to,
            sound: "default".to_string(),
            title: title.into(),
            body: body.into(),
            data: None,
        }
    }

    /// Attach the opaque data map
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// What came back from the send endpoint. The response body is not parsed;
/// callers that want a retry policy get the status and decide themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendOutcome {
    /// HTTP status code returned by the provider
    pub status: u16,
}

impl SendOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
