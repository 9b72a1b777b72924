//! Push message sender
//!
//! One POST per send, no retries, no response-body parsing. Transport
//! failures are errors; HTTP error statuses are reported in the outcome so
//! callers can apply their own policy.

use super::types::{PushMessage, SendOutcome};
use thiserror::Error;

/// The provider's push-send endpoint
pub const EXPO_PUSH_ENDPOINT: &str = "https://exp.host/--/api/v2/push/send";

/// Why a send could not be completed at the transport level
#[derive(Debug, Error)]
pub enum SendError {
    #[error("Push request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Sends push messages to the provider's HTTP endpoint.
pub struct PushSender {
    client: reqwest::Client,
    endpoint: String,
}

impl PushSender {
    /// Create a sender against the provider's production endpoint
    pub fn new() -> Self {
        Self::with_endpoint(EXPO_PUSH_ENDPOINT)
    }

    /// Create a sender against a custom endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Submit one message. Issues exactly one POST; any HTTP status counts
    /// as a completed send and lands in the outcome.
    pub async fn send(&self, message: &PushMessage) -> Result<SendOutcome, SendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .header("Accept-Encoding", "gzip, deflate")
            .json(message)
            .send()
            .await?;

        let outcome = SendOutcome {
            status: response.status().as_u16(),
        };
        if outcome.is_success() {
            log::debug!("Push message sent to {} recipients", message.to.len());
        } else {
            log::warn!("Push send returned HTTP {}", outcome.status);
        }
        Ok(outcome)
    }
}

impl Default for PushSender {
    fn default() -> Self {
        Self::new()
    }
}
