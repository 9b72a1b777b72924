//! Types for the registration procedure

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// OS notification permission status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Why a registration attempt failed. All variants are terminal for the
/// attempt; nothing is retried automatically.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Must use a physical device for push notifications")]
    NotPhysicalDevice,

    #[error("Notification permission not granted")]
    PermissionDenied,

    #[error("Project ID not found in configuration")]
    MissingProjectId,

    #[error("Failed to fetch push token: {0}")]
    TokenFetch(String),
}

/// Current state of the push token as seen by the presentation layer.
///
/// Tagged so a consumer can never mistake an error message for a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum TokenState {
    /// Registration has not resolved yet
    Pending,
    /// Registration succeeded; the provider-issued token
    Ready(String),
    /// Registration failed; human-readable reason
    Failed(String),
}

impl TokenState {
    /// The token string, if registration succeeded
    pub fn token(&self) -> Option<&str> {
        match self {
            TokenState::Ready(token) => Some(token),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, TokenState::Pending)
    }
}

impl From<Result<String, RegistrationError>> for TokenState {
    fn from(result: Result<String, RegistrationError>) -> Self {
        match result {
            Ok(token) => TokenState::Ready(token),
            Err(e) => TokenState::Failed(e.to_string()),
        }
    }
}
