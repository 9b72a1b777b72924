//! Outbound push delivery through the provider's HTTP send endpoint.

pub mod sender;
pub mod types;

pub use sender::{PushSender, SendError, EXPO_PUSH_ENDPOINT};
pub use types::{PushMessage, SendOutcome};
