//! Device-side push notification lifecycle for Expo-style push providers.
//!
//! Three pieces work together:
//! - [`registration`] runs the one-shot device registration procedure:
//!   notification channel setup, physical-device check, permission
//!   query/request, project-id resolution, token fetch.
//! - [`session`] owns the listener lifecycle: it runs registration on every
//!   activation, attaches the incoming-notification listeners at most once
//!   per session lifetime, and exposes token state plus the accumulated
//!   notification list to a presentation layer.
//! - [`push`] sends outbound notifications through the provider's HTTP
//!   send endpoint.
//!
//! The OS permission subsystem, the device environment, and the provider's
//! token-issuing API are opaque collaborators, modeled as traits so hosts
//! and tests can supply their own.

pub mod config;
pub mod device;
pub mod push;
pub mod registration;
pub mod session;

pub use config::AppManifest;
pub use device::{DeviceEnvironment, NotificationChannel, Platform};
pub use push::{PushMessage, PushSender, SendError, SendOutcome, EXPO_PUSH_ENDPOINT};
pub use registration::{
    PermissionGate, PermissionStatus, RegistrationError, Registrar, TokenIssuer, TokenState,
};
pub use session::{
    notification_feed, NotificationFeed, NotificationRecord, NotificationResponse,
    NotificationSession, ProviderEvent, UserAction,
};
