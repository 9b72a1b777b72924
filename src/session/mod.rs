//! Notification session: listener lifecycle and observable state.
//!
//! A [`NotificationSession`] is created once by the composition root at
//! application start and handed to the consuming view. Each activation
//! re-runs device registration; the incoming-notification listeners are
//! attached at most once for the lifetime of the session.

pub mod feed;
pub mod lifecycle;
pub mod types;

pub use feed::{notification_feed, FeedReceiver, NotificationFeed};
pub use lifecycle::NotificationSession;
pub use types::{NotificationRecord, NotificationResponse, ProviderEvent, UserAction};
