//! Channel between the platform notification source and the session.
//!
//! The platform side holds a [`NotificationFeed`] and pushes events into it;
//! the session owns the receiving end until its first activation claims it.

use super::types::{NotificationRecord, NotificationResponse, ProviderEvent};
use tokio::sync::mpsc;

/// Receiving end of the feed, consumed by the session's listener task
pub type FeedReceiver = mpsc::UnboundedReceiver<ProviderEvent>;

/// Sending handle the platform/provider side delivers events through.
#[derive(Debug, Clone)]
pub struct NotificationFeed {
    sender: mpsc::UnboundedSender<ProviderEvent>,
}

/// Create a feed pair: the platform-side sending handle and the receiver the
/// session will listen on.
pub fn notification_feed() -> (NotificationFeed, FeedReceiver) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (NotificationFeed { sender }, receiver)
}

impl NotificationFeed {
    /// Deliver an incoming notification. Returns false if no session is
    /// listening anymore.
    pub fn deliver(&self, record: NotificationRecord) -> bool {
        self.sender.send(ProviderEvent::Received(record)).is_ok()
    }

    /// Report a user interaction with a delivered notification
    pub fn respond(&self, response: NotificationResponse) -> bool {
        self.sender.send(ProviderEvent::Response(response)).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliver_after_receiver_dropped() {
        let (feed, receiver) = notification_feed();
        drop(receiver);
        assert!(!feed.deliver(NotificationRecord::new("T", "B")));
    }

    #[tokio::test]
    async fn test_events_arrive_in_order() {
        let (feed, mut receiver) = notification_feed();
        feed.deliver(NotificationRecord::new("first", ""));
        feed.deliver(NotificationRecord::new("second", ""));

        match receiver.recv().await.unwrap() {
            ProviderEvent::Received(record) => assert_eq!(record.title, "first"),
            other => panic!("unexpected event: {:?}", other),
        }
        match receiver.recv().await.unwrap() {
            ProviderEvent::Received(record) => assert_eq!(record.title, "second"),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
