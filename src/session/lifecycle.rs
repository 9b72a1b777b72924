//! Session activation and listener lifecycle
//!
//! Activation runs registration every time; listener attachment happens once
//! per session lifetime. The two are independent on purpose: a remounting
//! view gets a fresh token resolution without ever duplicating listeners.

use super::feed::FeedReceiver;
use super::types::{NotificationRecord, ProviderEvent};
use crate::device::DeviceEnvironment;
use crate::registration::{PermissionGate, Registrar, TokenIssuer, TokenState};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Where the session is in its listener lifecycle
enum Attachment {
    /// Feed receiver held, waiting for the first activation
    Unclaimed(FeedReceiver),
    /// Listener task running
    Attached(JoinHandle<()>),
    /// Torn down; never re-attaches
    Detached,
}

/// Owns the listener lifecycle and the state a consuming view observes.
///
/// Created once by the composition root; the accumulated notification list
/// is unbounded and newest-first.
pub struct NotificationSession {
    token: Arc<RwLock<TokenState>>,
    inbox: Arc<RwLock<Vec<NotificationRecord>>>,
    attachment: std::sync::Mutex<Attachment>,
}

impl NotificationSession {
    /// Create a session over the receiving end of a notification feed
    pub fn new(events: FeedReceiver) -> Self {
        Self {
            token: Arc::new(RwLock::new(TokenState::Pending)),
            inbox: Arc::new(RwLock::new(Vec::new())),
            attachment: std::sync::Mutex::new(Attachment::Unclaimed(events)),
        }
    }

    /// Activate the session for a consuming view.
    ///
    /// Always re-runs the registration procedure and stores the outcome; on
    /// the first activation only, claims the feed and spawns the listener
    /// task. The resulting token state is also returned for convenience.
    pub async fn activate<D, P, T>(&self, registrar: &Registrar<D, P, T>) -> TokenState
    where
        D: DeviceEnvironment,
        P: PermissionGate,
        T: TokenIssuer,
    {
        self.attach_listeners();

        *self.token.write().await = TokenState::Pending;
        let state = TokenState::from(registrar.register().await);
        *self.token.write().await = state.clone();
        state
    }

    /// Claim the feed receiver and spawn the listener task, once.
    fn attach_listeners(&self) {
        let mut attachment = self.attachment.lock().unwrap_or_else(|e| e.into_inner());
        match &*attachment {
            Attachment::Unclaimed(_) => {}
            Attachment::Attached(_) => {
                log::debug!("Listeners already attached, skipping");
                return;
            }
            Attachment::Detached => {
                log::debug!("Session detached, not re-attaching listeners");
                return;
            }
        }

        let receiver =
            match std::mem::replace(&mut *attachment, Attachment::Detached) {
                Attachment::Unclaimed(receiver) => receiver,
                _ => unreachable!("attachment state checked above"),
            };

        let inbox = self.inbox.clone();
        let handle = tokio::spawn(listen(receiver, inbox));
        *attachment = Attachment::Attached(handle);
        log::info!("Notification listeners attached");
    }

    /// Current token state
    pub async fn token(&self) -> TokenState {
        self.token.read().await.clone()
    }

    /// Accumulated notifications, newest first
    pub async fn notifications(&self) -> Vec<NotificationRecord> {
        self.inbox.read().await.clone()
    }

    /// Whether the listener task is currently running
    pub fn is_attached(&self) -> bool {
        let attachment = self.attachment.lock().unwrap_or_else(|e| e.into_inner());
        matches!(&*attachment, Attachment::Attached(_))
    }

    /// Tear down the listeners. The attachment claim is not reset, so the
    /// session never re-attaches after this.
    pub fn detach(&self) {
        let mut attachment = self.attachment.lock().unwrap_or_else(|e| e.into_inner());
        if let Attachment::Attached(handle) =
            std::mem::replace(&mut *attachment, Attachment::Detached)
        {
            handle.abort();
            log::info!("Notification listeners detached");
        }
    }
}

impl Drop for NotificationSession {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Listener task: prepend received notifications, observe user responses.
async fn listen(mut events: FeedReceiver, inbox: Arc<RwLock<Vec<NotificationRecord>>>) {
    while let Some(event) = events.recv().await {
        match event {
            ProviderEvent::Received(record) => {
                log::debug!("Notification received: {}", record.id);
                inbox.write().await.insert(0, record);
            }
            ProviderEvent::Response(response) => {
                // Observation only; no state mutation on user interaction
                log::debug!(
                    "Notification response: {} ({:?})",
                    response.record.id,
                    response.action
                );
            }
        }
    }
    log::debug!("Notification feed closed, listener task exiting");
}
