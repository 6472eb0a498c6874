//! Session state as reported by the identity provider.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  SessionFeed (single owner, held by the provider)            │
//! │  ├── None: provider still bootstrapping                      │
//! │  └── Some(Session): last known signed-in/signed-out state    │
//! │                                                              │
//! │  SessionSubscription (one per observer)                      │
//! │  └── next(): current session first, then one per change      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the provider publishes. Observers get a read-only stream and
//! unsubscribe by dropping their subscription. Each subscription has its own
//! queue, so every transition reaches every observer in publish order.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Who is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Email address the account was registered with
    pub email_address: String,
    /// Provider-assigned account id, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Identity {
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            user_id: None,
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// Signed-in/signed-out state. `signed_in` is true exactly when `identity` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub signed_in: bool,
    pub identity: Option<Identity>,
}

impl Session {
    pub fn signed_out() -> Self {
        Self {
            signed_in: false,
            identity: None,
        }
    }

    pub fn signed_in(identity: Identity) -> Self {
        Self {
            signed_in: true,
            identity: Some(identity),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in && self.identity.is_some()
    }

    /// Email of the signed-in account, if any.
    pub fn email(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.email_address.as_str())
    }
}

/// Single-owner cell holding the provider's current session.
///
/// `None` means the provider has not reported anything yet.
#[derive(Debug, Default)]
pub struct SessionFeed {
    state: Mutex<FeedState>,
}

#[derive(Debug, Default)]
struct FeedState {
    current: Option<Session>,
    subscribers: Vec<mpsc::UnboundedSender<Session>>,
}

impl SessionFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new session and queue it for every subscriber, unless it
    /// equals the last published one.
    ///
    /// Returns true when a notification was emitted.
    pub fn publish(&self, session: Session) -> bool {
        let mut state = self.state.lock();
        if state.current.as_ref() == Some(&session) {
            return false;
        }
        state.current = Some(session.clone());
        state
            .subscribers
            .retain(|tx| tx.send(session.clone()).is_ok());
        tracing::debug!(
            signed_in = session.is_signed_in(),
            subscribers = state.subscribers.len(),
            "Session changed"
        );
        true
    }

    /// Last published session, if any.
    pub fn current(&self) -> Option<Session> {
        self.state.lock().current.clone()
    }

    /// Subscribe to notifications. The current session, if known, is queued
    /// first.
    pub fn subscribe(&self) -> SessionSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut state = self.state.lock();
        if let Some(current) = &state.current {
            // The receiver is still in hand, so this cannot fail.
            let _ = tx.send(current.clone());
        }
        state.subscribers.push(tx);
        SessionSubscription { rx }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        let mut state = self.state.lock();
        state.subscribers.retain(|tx| !tx.is_closed());
        state.subscribers.len()
    }
}

/// Read-only stream of session notifications.
#[derive(Debug)]
pub struct SessionSubscription {
    rx: mpsc::UnboundedReceiver<Session>,
}

impl SessionSubscription {
    /// Wait for the next session notification.
    ///
    /// Returns `None` once the owning feed has been dropped and every queued
    /// notification has been read.
    pub async fn next(&mut self) -> Option<Session> {
        self.rx.recv().await
    }
}
