use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The stored session is no longer usable; the subscriber should route
    /// the user back to login.
    Expired,
}

/// Broadcast hub for session lifecycle events.
///
/// The API client publishes here when a session dies mid-request; the UI
/// layer subscribes and reacts, keeping navigation concerns out of the
/// networking code.
#[derive(Debug, Clone)]
pub struct SessionEvents {
    tx: broadcast::Sender<SessionEvent>,
}

impl SessionEvents {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    pub fn notify_expired(&self) {
        if self.tx.send(SessionEvent::Expired).is_err() {
            tracing::debug!("session expiry broadcast with no subscribers");
        }
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new()
    }
}
