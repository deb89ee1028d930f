//! Transient toast notifications

use tokio::time::{Duration, Instant};

/// A toast shown in the top-right corner until it expires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    /// How long a toast stays on screen
    pub const TTL: Duration = Duration::from_secs(4);

    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            created_at: now,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= Self::TTL
    }
}

/// Stack of live notifications, oldest first
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, message: impl Into<String>, now: Instant) {
        let notification = Notification::new(message, now);
        tracing::debug!("Notification: {}", notification.message);
        self.items.push(notification);
    }

    /// Drop every expired notification
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|n| !n.is_expired(now));
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
