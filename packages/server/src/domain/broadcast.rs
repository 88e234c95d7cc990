//! Broadcast engine port and audience selection.

use async_trait::async_trait;

use super::error::DeliveryError;
use super::user::UserId;

/// Recipient set for an outbound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// Every registered connection.
    Everyone,
    /// Only the connections bound to the sender or the recipient.
    Private { sender: UserId, recipient: UserId },
}

impl Audience {
    /// Whether a connection bound to `user_id` belongs to this audience.
    pub fn includes(&self, user_id: UserId) -> bool {
        match self {
            Audience::Everyone => true,
            Audience::Private { sender, recipient } => {
                user_id == *sender || user_id == *recipient
            }
        }
    }
}

/// Delivers serialized frames to connections selected by audience.
///
/// Broadcast delivery is best-effort and at-most-once: a send failure on
/// one connection is logged and skipped, and never aborts delivery to
/// the rest of the audience. A disconnected recipient simply misses the
/// live event; history stays available through the message store.
#[async_trait]
pub trait EventBroadcaster: Send + Sync {
    /// Deliver a frame to one user's connection.
    async fn push_to(&self, user_id: UserId, frame: &str) -> Result<(), DeliveryError>;

    /// Deliver a frame to every connection in the audience.
    async fn broadcast(&self, audience: &Audience, frame: &str);
}
