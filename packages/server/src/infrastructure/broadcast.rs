//! Channel-backed broadcast engine.
//!
//! Delivery works against the registry's membership snapshot: the
//! snapshot is taken under the registry lock, then frames are pushed
//! into each connection's outbound channel without holding it. A send
//! into a channel whose pump has died fails soft and is skipped.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Audience, ConnectionRegistry, DeliveryError, EventBroadcaster, UserId};

/// `EventBroadcaster` implementation over per-connection channels.
pub struct ChannelBroadcaster {
    registry: Arc<dyn ConnectionRegistry>,
}

impl ChannelBroadcaster {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl EventBroadcaster for ChannelBroadcaster {
    async fn push_to(&self, user_id: UserId, frame: &str) -> Result<(), DeliveryError> {
        let connections = self.registry.connections().await;
        let sender = connections
            .into_iter()
            .find(|(id, _)| *id == user_id)
            .map(|(_, sender)| sender)
            .ok_or(DeliveryError::NotConnected(user_id))?;

        sender
            .send(frame.to_string())
            .map_err(|_| DeliveryError::ChannelClosed(user_id))?;
        tracing::debug!("Pushed frame to user {}", user_id);
        Ok(())
    }

    async fn broadcast(&self, audience: &Audience, frame: &str) {
        let connections = self.registry.connections().await;

        for (user_id, sender) in connections {
            if !audience.includes(user_id) {
                continue;
            }
            // Partial failure is tolerated; delivery is best-effort.
            if sender.send(frame.to_string()).is_err() {
                tracing::warn!("Failed to push frame to user {}, skipping", user_id);
            } else {
                tracing::debug!("Delivered frame to user {}", user_id);
            }
        }
    }
}
