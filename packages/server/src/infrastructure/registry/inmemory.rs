//! In-memory connection registry.
//!
//! Single-process registry backing the realtime core: one entry per
//! user, guarded by one `tokio::sync::Mutex` so register/unregister and
//! the membership snapshot taken for broadcast are atomic with respect
//! to each other.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionHandle, ConnectionId, ConnectionRegistry, PeerSender, UserId};

/// In-memory `ConnectionRegistry` implementation.
pub struct InMemoryConnectionRegistry {
    /// Live connections keyed by bound user id.
    connections: Mutex<HashMap<UserId, ConnectionHandle>>,
}

impl InMemoryConnectionRegistry {
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(&self, user_id: UserId, handle: ConnectionHandle) {
        let mut connections = self.connections.lock().await;
        let connection_id = handle.id;
        if let Some(previous) = connections.insert(user_id, handle) {
            // Last-connection-wins: dropping the previous handle closes its
            // outbound channel, which ends the old socket's pump.
            tracing::info!(
                "Replaced connection {} for user {} with {}",
                previous.id,
                user_id,
                connection_id
            );
        } else {
            tracing::debug!("Registered connection {} for user {}", connection_id, user_id);
        }
    }

    async fn unregister(&self, user_id: UserId, connection_id: ConnectionId) -> bool {
        let mut connections = self.connections.lock().await;
        match connections.get(&user_id) {
            Some(handle) if handle.id == connection_id => {
                connections.remove(&user_id);
                tracing::debug!("Unregistered connection {} for user {}", connection_id, user_id);
                true
            }
            Some(_) => {
                // The entry belongs to a newer connection; leave it alone.
                tracing::debug!(
                    "Skipped unregister of stale connection {} for user {}",
                    connection_id,
                    user_id
                );
                false
            }
            None => false,
        }
    }

    async fn is_online(&self, user_id: UserId) -> bool {
        let connections = self.connections.lock().await;
        connections.contains_key(&user_id)
    }

    async fn connections(&self) -> Vec<(UserId, PeerSender)> {
        let connections = self.connections.lock().await;
        connections
            .iter()
            .map(|(user_id, handle)| (*user_id, handle.sender.clone()))
            .collect()
    }

    async fn online_user_ids(&self) -> Vec<UserId> {
        let connections = self.connections.lock().await;
        connections.keys().copied().collect()
    }

    async fn count_connections(&self) -> usize {
        let connections = self.connections.lock().await;
        connections.len()
    }
}
