//! UseCase: push a fresh presence snapshot to every connection.
//!
//! Register and unregister are the only transitions that change
//! presence, so the lifecycle handler runs this after each of them.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{
    Audience, ConnectionRegistry, DirectoryError, EventBroadcaster, UserDirectory,
    build_presence_snapshot,
};
use crate::infrastructure::dto::websocket::UserStatusFrame;

/// Recomputes presence from the registry and broadcasts a `user_status`
/// frame to all connections.
pub struct BroadcastPresenceUseCase {
    directory: Arc<dyn UserDirectory>,
    registry: Arc<dyn ConnectionRegistry>,
    broadcaster: Arc<dyn EventBroadcaster>,
}

impl BroadcastPresenceUseCase {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        registry: Arc<dyn ConnectionRegistry>,
        broadcaster: Arc<dyn EventBroadcaster>,
    ) -> Self {
        Self {
            directory,
            registry,
            broadcaster,
        }
    }

    pub async fn execute(&self) -> Result<(), DirectoryError> {
        let users = self.directory.list_users().await?;
        let online_ids: HashSet<_> = self.registry.online_user_ids().await.into_iter().collect();
        let snapshot = build_presence_snapshot(users, &online_ids);

        let frame = UserStatusFrame::from_snapshot(&snapshot);
        let json = serde_json::to_string(&frame).expect("user_status frame serializes");
        self.broadcaster.broadcast(&Audience::Everyone, &json).await;

        tracing::debug!(
            "Broadcast presence snapshot ({} users, {} online)",
            frame.users.len(),
            online_ids.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionHandle, UserId};
    use crate::infrastructure::broadcast::ChannelBroadcaster;
    use crate::infrastructure::directory::InMemoryUserDirectory;
    use crate::infrastructure::registry::InMemoryConnectionRegistry;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_presence_broadcast_reaches_all_connections() {
        // given: alice connected, bob known but offline
        let directory = Arc::new(InMemoryUserDirectory::with_demo_users());
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let broadcaster = Arc::new(ChannelBroadcaster::new(registry.clone()));
        let usecase =
            BroadcastPresenceUseCase::new(directory, registry.clone(), broadcaster);

        let (tx, mut rx) = mpsc::unbounded_channel();
        registry
            .register(UserId::new(1), ConnectionHandle::new(tx))
            .await;

        // when:
        usecase.execute().await.unwrap();

        // then: the frame lists both users with the right statuses
        let json = rx.recv().await.unwrap();
        let frame: UserStatusFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(frame.users.len(), 2);
        let alice = frame.users.iter().find(|u| u.username == "alice").unwrap();
        let bob = frame.users.iter().find(|u| u.username == "bob").unwrap();
        assert_eq!(
            serde_json::to_value(alice.status).unwrap(),
            serde_json::json!("online")
        );
        assert_eq!(
            serde_json::to_value(bob.status).unwrap(),
            serde_json::json!("offline")
        );
    }
}
