//! UseCase: tear a connection out of the registry.

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, UserId};

/// Removes a closed connection from the registry.
pub struct DisconnectUserUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl DisconnectUserUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Unregister the connection if it is still the one bound for the user.
    ///
    /// Returns `true` when an entry was removed; callers broadcast a
    /// fresh presence snapshot only in that case. A replaced connection
    /// tearing down after its successor registered removes nothing, so
    /// no spurious offline transition is announced.
    pub async fn execute(&self, user_id: UserId, connection_id: ConnectionId) -> bool {
        let removed = self.registry.unregister(user_id, connection_id).await;
        if removed {
            tracing::info!("User {} disconnected", user_id);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConnectionHandle;
    use crate::infrastructure::registry::InMemoryConnectionRegistry;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_disconnect_removes_current_connection() {
        // given:
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = DisconnectUserUseCase::new(registry.clone());
        let (tx, _rx) = mpsc::unbounded_channel();
        let handle = ConnectionHandle::new(tx);
        let connection_id = handle.id;
        registry.register(UserId::new(1), handle).await;

        // when:
        let removed = usecase.execute(UserId::new(1), connection_id).await;

        // then:
        assert!(removed);
        assert!(!registry.is_online(UserId::new(1)).await);
    }

    #[tokio::test]
    async fn test_disconnect_of_replaced_connection_is_noop() {
        // given: the user reconnected, so the old connection id is stale
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = DisconnectUserUseCase::new(registry.clone());
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let old_handle = ConnectionHandle::new(tx1);
        let old_id = old_handle.id;
        registry.register(UserId::new(1), old_handle).await;
        let (tx2, _rx2) = mpsc::unbounded_channel();
        registry.register(UserId::new(1), ConnectionHandle::new(tx2)).await;

        // when:
        let removed = usecase.execute(UserId::new(1), old_id).await;

        // then: the replacement stays registered
        assert!(!removed);
        assert!(registry.is_online(UserId::new(1)).await);
    }

    #[tokio::test]
    async fn test_disconnect_unknown_user_is_noop() {
        // given:
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = DisconnectUserUseCase::new(registry);

        // when:
        let removed = usecase
            .execute(UserId::new(5), ConnectionId::generate())
            .await;

        // then:
        assert!(!removed);
    }
}
