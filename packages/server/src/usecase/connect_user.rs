//! UseCase: bind a connection to a user identity.

use std::sync::Arc;

use crate::domain::{BindError, ConnectionHandle, ConnectionRegistry, UserDirectory, UserId, UserRecord};

/// Binds an authenticated connection into the registry.
pub struct ConnectUserUseCase {
    directory: Arc<dyn UserDirectory>,
    registry: Arc<dyn ConnectionRegistry>,
}

impl ConnectUserUseCase {
    pub fn new(directory: Arc<dyn UserDirectory>, registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self {
            directory,
            registry,
        }
    }

    /// Resolve the identifier against the user directory and register
    /// the connection.
    ///
    /// An unknown identifier fails the bind and leaves the registry
    /// untouched. An existing entry for the same user is replaced
    /// (last-connection-wins); dropping the replaced handle force-closes
    /// the prior socket's pump.
    pub async fn execute(
        &self,
        user_id: UserId,
        handle: ConnectionHandle,
    ) -> Result<UserRecord, BindError> {
        let record = self
            .directory
            .lookup_user(user_id)
            .await?
            .ok_or(BindError::UnknownUser(user_id))?;

        self.registry.register(user_id, handle).await;
        tracing::info!("User {} ('{}') bound to a connection", user_id, record.username);

        Ok(record)
    }
}
