//! Collaborator ports for the external user directory and message store.
//!
//! The realtime core treats both as already safe for concurrent access;
//! use cases depend on these traits, and the infrastructure layer
//! provides the implementations (dependency inversion).

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::error::{DirectoryError, StoreError};
use super::message::{NewMessage, StoredMessage};
use super::user::{UserId, UserRecord};

/// Read-only lookup into the external user store.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch a user by identifier.
    async fn lookup_user(&self, id: UserId) -> Result<Option<UserRecord>, DirectoryError>;

    /// Fetch a user by exact username.
    async fn lookup_by_username(&self, username: &str)
    -> Result<Option<UserRecord>, DirectoryError>;

    /// List every known user.
    async fn list_users(&self) -> Result<Vec<UserRecord>, DirectoryError>;
}

/// Append/read access to the external message persistence layer.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Append a message; returns the stored record with id and timestamp.
    async fn create_message(&self, message: NewMessage) -> Result<StoredMessage, StoreError>;

    /// Read up to `limit` recent messages visible to `viewer`, oldest first.
    async fn get_messages(
        &self,
        limit: usize,
        viewer: Option<UserId>,
    ) -> Result<Vec<StoredMessage>, StoreError>;
}
