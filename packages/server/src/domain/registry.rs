//! Connection registry port.
//!
//! The registry is the only mutable shared resource in the realtime core.
//! Implementations must serialize mutations against the membership reads
//! used for broadcast, so a broadcast never observes a connection
//! mid-teardown.

use async_trait::async_trait;

use super::connection::{ConnectionHandle, ConnectionId, PeerSender};
use super::user::UserId;

/// Maps a user identity to its live connection.
///
/// Registering a user that already has a connection replaces the prior
/// entry (last-connection-wins); dropping the replaced handle closes its
/// outbound channel, which ends the old socket's pump.
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Register a bound connection for a user, replacing any prior entry.
    async fn register(&self, user_id: UserId, handle: ConnectionHandle);

    /// Remove the user's entry if it still belongs to `connection_id`.
    ///
    /// Returns `true` when an entry was removed. A no-op (stale
    /// connection id, or the user is absent) returns `false`.
    async fn unregister(&self, user_id: UserId, connection_id: ConnectionId) -> bool;

    /// Whether the user has a live, bound connection.
    async fn is_online(&self, user_id: UserId) -> bool;

    /// Consistent snapshot of all registered connections, for broadcast.
    async fn connections(&self) -> Vec<(UserId, PeerSender)>;

    /// Identifiers of all currently-connected users.
    async fn online_user_ids(&self) -> Vec<UserId>;

    /// Number of registered connections.
    async fn count_connections(&self) -> usize;
}
