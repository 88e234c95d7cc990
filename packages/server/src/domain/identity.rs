//! Identity binding port.
//!
//! Binding a connection to a user identity is pluggable so the trusting
//! query-parameter variant and a session-backed resolver can be swapped
//! without touching the connection lifecycle.

use async_trait::async_trait;

use super::error::BindError;
use super::user::UserId;

/// Out-of-band context supplied with a connection attempt.
#[derive(Debug, Clone, Default)]
pub struct ConnectParams {
    /// Raw `user_id` connection parameter, if any.
    pub user_id: Option<String>,
}

/// Resolves a connection attempt to a user identifier.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, params: &ConnectParams) -> Result<UserId, BindError>;
}
