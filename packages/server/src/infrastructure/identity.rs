//! Query-parameter identity resolver.
//!
//! The simplified binding strategy: trust the `user_id` connection
//! parameter supplied by the client. A session-backed resolver can
//! implement the same port to close the spoofing hole without touching
//! the connection lifecycle.

use async_trait::async_trait;

use crate::domain::{BindError, ConnectParams, IdentityResolver, UserId};

/// `IdentityResolver` that parses the `user_id` query parameter.
pub struct QueryIdentityResolver;

#[async_trait]
impl IdentityResolver for QueryIdentityResolver {
    async fn resolve(&self, params: &ConnectParams) -> Result<UserId, BindError> {
        let raw = params.user_id.as_deref().ok_or(BindError::MissingIdentity)?;
        let id: i64 = raw
            .parse()
            .map_err(|_| BindError::InvalidIdentity(raw.to_string()))?;
        Ok(UserId::new(id))
    }
}
