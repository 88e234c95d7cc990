//! Shared application state for the axum handlers.

use std::sync::Arc;

use crate::domain::{IdentityResolver, MessageStore, UserDirectory};
use crate::usecase::{
    BroadcastPresenceUseCase, ConnectUserUseCase, DisconnectUserUseCase, SendMessageUseCase,
};

/// Shared application state
pub struct AppState {
    pub connect_user_usecase: Arc<ConnectUserUseCase>,
    pub disconnect_user_usecase: Arc<DisconnectUserUseCase>,
    pub send_message_usecase: Arc<SendMessageUseCase>,
    pub broadcast_presence_usecase: Arc<BroadcastPresenceUseCase>,
    /// Pluggable identity binding strategy
    pub identity_resolver: Arc<dyn IdentityResolver>,
    /// Collaborators consumed directly by the REST handlers
    pub directory: Arc<dyn UserDirectory>,
    pub store: Arc<dyn MessageStore>,
}
