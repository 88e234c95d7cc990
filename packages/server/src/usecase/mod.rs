//! Use case layer: one orchestration struct per realtime operation,
//! each depending only on the domain ports.

mod broadcast_presence;
mod connect_user;
mod disconnect_user;
mod error;
mod send_message;

pub use broadcast_presence::BroadcastPresenceUseCase;
pub use connect_user::ConnectUserUseCase;
pub use disconnect_user::DisconnectUserUseCase;
pub use error::SendMessageError;
pub use send_message::SendMessageUseCase;
