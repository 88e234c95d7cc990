//! Domain layer: core types, pure logic, and the ports the use cases
//! depend on. Concrete adapters live in the infrastructure layer.

mod broadcast;
mod connection;
mod error;
mod identity;
mod message;
mod presence;
mod registry;
mod repository;
mod routing;
mod user;

pub use broadcast::{Audience, EventBroadcaster};
pub use connection::{ConnectionHandle, ConnectionId, PeerSender};
pub use error::{BindError, DeliveryError, DirectoryError, StoreError, ValidationError};
pub use identity::{ConnectParams, IdentityResolver};
pub use message::{NewMessage, StoredMessage};
pub use presence::{PresenceEntry, PresenceStatus, build_presence_snapshot};
pub use registry::ConnectionRegistry;
pub use repository::{MessageStore, UserDirectory};
pub use routing::{Recipient, RoutedMessage, split_private_prefix};
pub use user::{UserId, UserRecord};

#[cfg(test)]
pub use repository::{MockMessageStore, MockUserDirectory};
