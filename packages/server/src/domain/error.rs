//! Domain error types.

use thiserror::Error;

use super::user::UserId;

/// Inbound payload rejected before routing.
///
/// Recoverable: reported to the originating connection as an `error`
/// frame; the connection stays open.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("message content must be a non-empty string")]
    MalformedPayload,
}

/// Identity binding failed while establishing a connection.
///
/// Fatal to the connection: the socket is closed with a reason code and
/// the server does not retry.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("no user identifier supplied")]
    MissingIdentity,
    #[error("user identifier '{0}' is not a valid id")]
    InvalidIdentity(String),
    #[error("user {0} is not known to the user directory")]
    UnknownUser(UserId),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Targeted delivery to a single connection failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeliveryError {
    #[error("user {0} has no live connection")]
    NotConnected(UserId),
    #[error("outbound channel for user {0} is closed")]
    ChannelClosed(UserId),
}

/// The external user directory could not be reached.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DirectoryError {
    #[error("user directory unavailable: {0}")]
    Unavailable(String),
}

/// The external message store could not be reached.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("message store unavailable: {0}")]
    Unavailable(String),
}
