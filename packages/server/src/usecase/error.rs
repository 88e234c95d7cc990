//! Use case error types.

use thiserror::Error;

use crate::domain::{DirectoryError, StoreError, ValidationError};

/// Failure while validating, routing, or persisting an inbound message.
///
/// All variants are recoverable for the connection: the reason is
/// reported back to the originating client as an `error` frame and the
/// session continues.
#[derive(Debug, Error)]
pub enum SendMessageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to resolve recipient: {0}")]
    Lookup(#[from] DirectoryError),
    #[error("failed to persist message: {0}")]
    Persistence(#[from] StoreError),
}

impl SendMessageError {
    /// Stable reason string for the wire-level `error` frame.
    pub fn reason(&self) -> &'static str {
        match self {
            SendMessageError::Validation(_) => "malformed_payload",
            SendMessageError::Lookup(_) => "lookup_failed",
            SendMessageError::Persistence(_) => "persistence_failed",
        }
    }
}
