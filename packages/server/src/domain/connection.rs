//! Live connection types.
//!
//! A connection is created when a socket is accepted, bound to a user
//! identity on successful authentication, and destroyed on socket close
//! or replacement. The registry owns the handle for its lifetime.

use tokio::sync::mpsc;
use uuid::Uuid;

/// Channel for pushing serialized frames to one connection's socket pump.
pub type PeerSender = mpsc::UnboundedSender<String>;

/// Opaque identifier of one live socket connection.
///
/// Distinguishes a connection from its successor when the same user
/// reconnects: teardown of a replaced connection must not evict the
/// replacement from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to one live, bound connection.
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    pub id: ConnectionId,
    pub sender: PeerSender,
}

impl ConnectionHandle {
    pub fn new(sender: PeerSender) -> Self {
        Self {
            id: ConnectionId::generate(),
            sender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_ids_are_unique() {
        // given / when:
        let a = ConnectionId::generate();
        let b = ConnectionId::generate();

        // then:
        assert_ne!(a, b);
    }

    #[test]
    fn test_handle_keeps_sender_usable() {
        // given:
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = ConnectionHandle::new(tx);

        // when:
        handle.sender.send("frame".to_string()).unwrap();

        // then:
        assert_eq!(rx.try_recv().unwrap(), "frame");
    }
}
