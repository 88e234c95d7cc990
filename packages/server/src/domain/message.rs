//! Message records exchanged with the persistence port.

use serde::{Deserialize, Serialize};

use super::user::UserId;

/// A message to append to the external store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub sender_id: UserId,
    pub content: String,
    pub is_private: bool,
    pub recipient_id: Option<UserId>,
}

/// A persisted message as returned by the external store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: i64,
    pub sender_id: UserId,
    pub content: String,
    pub is_private: bool,
    pub recipient_id: Option<UserId>,
    /// Unix timestamp in milliseconds (UTC)
    pub created_at: i64,
}

impl StoredMessage {
    /// Whether `viewer` is allowed to read this record.
    ///
    /// Public messages are visible to everyone; private records only to
    /// their sender and recipient.
    pub fn visible_to(&self, viewer: Option<UserId>) -> bool {
        if !self.is_private {
            return true;
        }
        match viewer {
            Some(id) => self.sender_id == id || self.recipient_id == Some(id),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(is_private: bool, sender: i64, recipient: Option<i64>) -> StoredMessage {
        StoredMessage {
            id: 1,
            sender_id: UserId::new(sender),
            content: "hi".to_string(),
            is_private,
            recipient_id: recipient.map(UserId::new),
            created_at: 1000,
        }
    }

    #[test]
    fn test_public_message_visible_to_anyone() {
        // given:
        let message = stored(false, 1, None);

        // then:
        assert!(message.visible_to(None));
        assert!(message.visible_to(Some(UserId::new(99))));
    }

    #[test]
    fn test_private_message_visible_to_participants_only() {
        // given:
        let message = stored(true, 1, Some(2));

        // then:
        assert!(message.visible_to(Some(UserId::new(1))));
        assert!(message.visible_to(Some(UserId::new(2))));
        assert!(!message.visible_to(Some(UserId::new(3))));
        assert!(!message.visible_to(None));
    }
}
