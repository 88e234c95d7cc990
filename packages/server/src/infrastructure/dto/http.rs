//! HTTP response DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::{StoredMessage, UserRecord};

/// One persisted message in a history response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMessageDto {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<i64>,
    pub timestamp: i64,
}

impl From<StoredMessage> for StoredMessageDto {
    fn from(message: StoredMessage) -> Self {
        Self {
            id: message.id,
            user_id: message.sender_id.value(),
            content: message.content,
            is_private: message.is_private.then_some(true),
            recipient_id: message.recipient_id.map(|id| id.value()),
            timestamp: message.created_at,
        }
    }
}

/// One directory entry in a users response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<UserRecord> for UserDto {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id.value(),
            username: user.username,
            name: user.name,
            avatar: user.avatar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;

    #[test]
    fn test_stored_message_to_dto() {
        // given:
        let message = StoredMessage {
            id: 3,
            sender_id: UserId::new(1),
            content: "hello".to_string(),
            is_private: false,
            recipient_id: None,
            created_at: 1000,
        };

        // when:
        let dto: StoredMessageDto = message.into();
        let json = serde_json::to_string(&dto).unwrap();

        // then:
        assert!(json.contains(r#""userId":1"#));
        assert!(json.contains(r#""timestamp":1000"#));
        assert!(!json.contains("isPrivate"));
    }

    #[test]
    fn test_user_to_dto_keeps_avatar() {
        // given:
        let user = UserRecord {
            id: UserId::new(2),
            username: "bob".to_string(),
            name: "Bob".to_string(),
            avatar: Some("https://example.com/bob.png".to_string()),
        };

        // when:
        let dto: UserDto = user.into();

        // then:
        assert_eq!(dto.avatar.as_deref(), Some("https://example.com/bob.png"));
    }
}
