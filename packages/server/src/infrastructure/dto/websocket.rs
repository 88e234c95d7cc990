//! WebSocket frame DTOs.
//!
//! Every outbound frame is a JSON object tagged by a `type` field.
//! Inbound frames carry only `content`; the sender identity always comes
//! from the bound connection, never from the payload.

use serde::{Deserialize, Serialize};

use crate::domain::{PresenceEntry, PresenceStatus, RoutedMessage, UserRecord};

/// Discriminator value for outbound frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameType {
    ConnectionSuccess,
    Message,
    UserStatus,
    Error,
}

/// Inbound chat payload from a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientFrame {
    pub content: String,
}

/// Sent once per successful identity bind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionSuccessFrame {
    pub r#type: FrameType,
    pub message: String,
}

impl ConnectionSuccessFrame {
    pub fn new(user: &UserRecord) -> Self {
        Self {
            r#type: FrameType::ConnectionSuccess,
            message: format!("Connected as {}", user.username),
        }
    }
}

/// A chat message event delivered to its audience.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageFrame {
    pub r#type: FrameType,
    pub content: String,
    pub user_id: i64,
    pub username: String,
    pub name: String,
    /// Unix timestamp in milliseconds (UTC)
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_username: Option<String>,
}

impl MessageFrame {
    /// Build the outbound event for a routed, persisted message.
    pub fn from_routed(routed: &RoutedMessage, sender: &UserRecord, timestamp: i64) -> Self {
        let (is_private, recipient_id, recipient_username) = match &routed.recipient {
            Some(recipient) => (
                Some(true),
                Some(recipient.id.value()),
                Some(recipient.username.clone()),
            ),
            None => (None, None, None),
        };
        Self {
            r#type: FrameType::Message,
            content: routed.content.clone(),
            user_id: sender.id.value(),
            username: sender.username.clone(),
            name: sender.name.clone(),
            timestamp,
            is_private,
            recipient_id,
            recipient_username,
        }
    }
}

/// One user's row in a `user_status` frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatusEntry {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub status: PresenceStatus,
}

/// Presence snapshot pushed to every connection on membership changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatusFrame {
    pub r#type: FrameType,
    pub users: Vec<UserStatusEntry>,
}

impl UserStatusFrame {
    pub fn from_snapshot(snapshot: &[PresenceEntry]) -> Self {
        Self {
            r#type: FrameType::UserStatus,
            users: snapshot
                .iter()
                .map(|entry| UserStatusEntry {
                    id: entry.user.id.value(),
                    username: entry.user.username.clone(),
                    name: entry.user.name.clone(),
                    status: entry.status,
                })
                .collect(),
        }
    }
}

/// Machine-discriminable error report to one connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorFrame {
    pub r#type: FrameType,
    pub error: String,
}

impl ErrorFrame {
    pub fn new(reason: &str) -> Self {
        Self {
            r#type: FrameType::Error,
            error: reason.to_string(),
        }
    }
}
