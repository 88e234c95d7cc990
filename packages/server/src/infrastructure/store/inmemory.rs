//! In-memory message store.
//!
//! Implements the `MessageStore` port with a mutex-guarded vector and
//! monotonically increasing ids. Timestamps come from the injected
//! `Clock` so tests can pin them.

use std::sync::Arc;

use async_trait::async_trait;
use parlor_shared::time::Clock;
use tokio::sync::Mutex;

use crate::domain::{MessageStore, NewMessage, StoreError, StoredMessage, UserId};

/// In-memory `MessageStore` implementation.
pub struct InMemoryMessageStore {
    clock: Arc<dyn Clock>,
    messages: Mutex<Vec<StoredMessage>>,
}

impl InMemoryMessageStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            messages: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn create_message(&self, message: NewMessage) -> Result<StoredMessage, StoreError> {
        let mut messages = self.messages.lock().await;
        let stored = StoredMessage {
            id: messages.len() as i64 + 1,
            sender_id: message.sender_id,
            content: message.content,
            is_private: message.is_private,
            recipient_id: message.recipient_id,
            created_at: self.clock.now_millis(),
        };
        messages.push(stored.clone());
        tracing::debug!("Stored message {} from user {}", stored.id, stored.sender_id);
        Ok(stored)
    }

    async fn get_messages(
        &self,
        limit: usize,
        viewer: Option<UserId>,
    ) -> Result<Vec<StoredMessage>, StoreError> {
        let messages = self.messages.lock().await;
        let visible: Vec<StoredMessage> = messages
            .iter()
            .filter(|message| message.visible_to(viewer))
            .cloned()
            .collect();
        let skip = visible.len().saturating_sub(limit);
        Ok(visible.into_iter().skip(skip).collect())
    }
}
