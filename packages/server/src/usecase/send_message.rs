//! UseCase: validate, route, and persist an inbound chat payload.
//!
//! A message is persisted before it is ever broadcast, so the live view
//! never shows an event that history is missing.

use std::sync::Arc;

use crate::domain::{
    Audience, EventBroadcaster, MessageStore, NewMessage, Recipient, RoutedMessage, StoredMessage,
    UserDirectory, UserId, UserRecord, ValidationError, split_private_prefix,
};

use super::error::SendMessageError;

/// Orchestrates the inbound message pipeline for one payload.
pub struct SendMessageUseCase {
    directory: Arc<dyn UserDirectory>,
    store: Arc<dyn MessageStore>,
    broadcaster: Arc<dyn EventBroadcaster>,
}

impl SendMessageUseCase {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        store: Arc<dyn MessageStore>,
        broadcaster: Arc<dyn EventBroadcaster>,
    ) -> Self {
        Self {
            directory,
            store,
            broadcaster,
        }
    }

    /// Validate and route the payload, then persist it.
    ///
    /// Returns the routed message together with the stored record; the
    /// caller builds the outbound frame from both and hands it to
    /// [`SendMessageUseCase::deliver`].
    pub async fn execute(
        &self,
        sender: &UserRecord,
        raw_content: &str,
    ) -> Result<(RoutedMessage, StoredMessage), SendMessageError> {
        let content = raw_content.trim();
        if content.is_empty() {
            return Err(ValidationError::MalformedPayload.into());
        }

        let routed = self.route(sender.id, content).await?;

        let stored = self
            .store
            .create_message(NewMessage {
                sender_id: routed.sender_id,
                content: routed.content.clone(),
                is_private: routed.is_private(),
                recipient_id: routed.recipient.as_ref().map(|r| r.id),
            })
            .await?;

        tracing::debug!(
            "Message {} from user {} persisted (private: {})",
            stored.id,
            sender.id,
            routed.is_private()
        );

        Ok((routed, stored))
    }

    /// Deliver a serialized message frame to its audience.
    pub async fn deliver(&self, audience: &Audience, frame: &str) {
        self.broadcaster.broadcast(audience, frame).await;
    }

    /// Decide public vs. private routing for validated content.
    ///
    /// An `@token ` prefix is resolved against the directory, lowercase
    /// form first, then the original casing. A token that resolves to no
    /// known user is ordinary message text, not an error: the message
    /// stays public with the prefix intact.
    async fn route(
        &self,
        sender_id: UserId,
        content: &str,
    ) -> Result<RoutedMessage, SendMessageError> {
        let Some((token, rest)) = split_private_prefix(content) else {
            return Ok(RoutedMessage::public(sender_id, content.to_string()));
        };

        let mut resolved = self
            .directory
            .lookup_by_username(&token.to_lowercase())
            .await?;
        if resolved.is_none() {
            resolved = self.directory.lookup_by_username(token).await?;
        }

        match resolved {
            Some(recipient) => Ok(RoutedMessage::private(
                sender_id,
                rest.to_string(),
                Recipient {
                    id: recipient.id,
                    username: recipient.username,
                },
            )),
            None => Ok(RoutedMessage::public(sender_id, content.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockMessageStore, MockUserDirectory, StoreError};
    use crate::infrastructure::broadcast::ChannelBroadcaster;
    use crate::infrastructure::directory::InMemoryUserDirectory;
    use crate::infrastructure::registry::InMemoryConnectionRegistry;
    use crate::infrastructure::store::InMemoryMessageStore;
    use parlor_shared::time::FixedClock;

    fn alice() -> UserRecord {
        UserRecord {
            id: UserId::new(1),
            username: "alice".to_string(),
            name: "Alice".to_string(),
            avatar: None,
        }
    }

    fn create_test_usecase() -> (SendMessageUseCase, Arc<InMemoryMessageStore>) {
        let directory = Arc::new(InMemoryUserDirectory::with_demo_users());
        let store = Arc::new(InMemoryMessageStore::new(Arc::new(FixedClock::new(1000))));
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let broadcaster = Arc::new(ChannelBroadcaster::new(registry));
        (
            SendMessageUseCase::new(directory, store.clone(), broadcaster),
            store,
        )
    }

    #[tokio::test]
    async fn test_public_message_passes_through() {
        // given:
        let (usecase, _store) = create_test_usecase();

        // when:
        let (routed, stored) = usecase.execute(&alice(), "hello everyone").await.unwrap();

        // then:
        assert!(!routed.is_private());
        assert_eq!(routed.content, "hello everyone");
        assert_eq!(stored.sender_id, UserId::new(1));
        assert_eq!(stored.created_at, 1000);
    }

    #[tokio::test]
    async fn test_content_is_trimmed() {
        // given:
        let (usecase, _store) = create_test_usecase();

        // when:
        let (routed, _) = usecase.execute(&alice(), "  hello  ").await.unwrap();

        // then:
        assert_eq!(routed.content, "hello");
    }

    #[tokio::test]
    async fn test_empty_content_is_rejected() {
        // given:
        let (usecase, store) = create_test_usecase();

        // when:
        let result = usecase.execute(&alice(), "   ").await;

        // then: validation error and nothing persisted
        assert!(matches!(
            result,
            Err(SendMessageError::Validation(
                ValidationError::MalformedPayload
            ))
        ));
        assert!(store.get_messages(10, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mention_of_known_user_routes_private() {
        // given: bob is in the demo roster
        let (usecase, store) = create_test_usecase();

        // when:
        let (routed, _) = usecase.execute(&alice(), "@bob secret").await.unwrap();

        // then: private, content replaced by the remainder
        assert!(routed.is_private());
        let recipient = routed.recipient.as_ref().unwrap();
        assert_eq!(recipient.id, UserId::new(2));
        assert_eq!(recipient.username, "bob");
        assert_eq!(routed.content, "secret");

        // the record is persisted like any other message
        let history = store.get_messages(10, Some(UserId::new(2))).await.unwrap();
        assert_eq!(history.len(), 1);
        assert!(history[0].is_private);
        assert_eq!(history[0].recipient_id, Some(UserId::new(2)));
    }

    #[tokio::test]
    async fn test_mention_resolution_tries_lowercase_first() {
        // given:
        let (usecase, _store) = create_test_usecase();

        // when: the sender typed the username with different casing
        let (routed, _) = usecase.execute(&alice(), "@BoB secret").await.unwrap();

        // then: resolved via the lowercase lookup
        assert!(routed.is_private());
        assert_eq!(routed.recipient.unwrap().id, UserId::new(2));
    }

    #[tokio::test]
    async fn test_unknown_mention_falls_back_to_public() {
        // given:
        let (usecase, _store) = create_test_usecase();

        // when:
        let (routed, _) = usecase
            .execute(&alice(), "@nobody are you there?")
            .await
            .unwrap();

        // then: public, with the whole original text intact
        assert!(!routed.is_private());
        assert_eq!(routed.content, "@nobody are you there?");
    }

    #[tokio::test]
    async fn test_bare_mention_is_public() {
        // given:
        let (usecase, _store) = create_test_usecase();

        // when: a mention with no message body
        let (routed, _) = usecase.execute(&alice(), "@bob").await.unwrap();

        // then:
        assert!(!routed.is_private());
        assert_eq!(routed.content, "@bob");
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_persistence_error() {
        // given: a store that rejects every append
        let mut store = MockMessageStore::new();
        store
            .expect_create_message()
            .returning(|_| Err(StoreError::Unavailable("disk full".to_string())));
        let directory = Arc::new(InMemoryUserDirectory::with_demo_users());
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let broadcaster = Arc::new(ChannelBroadcaster::new(registry));
        let usecase = SendMessageUseCase::new(directory, Arc::new(store), broadcaster);

        // when:
        let result = usecase.execute(&alice(), "hello").await;

        // then:
        let err = result.unwrap_err();
        assert!(matches!(err, SendMessageError::Persistence(_)));
        assert_eq!(err.reason(), "persistence_failed");
    }

    #[tokio::test]
    async fn test_directory_failure_during_mention_resolution() {
        // given: a directory that errors on username lookups
        let mut directory = MockUserDirectory::new();
        directory.expect_lookup_by_username().returning(|_| {
            Err(crate::domain::DirectoryError::Unavailable(
                "connection refused".to_string(),
            ))
        });
        let store = Arc::new(InMemoryMessageStore::new(Arc::new(FixedClock::new(1000))));
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let broadcaster = Arc::new(ChannelBroadcaster::new(registry));
        let usecase = SendMessageUseCase::new(Arc::new(directory), store.clone(), broadcaster);

        // when:
        let result = usecase.execute(&alice(), "@bob secret").await;

        // then: surfaced as a lookup failure, nothing persisted
        let err = result.unwrap_err();
        assert_eq!(err.reason(), "lookup_failed");
        assert!(store.get_messages(10, None).await.unwrap().is_empty());
    }
}
