//! In-memory user directory.
//!
//! Roster-backed implementation of the `UserDirectory` port. The roster
//! is fixed at startup: either loaded from a JSON file or seeded with
//! the built-in demo users. Registration and credential handling live
//! outside this server.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::{DirectoryError, UserDirectory, UserId, UserRecord};

/// In-memory `UserDirectory` implementation.
pub struct InMemoryUserDirectory {
    users: HashMap<UserId, UserRecord>,
}

impl InMemoryUserDirectory {
    pub fn new(users: Vec<UserRecord>) -> Self {
        let users = users.into_iter().map(|user| (user.id, user)).collect();
        Self { users }
    }

    /// Load a roster from a JSON file containing an array of user records.
    pub fn from_json_file(path: &Path) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DirectoryError::Unavailable(format!("{}: {}", path.display(), e)))?;
        let users: Vec<UserRecord> = serde_json::from_str(&raw)
            .map_err(|e| DirectoryError::Unavailable(format!("{}: {}", path.display(), e)))?;
        Ok(Self::new(users))
    }

    /// Built-in demo roster for running the server without a roster file.
    pub fn with_demo_users() -> Self {
        Self::new(vec![
            UserRecord {
                id: UserId::new(1),
                username: "alice".to_string(),
                name: "Alice".to_string(),
                avatar: None,
            },
            UserRecord {
                id: UserId::new(2),
                username: "bob".to_string(),
                name: "Bob".to_string(),
                avatar: None,
            },
        ])
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn lookup_user(&self, id: UserId) -> Result<Option<UserRecord>, DirectoryError> {
        Ok(self.users.get(&id).cloned())
    }

    async fn lookup_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, DirectoryError> {
        Ok(self
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, DirectoryError> {
        let mut users: Vec<UserRecord> = self.users.values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_directory() -> InMemoryUserDirectory {
        InMemoryUserDirectory::new(vec![
            UserRecord {
                id: UserId::new(1),
                username: "alice".to_string(),
                name: "Alice".to_string(),
                avatar: None,
            },
            UserRecord {
                id: UserId::new(2),
                username: "Bob".to_string(),
                name: "Bob".to_string(),
                avatar: Some("https://example.com/bob.png".to_string()),
            },
        ])
    }

    #[tokio::test]
    async fn test_lookup_user_by_id() {
        // given:
        let directory = create_test_directory();

        // when:
        let found = directory.lookup_user(UserId::new(1)).await.unwrap();
        let missing = directory.lookup_user(UserId::new(9)).await.unwrap();

        // then:
        assert_eq!(found.unwrap().username, "alice");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_lookup_by_username_is_exact() {
        // given: a roster with a capitalized username
        let directory = create_test_directory();

        // when:
        let exact = directory.lookup_by_username("Bob").await.unwrap();
        let lowercase = directory.lookup_by_username("bob").await.unwrap();

        // then: lookups match stored casing only
        assert_eq!(exact.unwrap().id, UserId::new(2));
        assert!(lowercase.is_none());
    }

    #[tokio::test]
    async fn test_list_users_sorted_by_username() {
        // given:
        let directory = create_test_directory();

        // when:
        let users = directory.list_users().await.unwrap();

        // then:
        let usernames: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(usernames, vec!["Bob", "alice"]);
    }

    #[test]
    fn test_from_json_file_rejects_missing_file() {
        // given / when:
        let result = InMemoryUserDirectory::from_json_file(Path::new("/nonexistent/users.json"));

        // then:
        assert!(result.is_err());
    }
}
