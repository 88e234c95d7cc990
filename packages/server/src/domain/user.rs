//! User identity types.
//!
//! The realtime core never mutates user data; records are read-only
//! context fetched from the external user directory and attached to
//! outbound events.

use serde::{Deserialize, Serialize};

/// Numeric identifier of a user known to the user directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display attributes of a user, as stored in the user directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    /// Display name shown alongside messages
    pub name: String,
    /// Optional avatar URL from profile customization
    #[serde(default)]
    pub avatar: Option<String>,
}
