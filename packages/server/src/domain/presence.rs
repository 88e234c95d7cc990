//! Presence snapshots.
//!
//! Pure functions deriving online/offline status from registry
//! membership, in the same spirit as the other side-effect-free domain
//! logic in this layer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::user::{UserId, UserRecord};

/// Online/offline status of one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    Online,
    Offline,
}

/// One user's entry in a presence snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PresenceEntry {
    pub user: UserRecord,
    pub status: PresenceStatus,
}

/// Build a point-in-time presence snapshot.
///
/// Every user known to the directory appears exactly once, regardless of
/// connection state; status is `Online` iff the registry holds a live
/// bound connection for that id. Entries are sorted by username for
/// consistent ordering.
pub fn build_presence_snapshot(
    users: Vec<UserRecord>,
    online_ids: &HashSet<UserId>,
) -> Vec<PresenceEntry> {
    let mut entries: Vec<PresenceEntry> = users
        .into_iter()
        .map(|user| {
            let status = if online_ids.contains(&user.id) {
                PresenceStatus::Online
            } else {
                PresenceStatus::Offline
            };
            PresenceEntry { user, status }
        })
        .collect();

    entries.sort_by(|a, b| a.user.username.cmp(&b.user.username));

    entries
}
