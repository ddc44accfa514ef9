/// User record domain type
use serde::{Deserialize, Serialize};

use super::{Avatar, UserId};

/// One user profile entry
///
/// The persisted collection is a single ordered sequence of these records;
/// the wire/storage layout keeps the historical `avatarUrl` field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique, opaque, stable identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact e-mail (free-form, not validated)
    pub email: String,

    /// Avatar, stored as the raw `avatarUrl` string
    #[serde(rename = "avatarUrl")]
    pub avatar: Avatar,
}

impl UserRecord {
    /// Create a record with a freshly generated ID
    pub fn new(name: impl Into<String>, email: impl Into<String>, avatar: Avatar) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            avatar,
        }
    }
}
