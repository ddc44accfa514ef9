//! User record collection storage
//!
//! The full collection of user records is persisted as one JSON array under
//! the single key `"users"`. Reads deserialize the whole blob, writes
//! serialize and overwrite it; there is no per-record access path.

use agenda_core::error::Result;
use agenda_core::types::{Avatar, UserId, UserRecord};
use agenda_core::UserStore;
use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::kv;

/// Storage key holding the serialized user collection
pub const USERS_KEY: &str = "users";

/// Example records written on first-ever run
pub fn seed_records() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: UserId::new("1"),
            name: "Rosana Albuquerque".to_string(),
            email: "rosana@email.com".to_string(),
            avatar: Avatar::classify(
                "https://cdn.pixabay.com/photo/2016/11/18/23/38/child-1837375_960_720.png",
            ),
        },
        UserRecord {
            id: UserId::new("2"),
            name: "Ranata".to_string(),
            email: "renata@email.com".to_string(),
            avatar: Avatar::classify("🐱"),
        },
        UserRecord {
            id: UserId::new("3"),
            name: "Thomaz".to_string(),
            email: "riana@email.com".to_string(),
            avatar: Avatar::classify(
                "https://cdn.pixabay.com/photo/2016/11/29/13/14/attractive-1868314_960_720.jpg",
            ),
        },
    ]
}

/// `SQLite`-backed implementation of [`UserStore`]
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    /// Create a store over an open pool (migrations already applied)
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn load_all(&self) -> Result<Vec<UserRecord>> {
        let blob = kv::get(&self.pool, USERS_KEY)
            .await
            .map_err(agenda_core::AgendaError::from)?;

        match blob {
            Some(blob) => {
                let records: Vec<UserRecord> = serde_json::from_str(&blob)?;
                Ok(records)
            }
            None => Ok(Vec::new()),
        }
    }

    async fn save_all(&self, records: &[UserRecord]) -> Result<()> {
        let blob = serde_json::to_string(records)?;
        kv::set(&self.pool, USERS_KEY, &blob)
            .await
            .map_err(agenda_core::AgendaError::from)?;
        Ok(())
    }

    async fn ensure_seeded(&self) -> Result<bool> {
        let existing = kv::get(&self.pool, USERS_KEY)
            .await
            .map_err(agenda_core::AgendaError::from)?;
        if existing.is_some() {
            return Ok(false);
        }

        self.save_all(&seed_records()).await?;
        tracing::info!("seeded example user records");
        Ok(true)
    }
}
