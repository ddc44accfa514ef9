//! In-memory user store
//!
//! Drop-in replacement for the `SQLite` store in tests. Keeps the serialized
//! blob, not the decoded records, so the round-trip behavior matches the real
//! backend, including the distinction between "never written" and an empty
//! collection.

use agenda_core::error::Result;
use agenda_core::types::UserRecord;
use agenda_core::UserStore;
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::users::seed_records;

/// In-memory implementation of [`UserStore`]
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    blob: Mutex<Option<String>>,
}

impl MemoryUserStore {
    /// Create an empty store with no persisted blob
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw serialized blob, if any has been written
    pub async fn raw_blob(&self) -> Option<String> {
        self.blob.lock().await.clone()
    }

    /// Overwrite the raw blob directly (corrupt-data test scenarios)
    pub async fn set_raw_blob(&self, blob: impl Into<String>) {
        *self.blob.lock().await = Some(blob.into());
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn load_all(&self) -> Result<Vec<UserRecord>> {
        match self.blob.lock().await.as_deref() {
            Some(blob) => {
                let records: Vec<UserRecord> = serde_json::from_str(blob)?;
                Ok(records)
            }
            None => Ok(Vec::new()),
        }
    }

    async fn save_all(&self, records: &[UserRecord]) -> Result<()> {
        let blob = serde_json::to_string(records)?;
        *self.blob.lock().await = Some(blob);
        Ok(())
    }

    async fn ensure_seeded(&self) -> Result<bool> {
        if self.blob.lock().await.is_some() {
            return Ok(false);
        }

        self.save_all(&seed_records()).await?;
        Ok(true)
    }
}
