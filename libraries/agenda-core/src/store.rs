//! Storage seam for the persisted user collection

use crate::error::Result;
use crate::types::UserRecord;
use async_trait::async_trait;

/// Repository over the single persisted collection of user records.
///
/// The whole ordered collection is the unit of persistence: there is no
/// partial-update primitive, and every mutation is expressed as
/// load-all / transform in memory / save-all. Implementations exist for
/// `SQLite` and for an in-memory fake used in tests.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Load the full ordered collection.
    ///
    /// Returns an empty sequence when nothing has ever been persisted. A
    /// corrupt blob is an error and leaves the stored bytes untouched.
    async fn load_all(&self) -> Result<Vec<UserRecord>>;

    /// Serialize the full sequence and overwrite the persisted blob.
    async fn save_all(&self, records: &[UserRecord]) -> Result<()>;

    /// On first-ever run (no existing blob), write the example records.
    ///
    /// Never overwrites an existing blob, not even an empty one. Returns
    /// whether seeding happened.
    async fn ensure_seeded(&self) -> Result<bool>;
}
