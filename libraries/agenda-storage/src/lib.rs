//! Agenda Storage
//!
//! Device-local `SQLite` persistence layer for Agenda.
//!
//! Data is stored as key-value pairs with JSON-serialized values; the whole
//! user record collection is a single value under one key, and every mutation
//! rewrites that value as one blob. There is no per-record storage.
//!
//! # Example
//!
//! ```rust,no_run
//! use agenda_storage::{create_pool, run_migrations, SqliteUserStore};
//! use agenda_core::UserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://agenda.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteUserStore::new(pool);
//! store.ensure_seeded().await?;
//! let users = store.load_all().await?;
//! # Ok(())
//! # }
//! ```

mod error;

pub mod kv;
pub mod memory;
pub mod users;

pub use error::StorageError;
pub use memory::MemoryUserStore;
pub use users::SqliteUserStore;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://agenda.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("creating pool for {database_url}");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
