//! Key-value storage
//!
//! The generic persistence surface of the app: string keys mapped to
//! JSON-serialized string values in a single `SQLite` table. Higher layers
//! decide what lives under each key; this module only reads and overwrites
//! whole values.

use sqlx::{Row, SqlitePool};

use crate::error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Get a value by key
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `key` - Storage key
///
/// # Returns
///
/// Returns `Ok(Some(value))` if the key exists, `Ok(None)` if not found
///
/// # Errors
///
/// Returns an error if the database query fails
pub async fn get(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(row.try_get::<String, _>("value")?)),
        None => Ok(None),
    }
}

/// Set a value, overwriting any existing value under the key
///
/// # Errors
///
/// Returns an error if the database query fails
pub async fn set(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a value by key
///
/// # Returns
///
/// Returns `Ok(true)` if a value was deleted, `Ok(false)` if the key was
/// not present
///
/// # Errors
///
/// Returns an error if the database query fails
pub async fn delete(pool: &SqlitePool, key: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM kv_store WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
