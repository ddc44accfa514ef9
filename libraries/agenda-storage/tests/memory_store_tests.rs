//! Tests for the in-memory store used as a test double
//!
//! The fake has to behave like the SQLite store for the properties callers
//! rely on, or tests written against it prove nothing.

use agenda_core::types::{Avatar, UserId, UserRecord};
use agenda_core::UserStore;
use agenda_storage::users::seed_records;
use agenda_storage::MemoryUserStore;

#[tokio::test]
async fn starts_with_no_blob_and_loads_empty() {
    let store = MemoryUserStore::new();

    assert_eq!(store.raw_blob().await, None);
    assert!(store.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn round_trips_through_the_serialized_form() {
    let store = MemoryUserStore::new();

    let records = vec![UserRecord {
        id: UserId::new("1"),
        name: "Ana".to_string(),
        email: "ana@x.com".to_string(),
        avatar: Avatar::classify("🦊"),
    }];
    store.save_all(&records).await.unwrap();

    assert_eq!(store.load_all().await.unwrap(), records);
    assert!(store.raw_blob().await.unwrap().contains("avatarUrl"));
}

#[tokio::test]
async fn seeds_at_most_once() {
    let store = MemoryUserStore::new();

    assert!(store.ensure_seeded().await.unwrap());
    assert!(!store.ensure_seeded().await.unwrap());
    assert_eq!(store.load_all().await.unwrap(), seed_records());
}

#[tokio::test]
async fn an_explicit_empty_save_blocks_seeding() {
    let store = MemoryUserStore::new();

    store.save_all(&[]).await.unwrap();

    assert!(!store.ensure_seeded().await.unwrap());
    assert!(store.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn corrupt_blob_errors_like_the_real_store() {
    let store = MemoryUserStore::new();
    store.set_raw_blob("{{{").await;

    assert!(store.load_all().await.is_err());
    assert_eq!(store.raw_blob().await, Some("{{{".to_string()));
}
