//! Agenda Core
//!
//! Platform-agnostic domain types, traits, and error handling for Agenda.
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord`, `Avatar`, `UserId`
//! - **Storage Seam**: the `UserStore` trait over the persisted collection
//! - **Error Handling**: unified `AgendaError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use agenda_core::types::{Avatar, UserRecord};
//!
//! let record = UserRecord::new("Ana", "ana@x.com", Avatar::classify("🐱"));
//! assert_eq!(record.avatar, Avatar::Glyph("🐱".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{AgendaError, Result};
pub use store::UserStore;
pub use types::{Avatar, UserId, UserRecord};
