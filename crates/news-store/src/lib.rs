//! # news-store
//!
//! In-memory record management for Newsroom.
//!
//! Holds one ordered [`RecordStore`](store::RecordStore) per editable entity
//! kind (users, sources, glossary terms, AI models), the read-only article
//! catalog, and the reader's bookmarks. Everything is seeded from fixtures
//! embedded at compile time; nothing here touches disk.
//!
//! Mutations go through the entity editor (`editor`) which validates a typed
//! form and then replaces or appends a whole record. There is no partial
//! update path. Deletions go through a [`PendingDeletion`](deletion::PendingDeletion)
//! that must be confirmed.

pub mod bookmarks;
pub mod catalog;
pub mod deletion;
pub mod editor;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod service;
pub mod store;

pub use error::StoreError;
pub use service::NewsService;
pub use store::{RecordStore, SaveOutcome};
