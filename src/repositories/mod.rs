//! Repository layer for reading author records.
//!
//! The author table only ever reads the full, ordered author list, so every
//! backend implements the single-method [`AuthorStore`] trait.

pub mod author_repository;
pub mod memory_author_store;

use futures::future::BoxFuture;

use crate::errors::ApiError;
use crate::models::Author;

pub use author_repository::AuthorRepository;
pub use memory_author_store::MemoryAuthorStore;

/// Read-only source of author records.
pub trait AuthorStore: Send + Sync {
    /// All authors, ordered by login.
    fn list_authors(&self) -> BoxFuture<'_, Result<Vec<Author>, ApiError>>;
}
