//! In-memory author store, optionally loaded from a JSON file.

use std::fs;
use std::path::Path;

use futures::future::{self, BoxFuture};
use futures::FutureExt;
use log::info;

use crate::errors::ApiError;
use crate::models::Author;
use crate::repositories::AuthorStore;

/// Fixed author list held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryAuthorStore {
    authors: Vec<Author>,
}

impl MemoryAuthorStore {
    /// Authors are kept ordered by login, matching the database store.
    pub fn new(mut authors: Vec<Author>) -> Self {
        authors.sort_by(|a, b| a.login.cmp(&b.login));
        Self { authors }
    }

    /// Load a JSON array of author records.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let authors: Vec<Author> = serde_json::from_str(&raw)?;
        info!("Loaded {} authors from {}", authors.len(), path.display());
        Ok(Self::new(authors))
    }
}

impl AuthorStore for MemoryAuthorStore {
    fn list_authors(&self) -> BoxFuture<'_, Result<Vec<Author>, ApiError>> {
        future::ready(Ok(self.authors.clone())).boxed()
    }
}
