//! Author table service composing the author store with the renderers.

use std::sync::Arc;

use log::debug;

use crate::errors::ApiError;
use crate::models::AuthorsPageFragments;
use crate::repositories::AuthorStore;
use crate::services::pagination::PageRequest;
use crate::services::shortcode::{contains_shortcode, expand_shortcodes};
use crate::views;

/// Renders author table markup from a shared author store.
///
/// Holds no per-viewer state; page and page size travel with every call.
pub struct AuthorTableService {
    store: Arc<dyn AuthorStore>,
}

impl AuthorTableService {
    pub fn new(store: Arc<dyn AuthorStore>) -> Self {
        Self { store }
    }

    /// Table and pagination fragments for one page.
    pub async fn load_page(&self, request: PageRequest) -> Result<AuthorsPageFragments, ApiError> {
        let authors = self.store.list_authors().await?;
        debug!(
            "Rendering page {} of {} authors at {} per page",
            request.page(),
            authors.len(),
            request.page_size().get()
        );

        Ok(views::render_fragments(&authors, request)?)
    }

    /// Shortcode markup: first page at the default page size.
    pub async fn render_shortcode(&self) -> Result<String, ApiError> {
        let authors = self.store.list_authors().await?;
        Ok(views::render_shortcode(&authors, PageRequest::default())?)
    }

    /// Expand shortcodes in page content. The store is only queried when the
    /// content actually contains the tag.
    pub async fn render_content(&self, content: &str) -> Result<String, ApiError> {
        if !contains_shortcode(content) {
            return Ok(content.to_string());
        }

        let markup = self.render_shortcode().await?;
        Ok(expand_shortcodes(content, &markup))
    }
}
