//! Author table request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::validate_page_size;

/// Raw form payload posted by the browser script.
///
/// Values arrive as text and are coerced to integers the lenient way:
/// anything non-numeric becomes 0.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoadAuthorsPageForm {
    /// Action name, `load_authors_page` when present
    #[schema(example = "load_authors_page")]
    pub action: Option<String>,
    /// Requested page (default: 1)
    #[schema(example = "2")]
    pub page: Option<String>,
    /// Authors per page: 10, 15 or 20 (default: 10)
    #[schema(example = "15")]
    pub per_page: Option<String>,
}

/// Coerced page request, ready for validation.
///
/// `page` is already clamped to at least 1 when the query is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct AuthorsPageQuery {
    pub page: u32,
    #[validate(custom(function = "validate_page_size"))]
    pub per_page: u32,
}
