//! Author table response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Markup fragments swapped into the page by the browser script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorsPageFragments {
    /// Author table for the requested page
    #[schema(example = "<table class=\"author-info-table\">...</table>")]
    pub html: String,
    /// Pagination block
    #[schema(example = "<div class=\"ait-pagination\">...</div>")]
    pub pagination: String,
}

/// Success envelope returned by the page action
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorsPageResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Authors page loaded")]
    pub message: String,
    pub data: AuthorsPageFragments,
}

impl AuthorsPageResponse {
    pub fn success(message: &str, data: AuthorsPageFragments) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }
}
