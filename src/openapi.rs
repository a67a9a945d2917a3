use utoipa::OpenApi;

use crate::models::{
    AuthorsPageFragments, AuthorsPageResponse, ErrorResponse, HealthResponse, LoadAuthorsPageForm,
};

/// OpenAPI documentation for the Author Info Table API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Author Info Table API",
        version = "1.0.0",
        description = "Paginated author table rendered as HTML fragments for in-place page swaps.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Authors", description = "Author table page action")
    ),
    paths(
        crate::handlers::load_authors_page,
        crate::routes::health_check
    ),
    components(
        schemas(
            LoadAuthorsPageForm,
            AuthorsPageFragments,
            AuthorsPageResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
