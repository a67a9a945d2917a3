//! Author table handlers: the page action and the page carrying the shortcode.

use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::config::CONFIG;
use crate::constants::{CODE_NOT_FOUND, ERR_RESOURCE_NOT_FOUND, MSG_AUTHORS_PAGE_LOADED};
use crate::errors::ApiError;
use crate::models::{AuthorsPageResponse, LoadAuthorsPageForm};
use crate::services::AuthorTableService;
use crate::validators::parse_page_request;
use crate::views;

/// Load one page of the author table
///
/// Returns fresh table and pagination markup for the requested page and page
/// size. Pages past the end render an empty table.
#[utoipa::path(
    post,
    path = "/api/authors/page",
    tag = "Authors",
    request_body(
        content = LoadAuthorsPageForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Table and pagination fragments", body = AuthorsPageResponse),
        (status = 400, description = "Invalid page size or unknown action", body = crate::models::ErrorResponse),
        (status = 500, description = "Author store unavailable", body = crate::models::ErrorResponse)
    )
)]
pub async fn load_authors_page(
    author_table: web::Data<AuthorTableService>,
    form: web::Form<LoadAuthorsPageForm>,
) -> Result<HttpResponse, ApiError> {
    let request = parse_page_request(&form)?;
    debug!(
        "Loading authors page {} ({} per page)",
        request.page(),
        request.page_size().get()
    );

    let fragments = author_table.load_page(request).await?;

    Ok(HttpResponse::Ok().json(AuthorsPageResponse::success(
        MSG_AUTHORS_PAGE_LOADED,
        fragments,
    )))
}

/// Render the configured page content with shortcodes expanded.
pub async fn index(author_table: web::Data<AuthorTableService>) -> Result<HttpResponse, ApiError> {
    let content = author_table.render_content(&CONFIG.page_content).await?;
    let page = views::render_index(&CONFIG.page_title, &content)?;

    info!("Rendered author page");
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page))
}

/// Fallback for unknown routes.
pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound {
        code: CODE_NOT_FOUND.to_string(),
        message: ERR_RESOURCE_NOT_FOUND.to_string(),
    })
}
