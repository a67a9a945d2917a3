use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::constants::MSG_SERVER_RUNNING;
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;
use crate::views::{SCRIPT_URL, STYLESHEET_URL};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Page with the shortcode expanded
        .route("/", web::get().to(handlers::index))
        // Browser script and stylesheet
        .route(SCRIPT_URL, web::get().to(handlers::author_table_script))
        .route(STYLESHEET_URL, web::get().to(handlers::author_table_styles))
        // OpenAPI document
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        .service(
            web::scope("/api")
                // Health check
                .route("/health", web::get().to(health_check))
                // Page action used by the browser script
                .route("/authors/page", web::post().to(handlers::load_authors_page)),
        )
        .default_service(web::to(handlers::not_found));
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
