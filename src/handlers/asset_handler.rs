//! Static assets for the author table: the browser script and stylesheet.

use actix_web::http::header;
use actix_web::HttpResponse;

const AUTHOR_TABLE_SCRIPT: &str = include_str!("../../assets/js/author-table-script.js");
const AUTHOR_TABLE_STYLES: &str = include_str!("../../assets/css/author-table-styles.css");

const CACHE_CONTROL: &str = "public, max-age=3600";

/// Browser script that swaps table and pagination fragments in place.
pub async fn author_table_script() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, CACHE_CONTROL))
        .body(AUTHOR_TABLE_SCRIPT)
}

pub async fn author_table_styles() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, CACHE_CONTROL))
        .body(AUTHOR_TABLE_STYLES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn test_script_served_as_javascript() {
        let app = test::init_service(
            App::new().route("/script.js", web::get().to(author_table_script)),
        )
        .await;
        let req = test::TestRequest::get().uri("/script.js").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("application/javascript"));

        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("authors-per-page"));
    }

    #[actix_web::test]
    async fn test_styles_served_as_css() {
        let app = test::init_service(
            App::new().route("/styles.css", web::get().to(author_table_styles)),
        )
        .await;
        let req = test::TestRequest::get().uri("/styles.css").to_request();
        let resp = test::call_service(&app, req).await;

        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/css"));
        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains(".ait-pagination"));
    }
}
