//! Pagination constants for the author table.

/// Page sizes offered by the per-page selector.
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [10, 15, 20];

/// Default number of authors per page when not specified in the request.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default starting page number.
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

/// Numbered controls shown on each side of the current page.
pub const PAGE_WINDOW_RADIUS: i64 = 2;

/// Action name sent by the browser script.
pub const ACTION_LOAD_AUTHORS_PAGE: &str = "load_authors_page";

/// Endpoint the browser script posts to.
pub const AUTHORS_PAGE_ENDPOINT: &str = "/api/authors/page";
