//! Services organized by domain concern.

pub mod author_table_service;
pub mod pagination;
pub mod shortcode;

pub use author_table_service::AuthorTableService;
