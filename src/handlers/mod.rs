//! HTTP request handlers organized by domain.

pub mod asset_handler;
pub mod author_handler;

pub use asset_handler::*;
pub use author_handler::*;
