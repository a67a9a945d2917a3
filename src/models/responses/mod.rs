//! Response models for API endpoints.

pub mod api;
pub mod authors;

pub use api::*;
pub use authors::*;
