//! Request models for API endpoints.

pub mod authors;

pub use authors::*;
