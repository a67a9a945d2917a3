//! Application constants module.
//!
//! Centralizes error messages, error codes, success messages, collection
//! names and pagination limits.

pub mod collections;
pub mod error_codes;
pub mod errors;
pub mod messages;
pub mod pagination;

pub use collections::*;
pub use error_codes::*;
pub use errors::*;
pub use messages::*;
pub use pagination::*;
