//! Data models organized by type.

pub mod author;
pub mod requests;
pub mod responses;

pub use author::*;
pub use requests::*;
pub use responses::*;
