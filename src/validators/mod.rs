//! Request validation and input coercion.

pub mod authors;
pub mod common;

pub use authors::*;
pub use common::*;
