//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";

// Generic errors
pub const CODE_BAD_REQUEST: &str = "BAD_REQUEST";
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";

// Store errors
pub const CODE_STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
pub const CODE_RENDER_FAILED: &str = "RENDER_FAILED";
