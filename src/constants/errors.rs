//! Error message constants used throughout the application.

pub const ERR_VALIDATION_FAILED: &str = "Validation failed";
pub const ERR_INVALID_PAGE_SIZE: &str = "Items per page must be one of 10, 15 or 20";
pub const ERR_RESOURCE_NOT_FOUND: &str = "Resource not found";
pub const ERR_UNKNOWN_ACTION: &str = "Unknown action";
pub const ERR_AUTHORS_FILE_UNREADABLE: &str = "Failed to read authors file";
pub const ERR_AUTHORS_FILE_INVALID: &str = "Authors file is not a valid author list";
pub const ERR_RENDER_FAILED: &str = "Failed to render author table";
