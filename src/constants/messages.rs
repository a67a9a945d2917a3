//! Success message constants used throughout the application.

pub const MSG_AUTHORS_PAGE_LOADED: &str = "Authors page loaded";
pub const MSG_SERVER_RUNNING: &str = "Server is running";
