//! MongoDB collection names and document field values.

pub const COLLECTION_USERS: &str = "users";
pub const COLLECTION_POSTS: &str = "posts";

/// Roles whose holders count as authors.
pub const AUTHOR_ROLES: [&str; 4] = ["administrator", "editor", "author", "contributor"];

pub const POST_TYPE_POST: &str = "post";
pub const POST_STATUS_PUBLISH: &str = "publish";
