use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Author record as rendered in the table. Read-only.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    /// Login name; author lists are ordered by it.
    pub login: String,
    pub display_name: String,
    pub email: String,
    /// Lifetime number of published posts.
    #[serde(default)]
    pub post_count: u64,
    pub registered_at: DateTime<Utc>,
}

impl Author {
    /// Registration date in the "Month D, YYYY" form, e.g. "March 7, 2021".
    pub fn joining_date(&self) -> String {
        self.registered_at.format("%B %-d, %Y").to_string()
    }
}

/// User document stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub login: String,
    #[serde(default)]
    pub display_name: String,
    pub email: String,
    pub registered_at: mongodb::bson::DateTime,
}

impl UserDocument {
    /// Convert into an author record carrying the given post count.
    ///
    /// An empty display name falls back to the login.
    pub fn into_author(self, post_count: u64) -> Author {
        let display_name = if self.display_name.trim().is_empty() {
            self.login.clone()
        } else {
            self.display_name
        };

        Author {
            id: self.id.to_hex(),
            login: self.login,
            display_name,
            email: self.email,
            post_count,
            registered_at: DateTime::from_timestamp_millis(self.registered_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}
