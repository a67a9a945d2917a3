//! Author repository backed by MongoDB.
//!
//! Authors are users holding one of [`AUTHOR_ROLES`]; their post counts come
//! from the published entries in the posts collection.

use std::collections::HashMap;

use futures::future::BoxFuture;
use futures::{FutureExt, TryStreamExt};
use log::{debug, info};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::{
    AUTHOR_ROLES, COLLECTION_POSTS, COLLECTION_USERS, POST_STATUS_PUBLISH, POST_TYPE_POST,
};
use crate::errors::ApiError;
use crate::models::{Author, UserDocument};
use crate::repositories::AuthorStore;

/// Repository for author reads.
pub struct AuthorRepository {
    users: Collection<UserDocument>,
    posts: Collection<Document>,
}

impl AuthorRepository {
    /// Create a new AuthorRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(COLLECTION_USERS),
            posts: db.collection(COLLECTION_POSTS),
        }
    }

    /// Create database indexes used by the author queries.
    ///
    /// - Compound index on `role` and `login` for the author listing
    /// - Compound index on `post_type`, `status` and `author_id` for the post count aggregation
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for author queries...");

        self.users
            .create_index(IndexModel::builder().keys(doc! { "role": 1, "login": 1 }).build())
            .await?;
        self.posts
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "post_type": 1, "status": 1, "author_id": 1 })
                    .build(),
            )
            .await?;

        info!("Database indexes created successfully");
        Ok(())
    }

    /// Find every user with an author role, sorted by login.
    pub async fn find_authors(&self) -> Result<Vec<UserDocument>, ApiError> {
        let filter = author_filter();
        debug!("Repository: Finding authors with filter: {:?}", filter);

        let cursor = self.users.find(filter).sort(author_sort()).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Published post counts for every author that has at least one post.
    pub async fn published_post_counts(&self) -> Result<HashMap<ObjectId, u64>, ApiError> {
        let cursor = self.posts.aggregate(post_count_pipeline()).await?;
        let groups: Vec<Document> = cursor.try_collect().await?;
        debug!("Repository: Aggregated post counts for {} authors", groups.len());

        Ok(parse_post_counts(groups))
    }

    async fn load_authors(&self) -> Result<Vec<Author>, ApiError> {
        let users = self.find_authors().await?;
        let counts = self.published_post_counts().await?;
        debug!("Repository: Loaded {} authors", users.len());

        Ok(join_post_counts(users, &counts))
    }
}

/// Filter selecting users that hold an author role.
pub fn author_filter() -> Document {
    doc! { "role": { "$in": AUTHOR_ROLES.to_vec() } }
}

/// Sort order of the author listing.
pub fn author_sort() -> Document {
    doc! { "login": 1 }
}

/// Pipeline grouping published posts by author.
pub fn post_count_pipeline() -> Vec<Document> {
    vec![
        doc! {
            "$match": {
                "post_type": POST_TYPE_POST,
                "status": POST_STATUS_PUBLISH,
            }
        },
        doc! {
            "$group": {
                "_id": "$author_id",
                "count": { "$sum": 1 },
            }
        },
    ]
}

/// Read `{_id, count}` groups into a map. Groups without an object id are skipped.
pub fn parse_post_counts(groups: Vec<Document>) -> HashMap<ObjectId, u64> {
    groups
        .iter()
        .filter_map(|group| {
            let author_id = group.get_object_id("_id").ok()?;
            let count = match group.get("count") {
                Some(Bson::Int32(n)) => u64::try_from(*n).ok()?,
                Some(Bson::Int64(n)) => u64::try_from(*n).ok()?,
                _ => return None,
            };
            Some((author_id, count))
        })
        .collect()
}

/// Attach post counts to users, keeping their order. Users without posts get 0.
pub fn join_post_counts(
    users: Vec<UserDocument>,
    counts: &HashMap<ObjectId, u64>,
) -> Vec<Author> {
    users
        .into_iter()
        .map(|user| {
            let count = counts.get(&user.id).copied().unwrap_or(0);
            user.into_author(count)
        })
        .collect()
}

impl AuthorStore for AuthorRepository {
    fn list_authors(&self) -> BoxFuture<'_, Result<Vec<Author>, ApiError>> {
        self.load_authors().boxed()
    }
}
