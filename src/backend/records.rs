//! Wire records for the REST backend.
//!
//! These are the raw JSON shapes the backend returns, a superset of the
//! public graph types. Decoding happens at the client boundary, so a
//! malformed response fails fast instead of flowing into resolvers.
//! `CommentRecord` keeps the denormalized `userId` that `Comment.author`
//! resolves from even though the public `Comment` type never exposes it.

use serde::{Deserialize, Serialize};

/// A user as the backend stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// A post as the backend stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: u64,
    pub title: String,
    pub body: String,
    /// Author reference; not part of the public `Post` type.
    #[serde(rename = "userId", default)]
    pub user_id: Option<u64>,
}

/// A comment as the backend stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: u64,
    pub text: String,
    #[serde(rename = "postId", default)]
    pub post_id: Option<u64>,
    /// Author reference. Required: `Comment.author` cannot resolve without it.
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// Body for `POST /posts`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// Body for `POST /comments`.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    #[serde(rename = "postId")]
    pub post_id: u64,
    pub text: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// Backend acknowledgment of a created post. Only the id matters to the
/// gateway; `createPost` shapes its own response around it.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPost {
    pub id: u64,
}
