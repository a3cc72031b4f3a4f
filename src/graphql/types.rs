//! Public graph types.
//!
//! Each type wraps its backend wire record and exposes only the fields the
//! schema declares. The record is a superset of the public shape; the
//! narrowing happens here at serialization time. Relation fields resolve
//! through the per-request loader, and only when selected.

use async_graphql::{Context, ID, InputObject, Object, Result, SimpleObject};

use crate::backend::{
    BackendDataLoader, CommentRecord, PostCommentsKey, PostRecord, UserKey, UserPostsKey,
    UserRecord,
};

use super::error::{not_found, resolution_error};

/// A registered user.
pub struct User {
    record: UserRecord,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self { record }
    }
}

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID::from(self.record.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.record.name
    }

    async fn email(&self) -> &str {
        &self.record.email
    }

    /// Posts authored by this user, fetched on demand.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let loader = ctx.data_unchecked::<BackendDataLoader>();
        let posts = loader
            .load_one(UserPostsKey(self.record.id))
            .await
            .map_err(|e| resolution_error("User.posts", &e))?
            .ok_or_else(|| not_found("user", self.record.id))?;
        Ok(posts.into_iter().map(Post::from).collect())
    }
}

/// A post, possibly carrying comments prefetched by `getPostById`.
pub struct Post {
    record: PostRecord,
    prefetched_comments: Option<Vec<CommentRecord>>,
}

impl Post {
    pub fn new(record: PostRecord) -> Self {
        Self {
            record,
            prefetched_comments: None,
        }
    }

    /// A post node composed from two backend calls (see `getPostById`).
    pub fn with_comments(record: PostRecord, comments: Vec<CommentRecord>) -> Self {
        Self {
            record,
            prefetched_comments: Some(comments),
        }
    }
}

impl From<PostRecord> for Post {
    fn from(record: PostRecord) -> Self {
        Self::new(record)
    }
}

#[Object]
impl Post {
    async fn id(&self) -> ID {
        ID::from(self.record.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.record.title
    }

    async fn body(&self) -> &str {
        &self.record.body
    }

    /// Comments on this post.
    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<Comment>> {
        if let Some(comments) = &self.prefetched_comments {
            return Ok(comments.iter().cloned().map(Comment::from).collect());
        }
        let loader = ctx.data_unchecked::<BackendDataLoader>();
        let comments = loader
            .load_one(PostCommentsKey(self.record.id))
            .await
            .map_err(|e| resolution_error("Post.comments", &e))?
            .ok_or_else(|| not_found("post", self.record.id))?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }
}

/// A comment. The public shape is just the id and the author relation;
/// the wire record underneath also carries `text`, `postId` and `userId`.
pub struct Comment {
    record: CommentRecord,
}

impl From<CommentRecord> for Comment {
    fn from(record: CommentRecord) -> Self {
        Self { record }
    }
}

#[Object]
impl Comment {
    async fn id(&self) -> ID {
        ID::from(self.record.id.to_string())
    }

    /// The comment's author, resolved from the wire record's `userId`.
    async fn author(&self, ctx: &Context<'_>) -> Result<User> {
        let loader = ctx.data_unchecked::<BackendDataLoader>();
        let user = loader
            .load_one(UserKey(self.record.user_id))
            .await
            .map_err(|e| resolution_error("Comment.author", &e))?
            .ok_or_else(|| not_found("user", self.record.user_id))?;
        Ok(user.into())
    }
}

/// Fields for a new post.
#[derive(InputObject, Debug, Clone)]
pub struct PostInput {
    pub title: String,
    pub body: String,
}

/// Acknowledgment returned by `createPost`.
#[derive(SimpleObject, Debug, Clone)]
pub struct CreatePostResponse {
    pub message: String,
    pub id: ID,
}
