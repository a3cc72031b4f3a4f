//! REST backend access: wire records, typed client, request-scoped loader.

mod client;
mod loader;
mod records;

pub use client::{BackendClient, BackendError, PageWindow};
pub use loader::{
    BackendDataLoader, BackendLoader, PostCommentsKey, PostKey, UserKey, UserPostsKey,
    request_loader,
};
pub use records::{CommentRecord, CreatedPost, NewComment, NewPost, PostRecord, UserRecord};
