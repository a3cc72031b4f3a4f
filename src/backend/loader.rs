//! Request-scoped load collapsing for backend fetches.
//!
//! The schema executor resolves sibling fields and sibling list elements
//! independently, so a query like `posts { comments { author { name } } }`
//! naturally fans out into one backend call per node. Every keyed fetch
//! goes through a [`DataLoader`] built fresh for each request: duplicate
//! keys collapse into one call, resolved values are cached for the rest of
//! that request, and nothing outlives the request.
//!
//! The backend has no batch endpoints, so a batch of keys fans out as
//! concurrent single-resource calls. A 404 is omitted from the result map
//! (callers see a typed absence per key); any other failure fails the
//! whole batch.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dataloader::{DataLoader, HashMapCache, Loader};
use futures::future;

use super::client::{BackendClient, BackendError};
use super::records::{CommentRecord, PostRecord, UserRecord};

/// `GET /users/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserKey(pub u64);

/// `GET /posts/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostKey(pub u64);

/// `GET /users/{id}/posts`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserPostsKey(pub u64);

/// `GET /posts/{id}/comments`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostCommentsKey(pub u64);

/// Loader over the backend client; one instance per request.
pub struct BackendLoader {
    client: Arc<BackendClient>,
}

impl BackendLoader {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }
}

/// The per-request loader type resolvers pull out of the context.
pub type BackendDataLoader = DataLoader<BackendLoader, HashMapCache>;

/// Build the loader for one request. Constructed in the GraphQL handler so
/// the cache never outlives a single operation.
pub fn request_loader(client: Arc<BackendClient>) -> BackendDataLoader {
    DataLoader::with_cache(
        BackendLoader::new(client),
        tokio::spawn,
        HashMapCache::default(),
    )
}

impl Loader<UserKey> for BackendLoader {
    type Value = UserRecord;
    type Error = Arc<BackendError>;

    async fn load(&self, keys: &[UserKey]) -> Result<HashMap<UserKey, Self::Value>, Self::Error> {
        let fetches = keys.iter().map(|key| async move {
            match self.client.get_user(key.0).await {
                Ok(user) => Ok(Some((*key, user))),
                Err(BackendError::NotFound { .. }) => Ok(None),
                Err(err) => Err(Arc::new(err)),
            }
        });
        Ok(future::try_join_all(fetches)
            .await?
            .into_iter()
            .flatten()
            .collect())
    }
}

impl Loader<PostKey> for BackendLoader {
    type Value = PostRecord;
    type Error = Arc<BackendError>;

    async fn load(&self, keys: &[PostKey]) -> Result<HashMap<PostKey, Self::Value>, Self::Error> {
        let fetches = keys.iter().map(|key| async move {
            match self.client.get_post(key.0).await {
                Ok(post) => Ok(Some((*key, post))),
                Err(BackendError::NotFound { .. }) => Ok(None),
                Err(err) => Err(Arc::new(err)),
            }
        });
        Ok(future::try_join_all(fetches)
            .await?
            .into_iter()
            .flatten()
            .collect())
    }
}

impl Loader<UserPostsKey> for BackendLoader {
    type Value = Vec<PostRecord>;
    type Error = Arc<BackendError>;

    async fn load(
        &self,
        keys: &[UserPostsKey],
    ) -> Result<HashMap<UserPostsKey, Self::Value>, Self::Error> {
        let fetches = keys.iter().map(|key| async move {
            match self.client.posts_for_user(key.0).await {
                Ok(posts) => Ok(Some((*key, posts))),
                Err(BackendError::NotFound { .. }) => Ok(None),
                Err(err) => Err(Arc::new(err)),
            }
        });
        Ok(future::try_join_all(fetches)
            .await?
            .into_iter()
            .flatten()
            .collect())
    }
}

impl Loader<PostCommentsKey> for BackendLoader {
    type Value = Vec<CommentRecord>;
    type Error = Arc<BackendError>;

    async fn load(
        &self,
        keys: &[PostCommentsKey],
    ) -> Result<HashMap<PostCommentsKey, Self::Value>, Self::Error> {
        let fetches = keys.iter().map(|key| async move {
            match self.client.comments_for_post(key.0).await {
                Ok(comments) => Ok(Some((*key, comments))),
                Err(BackendError::NotFound { .. }) => Ok(None),
                Err(err) => Err(Arc::new(err)),
            }
        });
        Ok(future::try_join_all(fetches)
            .await?
            .into_iter()
            .flatten()
            .collect())
    }
}
