//! Typed client for the REST backend.
//!
//! Issues exactly one request per call and never retries; backpressure and
//! retry policy belong to whoever drives the gateway. Non-2xx responses,
//! transport failures, and undecodable bodies all surface as a
//! [`BackendError`] naming the attempted call.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use super::records::{CommentRecord, CreatedPost, NewComment, NewPost, PostRecord, UserRecord};

/// A failed backend call.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The request never produced a response.
    #[error("backend call {call} failed: {source}")]
    Transport {
        call: String,
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered with a non-2xx status.
    #[error("backend call {call} returned {status}")]
    Status { call: String, status: StatusCode },
    /// The backend has no such resource.
    #[error("backend call {call} returned 404")]
    NotFound { call: String },
    /// The response body did not match the expected record shape.
    #[error("backend call {call} returned an undecodable body: {source}")]
    Decode {
        call: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Page window for list endpoints, already in the backend's convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i32,
    pub page: i32,
}

impl PageWindow {
    /// Query parameters the backend expects for a paged listing.
    pub fn to_query(self) -> [(&'static str, String); 2] {
        [
            ("_limit", self.limit.to_string()),
            ("_page", self.page.to_string()),
        ]
    }
}

/// REST backend client.
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: Url, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub async fn get_user(&self, id: u64) -> Result<UserRecord, BackendError> {
        self.get(&format!("/users/{id}"), &[]).await
    }

    pub async fn list_users(&self, page: PageWindow) -> Result<Vec<UserRecord>, BackendError> {
        self.get("/users", &page.to_query()).await
    }

    pub async fn get_post(&self, id: u64) -> Result<PostRecord, BackendError> {
        self.get(&format!("/posts/{id}"), &[]).await
    }

    pub async fn list_posts(&self) -> Result<Vec<PostRecord>, BackendError> {
        self.get("/posts", &[]).await
    }

    pub async fn posts_for_user(&self, user_id: u64) -> Result<Vec<PostRecord>, BackendError> {
        self.get(&format!("/users/{user_id}/posts"), &[]).await
    }

    pub async fn comments_for_post(&self, post_id: u64) -> Result<Vec<CommentRecord>, BackendError> {
        self.get(&format!("/posts/{post_id}/comments"), &[]).await
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<CreatedPost, BackendError> {
        info!(title = %post.title, user_id = post.user_id, "Creating post on backend");
        self.post("/posts", post).await
    }

    pub async fn create_comment(&self, comment: &NewComment) -> Result<CommentRecord, BackendError> {
        info!(post_id = comment.post_id, user_id = comment.user_id, "Creating comment on backend");
        self.post("/comments", comment).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, BackendError> {
        let call = format!("GET {path}");
        debug!(call = %call, "Backend call");

        let response = self
            .client
            .get(self.endpoint(path))
            .query(query)
            .send()
            .await
            .map_err(|source| BackendError::Transport {
                call: call.clone(),
                source,
            })?;

        Self::decode(call, response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let call = format!("POST {path}");
        debug!(call = %call, "Backend call");

        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|source| BackendError::Transport {
                call: call.clone(),
                source,
            })?;

        Self::decode(call, response).await
    }

    async fn decode<T: DeserializeOwned>(
        call: String,
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound { call });
        }
        if !status.is_success() {
            return Err(BackendError::Status { call, status });
        }

        response
            .json()
            .await
            .map_err(|source| BackendError::Decode { call, source })
    }
}
