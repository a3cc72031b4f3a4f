pub mod comments;
pub mod posts;

pub use comments::CommentMutations;
pub use posts::PostMutations;

pub(crate) mod prelude {
    pub(crate) use std::sync::Arc;

    pub(crate) use async_graphql::{Context, ID, Object, Result};

    pub(crate) use crate::backend::{BackendClient, NewComment, NewPost};
    pub(crate) use crate::graphql::actor::ActorExt;
    pub(crate) use crate::graphql::error::{invalid_argument, resolution_error};
    pub(crate) use crate::graphql::helpers::parse_id;
    pub(crate) use crate::graphql::types::*;
}
