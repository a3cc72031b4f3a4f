pub mod posts;
pub mod system;
pub mod users;

pub use posts::PostQueries;
pub use system::SystemQueries;
pub use users::UserQueries;

pub(crate) mod prelude {
    pub(crate) use std::sync::Arc;

    pub(crate) use async_graphql::{Context, ID, Object, Result};

    pub(crate) use crate::backend::{
        BackendClient, BackendDataLoader, PostCommentsKey, PostKey, UserKey,
    };
    pub(crate) use crate::graphql::actor::ActorExt;
    pub(crate) use crate::graphql::error::{not_found, resolution_error};
    pub(crate) use crate::graphql::helpers::parse_id;
    pub(crate) use crate::graphql::pagination::PaginationInput;
    pub(crate) use crate::graphql::types::*;
}
