//! GraphQL schema assembly.

use std::sync::Arc;

use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::backend::BackendClient;

use super::mutations::{CommentMutations, PostMutations};
use super::queries::{PostQueries, SystemQueries, UserQueries};

/// The gateway schema type
pub type GatewaySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(UserQueries, PostQueries, SystemQueries);

#[derive(MergedObject, Default)]
pub struct MutationRoot(PostMutations, CommentMutations);

/// Build the schema with all resolvers wired to the given backend client.
///
/// The client is a parameter, not a global, so tests can stand up isolated
/// gateway instances against their own backends.
pub fn build_schema(client: Arc<BackendClient>) -> GatewaySchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(client)
    .finish()
}
