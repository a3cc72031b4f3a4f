//! Request actor context.
//!
//! Mutations and profile queries act on behalf of a user. The actor
//! arrives as request data (extracted from the `x-actor-id` header by the
//! HTTP handler) instead of being baked into resolvers, so a real
//! authentication layer can replace the extractor without touching the
//! schema.

use async_graphql::{Context, Result};

use super::error::unauthenticated;

/// The identity a request acts as.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub user_id: u64,
}

/// Extension trait to get the request actor from GraphQL context
pub trait ActorExt {
    /// Get the actor, or fail with `UNAUTHENTICATED` before any backend call.
    fn actor(&self) -> Result<&Actor>;
}

impl ActorExt for Context<'_> {
    fn actor(&self) -> Result<&Actor> {
        self.data_opt::<Actor>().ok_or_else(unauthenticated)
    }
}
