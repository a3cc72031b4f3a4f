//! GraphQL surface of the gateway.
//!
//! Declarative schema description lives in `types`; everything with
//! data-flow responsibility (root resolvers, relation resolution,
//! argument translation, error shaping) lives in the submodules.
//! Queries and mutations use the merged-object pattern: each domain
//! contributes a `#[derive(Default)]` struct that `schema` merges into
//! the roots.

pub mod actor;
pub mod error;
pub mod helpers;
pub mod mutations;
pub mod pagination;
pub mod queries;
mod schema;
pub mod types;

#[cfg(test)]
mod tests;

pub use actor::Actor;
pub use schema::{GatewaySchema, build_schema};
