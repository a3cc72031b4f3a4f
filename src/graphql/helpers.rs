// Helper functions shared across GraphQL query/mutation modules.

use async_graphql::ID;

use super::error::invalid_argument;

/// Parse a client-supplied ID into a backend numeric id.
pub(crate) fn parse_id(value: &ID, name: &str) -> async_graphql::Result<u64> {
    value
        .parse::<u64>()
        .map_err(|_| invalid_argument(format!("{name} must be a numeric id")))
}
