//! Resolver-boundary error construction.
//!
//! Every error surfaced to a client carries a machine-readable `code`
//! extension and a message naming what could not be produced. Backend
//! details (paths, statuses, transport causes) go to the log only.
//!
//! Codes: `INVALID_ARGUMENT` (rejected before any backend call),
//! `NOT_FOUND` and `BACKEND_ERROR` (a field could not be resolved),
//! `UNAUTHENTICATED` (no actor on an actor-requiring field).

use async_graphql::{Error, ErrorExtensions};

use crate::backend::BackendError;

/// A client-supplied argument was rejected. No backend call was made.
pub fn invalid_argument(message: impl Into<String>) -> Error {
    Error::new(message.into()).extend_with(|_, e| e.set("code", "INVALID_ARGUMENT"))
}

/// A referenced resource does not exist on the backend.
pub fn not_found(kind: &str, id: u64) -> Error {
    Error::new(format!("{kind} {id} not found")).extend_with(|_, e| e.set("code", "NOT_FOUND"))
}

/// A field could not be produced because a backend call failed.
pub fn resolution_error(field: &str, err: &BackendError) -> Error {
    tracing::error!(field, error = %err, "Field resolution failed");
    let code = match err {
        BackendError::NotFound { .. } => "NOT_FOUND",
        _ => "BACKEND_ERROR",
    };
    Error::new(format!("could not resolve `{field}`")).extend_with(|_, e| e.set("code", code))
}

/// The operation acts on behalf of a user but the request carries none.
pub fn unauthenticated() -> Error {
    Error::new("Authentication required").extend_with(|_, e| e.set("code", "UNAUTHENTICATED"))
}
