//! Pagination argument translation.
//!
//! The backend speaks `_limit`/`_page` query parameters; the schema
//! accepts `PaginationInput { page, count }`. Validation happens here,
//! before any backend call is issued.

use async_graphql::InputObject;

use crate::backend::PageWindow;

use super::error::invalid_argument;

/// Client-supplied pagination window.
#[derive(InputObject, Debug, Clone, Copy)]
pub struct PaginationInput {
    /// 1-based page number
    pub page: i32,
    /// Number of items per page
    pub count: i32,
}

impl PaginationInput {
    /// Validate and translate into the backend's query convention.
    ///
    /// Both values must be strictly positive.
    pub fn validate(self) -> async_graphql::Result<PageWindow> {
        if self.page <= 0 {
            return Err(invalid_argument(format!(
                "pagination.page must be positive, got {}",
                self.page
            )));
        }
        if self.count <= 0 {
            return Err(invalid_argument(format!(
                "pagination.count must be positive, got {}",
                self.count
            )));
        }
        Ok(PageWindow {
            limit: self.count,
            page: self.page,
        })
    }
}
