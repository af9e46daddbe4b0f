//! HTTP access to the remote logbook API.
//!
//! All list endpoints are normalized at this boundary into the canonical
//! [`ListPage`] shape; the rest of the crate never sees the wire variants.

mod client;
mod envelope;

pub use client::ApiClient;
pub use envelope::ListPage;

use thiserror::Error;

/// Errors from the API layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {code}: {message}")]
    Status { code: u16, message: String },

    /// The response body was not the expected JSON shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP 409 carries a user-facing message and is surfaced as a notice
    /// rather than a plain failure.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Status { code: 409, .. })
    }
}

/// Common query parameters for paged list endpoints.
///
/// The API is 1-based: the grid's `page_index` 0 maps to `PageNumber=1`.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub page_number: usize,
    pub page_size: usize,
    /// `"column asc"` / `"column desc"`, empty for unsorted.
    pub sorting: String,
    /// Free-text search value; the per-logbook parameter name is supplied by
    /// the service.
    pub search: String,
}

impl ListQuery {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number,
            page_size,
            sorting: String::new(),
            search: String::new(),
        }
    }

    /// Renders the query pairs in the API's convention, with the search
    /// value under `search_param`.
    pub fn to_pairs(&self, search_param: &str) -> Vec<(String, String)> {
        vec![
            (search_param.to_string(), self.search.clone()),
            ("PageNumber".to_string(), self.page_number.to_string()),
            ("PageSize".to_string(), self.page_size.to_string()),
            ("Sorting".to_string(), self.sorting.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_renders_api_pairs() {
        let mut q = ListQuery::new(3, 25);
        q.sorting = "project_name desc".to_string();
        q.search = "dry dock".to_string();
        assert_eq!(
            q.to_pairs("project_name"),
            vec![
                ("project_name".to_string(), "dry dock".to_string()),
                ("PageNumber".to_string(), "3".to_string()),
                ("PageSize".to_string(), "25".to_string()),
                ("Sorting".to_string(), "project_name desc".to_string()),
            ]
        );
    }

    #[test]
    fn conflict_detection() {
        let conflict = ApiError::Status {
            code: 409,
            message: "duplicate project".to_string(),
        };
        let other = ApiError::Status {
            code: 500,
            message: "boom".to_string(),
        };
        assert!(conflict.is_conflict());
        assert!(!other.is_conflict());
    }
}
