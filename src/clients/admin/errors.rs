//! Admin-client error types.
//!
//! - [`AdminError::InvalidPath`]: When an Admin API path fails validation
//! - [`AdminError::InvalidListResponse`]: When a list page does not have the
//!   `{"data": [...], "next": ...}` shape
//! - [`AdminError::Http`]: Wraps underlying HTTP errors

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for Admin API client operations.
///
/// # Example
///
/// ```rust
/// use kong_admin::clients::admin::AdminError;
///
/// let error = AdminError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum AdminError {
    /// The Admin API path is invalid.
    ///
    /// Returned when a path is empty after normalization.
    #[error("Invalid Admin API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// A list endpoint returned a body that is not a page envelope.
    #[error("Invalid list response from {path}: {source}")]
    InvalidListResponse {
        /// The path that was listed.
        path: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl AdminError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}
