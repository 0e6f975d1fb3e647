//! HTTP-specific error types.
//!
//! This module contains error types for HTTP operations, including response
//! errors and request validation failures.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the Admin API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError::InvalidBody`]: A successful response whose body is not JSON
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use kong_admin::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::InvalidBody { code, .. }) => {
//!         println!("{code} response was not JSON");
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpMethod;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message field contains JSON built from the fields Kong puts in its
/// error bodies (`message`, `name`, `fields`, `code`), plus an
/// `error_reference` entry when the response carried a request ID.
///
/// # Example
///
/// ```rust
/// use kong_admin::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"message":"Not found"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert!(error.is_not_found());
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from `X-Kong-Admin-Request-ID` header).
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Returns `true` if the server answered 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before anything is sent when the body does not match the method.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: HttpMethod,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that takes no body.
        method: HttpMethod,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A 2xx response carried a body that is not JSON.
    ///
    /// Typically an HTML page from a proxy in front of the Admin API.
    #[error("Response with status {code} is not valid JSON: {source}")]
    InvalidBody {
        /// The HTTP status code of the response.
        code: u16,
        /// The parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
