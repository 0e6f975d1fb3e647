//! Resource-level error types.
//!
//! This module contains the error type returned by entity services such as
//! [`PluginService`](crate::rest::resources::PluginService). It wraps the
//! lower-level [`AdminError`] and [`HttpError`] and adds the failures that
//! only make sense at the entity level.
//!
//! # Error Handling
//!
//! - [`ResourceError::InvalidArgument`]: a required identifier was empty; no
//!   request was sent
//! - [`ResourceError::Decode`]: a response could not be decoded into the
//!   entity type
//! - [`ResourceError::Http`] / [`ResourceError::Admin`]: transport failures
//!   and non-2xx responses, passed through unchanged
//!
//! # Example
//!
//! ```rust,ignore
//! use kong_admin::rest::ResourceError;
//!
//! match client.plugins().get("rate-limiting").await {
//!     Ok(plugin) => println!("Found: {:?}", plugin.id),
//!     Err(e) if e.is_not_found() => println!("No such plugin"),
//!     Err(ResourceError::InvalidArgument { argument, .. }) => {
//!         println!("{argument} is required");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{AdminError, HttpError};
use thiserror::Error;

/// Error type for entity operations.
///
/// # Example
///
/// ```rust
/// use kong_admin::rest::ResourceError;
///
/// let error = ResourceError::InvalidArgument {
///     argument: "id_or_name",
///     operation: "get",
/// };
/// assert_eq!(error.to_string(), "id_or_name cannot be empty for get operation");
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A required identifier was empty.
    ///
    /// Detected locally; the request is never sent.
    #[error("{argument} cannot be empty for {operation} operation")]
    InvalidArgument {
        /// The name of the offending argument.
        argument: &'static str,
        /// The operation being attempted (e.g., "get", "delete").
        operation: &'static str,
    },

    /// No path template matches the provided IDs and operation.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// A response body could not be decoded into the entity type.
    #[error("Failed to decode {resource}: {source}")]
    Decode {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The entity could not be serialized into a request body.
    #[error("Failed to serialize {resource}: {source}")]
    Serialize {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying encode error.
        #[source]
        source: serde_json::Error,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// An Admin-client error occurred.
    #[error(transparent)]
    Admin(#[from] AdminError),
}

impl ResourceError {
    fn http_error(&self) -> Option<&HttpError> {
        match self {
            Self::Http(e) | Self::Admin(AdminError::Http(e)) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.http_error().and_then(HttpError::status)
    }

    /// Returns `true` if the server answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns the request ID if available.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self.http_error() {
            Some(HttpError::Response(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
