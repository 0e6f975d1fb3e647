//! Error types for client configuration.
//!
//! This module contains the error type returned when building a
//! [`KongConfig`](crate::KongConfig) or one of its validated newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use kong_admin::{AdminToken, ConfigError};
//!
//! let result = AdminToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAdminToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Admin token cannot be empty.
    #[error("Admin token cannot be empty. Omit the token entirely if the Admin API is not protected.")]
    EmptyAdminToken,

    /// Admin URL is invalid.
    #[error("Invalid admin URL '{url}'. Expected an http(s) URL with a host (e.g., 'http://localhost:8001').")]
    InvalidAdminUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Workspace name is invalid.
    #[error("Invalid workspace '{workspace}'. Workspace names cannot be empty or contain '/'.")]
    InvalidWorkspace {
        /// The invalid workspace that was provided.
        workspace: String,
    },

    /// Page size must be positive.
    #[error("Invalid page size {size}. The page size used for full scans must be at least 1.")]
    InvalidPageSize {
        /// The page size that was provided.
        size: u32,
    },
}
