//! Configuration types for the Kong Admin API client.
//!
//! This module provides the configuration used to construct an
//! [`AdminClient`](crate::AdminClient).
//!
//! # Overview
//!
//! - [`KongConfig`]: The configuration struct holding all client settings
//! - [`KongConfigBuilder`]: A builder for constructing [`KongConfig`] instances
//! - [`AdminUrl`]: A validated Admin API base URL
//! - [`AdminToken`]: A validated admin token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use kong_admin::{AdminToken, AdminUrl, KongConfig};
//!
//! let config = KongConfig::builder()
//!     .admin_url(AdminUrl::new("http://kong:8001").unwrap())
//!     .admin_token(AdminToken::new("my-token").unwrap())
//!     .page_size(100)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.page_size(), 100);
//! ```

mod newtypes;

pub use newtypes::{AdminToken, AdminUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Default number of entities requested per page during full scans.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Configuration for the Kong Admin API client.
///
/// # Thread Safety
///
/// `KongConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use kong_admin::KongConfig;
///
/// let config = KongConfig::builder().build().unwrap();
/// assert_eq!(config.admin_url().as_ref(), "http://localhost:8001");
/// assert!(config.admin_token().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct KongConfig {
    admin_url: AdminUrl,
    admin_token: Option<AdminToken>,
    workspace: Option<String>,
    page_size: u32,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl KongConfig {
    /// Creates a new builder for constructing a `KongConfig`.
    #[must_use]
    pub fn builder() -> KongConfigBuilder {
        KongConfigBuilder::new()
    }

    /// Returns the Admin API base URL.
    #[must_use]
    pub const fn admin_url(&self) -> &AdminUrl {
        &self.admin_url
    }

    /// Returns the admin token, if configured.
    #[must_use]
    pub const fn admin_token(&self) -> Option<&AdminToken> {
        self.admin_token.as_ref()
    }

    /// Returns the workspace every request is scoped to, if configured.
    #[must_use]
    pub fn workspace(&self) -> Option<&str> {
        self.workspace.as_deref()
    }

    /// Returns the page size used by full scans.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for KongConfig {
    fn default() -> Self {
        Self {
            admin_url: AdminUrl::default(),
            admin_token: None,
            workspace: None,
            page_size: DEFAULT_PAGE_SIZE,
            timeout: None,
            user_agent_prefix: None,
        }
    }
}

// Verify KongConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KongConfig>();
};

/// Builder for constructing [`KongConfig`] instances.
///
/// # Defaults
///
/// - `admin_url`: `http://localhost:8001`
/// - `admin_token`: `None`
/// - `workspace`: `None`
/// - `page_size`: [`DEFAULT_PAGE_SIZE`]
/// - `timeout`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct KongConfigBuilder {
    admin_url: Option<AdminUrl>,
    admin_token: Option<AdminToken>,
    workspace: Option<String>,
    page_size: Option<u32>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl KongConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Admin API base URL.
    #[must_use]
    pub fn admin_url(mut self, url: AdminUrl) -> Self {
        self.admin_url = Some(url);
        self
    }

    /// Sets the token sent in the `Kong-Admin-Token` header.
    #[must_use]
    pub fn admin_token(mut self, token: AdminToken) -> Self {
        self.admin_token = Some(token);
        self
    }

    /// Scopes every request to a workspace (`/{workspace}/plugins`).
    #[must_use]
    pub fn workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    /// Sets the page size used when scanning a whole collection.
    #[must_use]
    pub const fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Sets a timeout applied to each request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`KongConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWorkspace`] if the workspace is empty or
    /// contains `/`, and [`ConfigError::InvalidPageSize`] if the page size is 0.
    pub fn build(self) -> Result<KongConfig, ConfigError> {
        let workspace = match self.workspace {
            Some(ws) => {
                let trimmed = ws.trim();
                if trimmed.is_empty() || trimmed.contains('/') {
                    return Err(ConfigError::InvalidWorkspace { workspace: ws });
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize { size: page_size });
        }

        Ok(KongConfig {
            admin_url: self.admin_url.unwrap_or_default(),
            admin_token: self.admin_token,
            workspace,
            page_size,
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
