//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Kong Admin API base URL.
///
/// The URL must carry an `http` or `https` scheme and a host. A trailing
/// slash is removed so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use kong_admin::AdminUrl;
///
/// let url = AdminUrl::new("http://localhost:8001/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8001");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("localhost"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl AdminUrl {
    /// The address Kong binds its Admin API to by default.
    pub const DEFAULT: &'static str = "http://localhost:8001";

    /// Creates a new validated admin URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAdminUrl`] if the URL has no scheme, a
    /// scheme other than `http`/`https`, or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidAdminUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(ConfigError::InvalidAdminUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidAdminUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidAdminUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "http").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl Default for AdminUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 4,
            host_start: 7,
            host_end: 16,
        }
    }
}

impl AsRef<str> for AdminUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for AdminUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for AdminUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for AdminUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Kong Admin API token.
///
/// Sent as the `Kong-Admin-Token` header when RBAC is enabled on the
/// gateway. The `Debug` implementation masks the value so it does not leak
/// into logs.
///
/// # Example
///
/// ```rust
/// use kong_admin::AdminToken;
///
/// let token = AdminToken::new("s3cr3t").unwrap();
/// assert_eq!(format!("{:?}", token), "AdminToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AdminToken(String);

impl AdminToken {
    /// Creates a new validated admin token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAdminToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAdminToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AdminToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminToken(*****)")
    }
}
