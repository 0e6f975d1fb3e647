//! Admin API client implementation.
//!
//! This module provides the [`AdminClient`] type for making requests to the
//! Kong Admin API with path normalization and the paged `list` primitive.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::admin::list::{ListOpt, ListResponse};
use crate::clients::admin::AdminError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::KongConfig;

/// Admin API client for Kong.
///
/// Provides verb helpers (`get`, `post`, `put`, `delete`), a generic
/// [`request`](Self::request) and the single-page [`list`](Self::list) call
/// that entity services build their full scans on.
///
/// # Thread Safety
///
/// `AdminClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use kong_admin::{AdminClient, KongConfig};
///
/// let config = KongConfig::builder().build()?;
/// let client = AdminClient::new(&config)?;
///
/// let response = client.get("status", None).await?;
/// println!("Status: {}", response.body);
/// ```
#[derive(Debug)]
pub struct AdminClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Page size used when scanning a whole collection.
    page_size: u32,
}

// Verify AdminClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminClient>();
};

impl AdminClient {
    /// Creates a new Admin API client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Http`] if the underlying HTTP client cannot be
    /// created.
    pub fn new(config: &KongConfig) -> Result<Self, AdminError> {
        let http_client = HttpClient::new(config)?;

        tracing::debug!(
            admin_url = %config.admin_url(),
            workspace = config.workspace().unwrap_or_default(),
            "created Kong Admin API client"
        );

        Ok(Self {
            http_client,
            page_size: config.page_size(),
        })
    }

    /// Returns the page size used when scanning a whole collection.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidPath`] if the path is empty.
    /// Returns [`AdminError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, AdminError> {
        self.request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidPath`] if the path is empty.
    /// Returns [`AdminError::Http`] for HTTP-level errors.
    pub async fn post(&self, path: &str, body: Value) -> Result<HttpResponse, AdminError> {
        self.request(HttpMethod::Post, path, Some(body), None).await
    }

    /// Sends a PUT request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidPath`] if the path is empty.
    /// Returns [`AdminError::Http`] for HTTP-level errors.
    pub async fn put(&self, path: &str, body: Value) -> Result<HttpResponse, AdminError> {
        self.request(HttpMethod::Put, path, Some(body), None).await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidPath`] if the path is empty.
    /// Returns [`AdminError::Http`] for HTTP-level errors.
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, AdminError> {
        self.request(HttpMethod::Delete, path, None, None).await
    }

    /// Builds and sends a request.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidPath`] if the path is empty.
    /// Returns [`AdminError::Http`] if the request is invalid, cannot be
    /// sent, receives a non-2xx response, or a 2xx body that is not JSON.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, AdminError> {
        let normalized_path = normalize_path(path)?;

        let mut request = HttpRequest::new(method, normalized_path);
        if let Some(body) = body {
            request = request.with_body(body);
        }
        if let Some(query) = query {
            request = request.with_query(query);
        }

        Ok(self.http_client.request(request).await?)
    }

    /// Fetches one page of a collection.
    ///
    /// Returns the raw items of the page, in server order, and the cursor
    /// for the next page (`None` on the last page).
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidListResponse`] if the body is not a page
    /// envelope, and the errors of [`request`](Self::request) otherwise.
    pub async fn list(
        &self,
        path: &str,
        opt: Option<&ListOpt>,
    ) -> Result<(Vec<Value>, Option<ListOpt>), AdminError> {
        let query = opt.map(ListOpt::to_query);
        let response = self.get(path, query).await?;

        let page: ListResponse = serde_json::from_value(response.body).map_err(|source| {
            AdminError::InvalidListResponse {
                path: path.to_string(),
                source,
            }
        })?;

        let next = page.next_opt(opt);
        Ok((page.data, next))
    }
}

/// Normalizes an Admin API path.
///
/// Leading slashes are stripped so the path can be appended to the base
/// URI. Empty paths are rejected.
fn normalize_path(path: &str) -> Result<String, AdminError> {
    let trimmed = path.trim_start_matches('/');

    if trimmed.is_empty() {
        return Err(AdminError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdminUrl;

    #[test]
    fn test_normalize_path_strips_leading_slashes() {
        assert_eq!(normalize_path("/plugins").unwrap(), "plugins");
        assert_eq!(normalize_path("//plugins").unwrap(), "plugins");
        assert_eq!(normalize_path("plugins").unwrap(), "plugins");
    }

    #[test]
    fn test_normalize_path_keeps_nested_paths() {
        assert_eq!(
            normalize_path("/services/svc1/plugins").unwrap(),
            "services/svc1/plugins"
        );
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        assert!(matches!(
            normalize_path(""),
            Err(AdminError::InvalidPath { path }) if path.is_empty()
        ));
        assert!(matches!(
            normalize_path("/"),
            Err(AdminError::InvalidPath { path }) if path == "/"
        ));
    }

    #[test]
    fn test_admin_client_uses_configured_page_size() {
        let config = KongConfig::builder()
            .admin_url(AdminUrl::new("http://kong:8001").unwrap())
            .page_size(25)
            .build()
            .unwrap();
        let client = AdminClient::new(&config).unwrap();

        assert_eq!(client.page_size(), 25);
        assert_eq!(client.http_client().base_uri(), "http://kong:8001");
    }

    #[test]
    fn test_admin_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AdminClient>();
    }
}
