//! HTTP request types.
//!
//! An Admin API request is a method, a path relative to the admin URL (and
//! workspace), an optional JSON body and optional query parameters. Writes
//! (`POST`, `PUT`) always carry a body; reads and deletes never do.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Admin API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read an entity or a page of a collection.
    Get,
    /// Create an entity with a server-assigned ID, or run a validation.
    Post,
    /// Create or replace an entity at a caller-chosen key.
    Put,
    /// Remove an entity.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for methods whose requests carry a JSON body.
    #[must_use]
    pub const fn sends_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A request to the Admin API.
///
/// # Example
///
/// ```rust
/// use kong_admin::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let page = HttpRequest::new(HttpMethod::Get, "plugins")
///     .with_query([("size".to_string(), "100".to_string())].into());
/// assert!(page.verify().is_ok());
///
/// let upsert = HttpRequest::new(HttpMethod::Put, "plugins/abc")
///     .with_body(json!({"name": "cors"}));
/// assert!(upsert.verify().is_ok());
///
/// // Writes without a body are rejected before anything is sent
/// assert!(HttpRequest::new(HttpMethod::Post, "plugins").verify().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the admin URL and workspace, without a leading `/`.
    pub path: String,
    /// The JSON body, sent with `Content-Type: application/json`.
    pub body: Option<Value>,
    /// Query parameters appended to the URL.
    pub query: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a request with no body and no query.
    #[must_use]
    pub fn new(http_method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method,
            path: path.into(),
            body: None,
            query: None,
        }
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attaches query parameters. An empty map sends no query string.
    #[must_use]
    pub fn with_query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query).filter(|q| !q.is_empty());
        self
    }

    /// Checks that the body matches the method.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] for a `POST` or `PUT`
    /// without a body, and [`InvalidHttpRequestError::UnexpectedBody`] for a
    /// `GET` or `DELETE` with one.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.http_method.sends_body(), self.body.is_some()) {
            (true, false) => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method,
            }),
            (false, true) => Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display_is_uppercase() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_only_writes_send_bodies() {
        assert!(HttpMethod::Post.sends_body());
        assert!(HttpMethod::Put.sends_body());
        assert!(!HttpMethod::Get.sends_body());
        assert!(!HttpMethod::Delete.sends_body());
    }

    #[test]
    fn test_as_reqwest_maps_every_method() {
        assert_eq!(HttpMethod::Get.as_reqwest(), reqwest::Method::GET);
        assert_eq!(HttpMethod::Post.as_reqwest(), reqwest::Method::POST);
        assert_eq!(HttpMethod::Put.as_reqwest(), reqwest::Method::PUT);
        assert_eq!(HttpMethod::Delete.as_reqwest(), reqwest::Method::DELETE);
    }

    #[test]
    fn test_verify_accepts_upsert_with_body() {
        let request =
            HttpRequest::new(HttpMethod::Put, "plugins/abc").with_body(json!({"name": "key-auth"}));

        assert!(request.verify().is_ok());
    }

    #[test]
    fn test_verify_rejects_create_without_body() {
        let result = HttpRequest::new(HttpMethod::Post, "plugins").verify();

        assert_eq!(
            result,
            Err(InvalidHttpRequestError::MissingBody {
                method: HttpMethod::Post
            })
        );
    }

    #[test]
    fn test_verify_rejects_delete_with_body() {
        let result = HttpRequest::new(HttpMethod::Delete, "plugins/abc")
            .with_body(json!({}))
            .verify();

        assert_eq!(
            result,
            Err(InvalidHttpRequestError::UnexpectedBody {
                method: HttpMethod::Delete
            })
        );
    }

    #[test]
    fn test_with_query_drops_empty_map() {
        let request = HttpRequest::new(HttpMethod::Get, "plugins").with_query(HashMap::new());
        assert!(request.query.is_none());

        let request = HttpRequest::new(HttpMethod::Get, "plugins")
            .with_query([("offset".to_string(), "WyJhIl0".to_string())].into());
        assert_eq!(
            request.query.unwrap().get("offset"),
            Some(&"WyJhIl0".to_string())
        );
    }
}
