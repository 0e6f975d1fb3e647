//! HTTP client types for Kong Admin API communication.
//!
//! This module provides the HTTP client layer for making requests to the
//! Admin API. It handles request/response processing and error
//! serialization; it never retries.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`admin::AdminClient`]: Higher-level Admin API client with pagination
//! - [`admin::AdminError`]: Admin-client error types
//!
//! # Example
//!
//! ```rust,ignore
//! use kong_admin::KongConfig;
//! use kong_admin::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new(&KongConfig::builder().build()?)?;
//!
//! let request = HttpRequest::new(HttpMethod::Get, "plugins")
//!     .with_query([("size".to_string(), "10".to_string())].into());
//!
//! let response = client.request(request).await?;
//! ```

pub mod admin;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, ADMIN_TOKEN_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest};
pub use http_response::{HttpResponse, REQUEST_ID_HEADER};

// Re-export Admin client types at the clients module level
pub use admin::{AdminClient, AdminError, ListOpt};
