//! # Kong Admin API Rust Client
//!
//! A Rust client for the Kong gateway Admin API, providing type-safe
//! configuration, an async HTTP layer and typed access to gateway entities.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`KongConfig`] and [`KongConfigBuilder`]
//! - Validated newtypes for the admin URL and admin token
//! - An async HTTP client that sends the admin token and workspace prefix
//! - [`AdminClient`] with verb helpers and offset-cursor pagination
//! - The [`Plugin`] entity and [`PluginService`] for the `/plugins` endpoints
//!
//! ## Quick Start
//!
//! ```rust
//! use kong_admin::{AdminToken, AdminUrl, KongConfig};
//!
//! let config = KongConfig::builder()
//!     .admin_url(AdminUrl::new("https://kong-admin.internal:8444").unwrap())
//!     .admin_token(AdminToken::new("secret-token").unwrap())
//!     .workspace("team-a")
//!     .page_size(200)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.workspace(), Some("team-a"));
//! assert_eq!(config.page_size(), 200);
//! ```
//!
//! ## Managing Plugins
//!
//! ```rust,ignore
//! use kong_admin::{AdminClient, EntityRef, KongConfig, Plugin};
//! use serde_json::json;
//!
//! let client = AdminClient::new(&KongConfig::builder().build()?)?;
//!
//! // Attach rate limiting to a service
//! let mut plugin = Plugin::new("rate-limiting");
//! plugin.service = Some(EntityRef::new("billing"));
//! plugin.config = json!({"minute": 20}).as_object().cloned();
//! let created = client.plugins().create(&plugin).await?;
//!
//! // Change it later; the service-scoped path is used
//! let mut updated = created.clone();
//! updated.enabled = Some(false);
//! client.plugins().update(&updated).await?;
//!
//! // Walk every page of the collection
//! for plugin in client.plugins().list_all().await? {
//!     println!("{:?} {:?}", plugin.name, plugin.scope());
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use kong_admin::rest::ResourceError;
//!
//! match client.plugins().get("").await {
//!     Err(ResourceError::InvalidArgument { argument, .. }) => {
//!         println!("{argument} is required");
//!     }
//!     Err(e) if e.is_not_found() => println!("no such plugin"),
//!     Err(e) => println!("request failed: {e}"),
//!     Ok(plugin) => println!("found {:?}", plugin.id),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: Every call is exactly the requests it documents

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AdminToken, AdminUrl, KongConfig, KongConfigBuilder, DEFAULT_PAGE_SIZE};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpResponseError,
    InvalidHttpRequestError,
};

// Re-export Admin client types
pub use clients::{AdminClient, AdminError, ListOpt};

// Re-export entity types
pub use rest::resources::{EntityRef, Plugin, PluginScope, PluginService};
pub use rest::ResourceError;
