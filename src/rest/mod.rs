//! Entity infrastructure for the Kong Admin API.
//!
//! This module provides:
//!
//! - **[`RestResource`] trait**: ties an entity to its path table and JSON encoding
//! - **Path building**: multiple path support for scoped entities
//! - **[`ResourceError`]**: error type for entity operations
//! - **[`resources`]**: entity types and their services (e.g., [`resources::Plugin`])
//!
//! # Example
//!
//! ```rust,ignore
//! use kong_admin::{AdminClient, KongConfig};
//! use kong_admin::rest::resources::Plugin;
//!
//! let client = AdminClient::new(&KongConfig::builder().build()?)?;
//!
//! // Create a global plugin
//! let created = client.plugins().create(&Plugin::new("correlation-id")).await?;
//!
//! // Fetch every plugin attached to a route
//! let plugins = client.plugins().list_all_for_route("my-route").await?;
//! for plugin in &plugins {
//!     println!("- {:?}", plugin.name);
//! }
//!
//! // Delete it again
//! client.plugins().delete(created.id.as_deref().unwrap_or_default()).await?;
//! ```

mod errors;
mod path;
mod resource;

pub mod resources;

// Public exports
pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::RestResource;
