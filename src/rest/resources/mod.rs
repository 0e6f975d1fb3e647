//! Admin API entity implementations.
//!
//! # Available Resources
//!
//! ## Plugin Resource
//!
//! Plugins run inside the gateway's request pipeline, globally or attached
//! to a service, route or consumer.
//!
//! ```rust,ignore
//! use kong_admin::rest::resources::Plugin;
//!
//! // Find a plugin by ID or name
//! let plugin = client.plugins().get("rate-limiting").await?;
//!
//! // Every plugin attached to a service
//! let plugins = client.plugins().list_all_for_service("billing").await?;
//!
//! // Every plugin tagged both "team-a" and "prod"
//! let tagged = client.plugins().list_all_with_tags(&["team-a", "prod"], true).await?;
//! ```

mod common;
mod plugin;

pub use common::EntityRef;
pub use plugin::{Plugin, PluginScope, PluginService};
