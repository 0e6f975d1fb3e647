//! Admin API client for Kong.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that offers verb helpers and
//! offset-cursor pagination for the Kong Admin API.
//!
//! # Overview
//!
//! - [`AdminClient`]: The client with `get()`, `post()`, `put()`, `delete()` and `list()`
//! - [`AdminError`]: Error type for Admin API operations
//! - [`ListOpt`]: The pagination cursor passed between list calls
//!
//! # Example
//!
//! ```rust,ignore
//! use kong_admin::{AdminClient, KongConfig, ListOpt};
//!
//! let client = AdminClient::new(&KongConfig::builder().build()?)?;
//!
//! let mut opt = Some(ListOpt::with_size(100));
//! while let Some(current) = opt {
//!     let (items, next) = client.list("plugins", Some(&current)).await?;
//!     println!("{} items", items.len());
//!     opt = next;
//! }
//! ```
//!
//! # Path Normalization
//!
//! Leading slashes are stripped (`/plugins` -> `plugins`) and the path is
//! appended to the admin URL plus the workspace prefix, if any.

mod client;
mod errors;
mod list;

pub use client::AdminClient;
pub use errors::AdminError;
pub use list::ListOpt;
