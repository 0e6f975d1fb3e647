//! Resource trait for Admin API entities.
//!
//! This module defines the [`RestResource`] trait, which ties an entity type
//! to its path table and to the JSON encoding used on the wire. Entity
//! services (such as [`PluginService`](crate::rest::resources::PluginService))
//! use it to resolve URLs and to decode response bodies.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct with serde derives
//! 2. Implement `RestResource` with a name and a path table
//! 3. Build the service on top of `resolve_path`, `to_body` and `from_body`
//!
//! # Example
//!
//! ```rust
//! use kong_admin::rest::{ResourceOperation, ResourcePath, RestResource};
//! use kong_admin::HttpMethod;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Upstream {
//!     id: Option<String>,
//!     name: String,
//! }
//!
//! impl RestResource for Upstream {
//!     const NAME: &'static str = "Upstream";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "upstreams/{id}"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "upstreams"),
//!     ];
//! }
//!
//! let (path, url) = Upstream::resolve_path(ResourceOperation::Find, &[("id", "a b")]).unwrap();
//! assert_eq!(path.http_method, HttpMethod::Get);
//! assert_eq!(url, "upstreams/a%20b");
//! ```

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::rest::{build_path, get_path, ResourceError, ResourceOperation, ResourcePath};

/// An Admin API entity with a known set of URL templates.
///
/// # Associated Constants
///
/// - `NAME`: The singular entity name (e.g., "Plugin"), used in errors and logs
/// - `PATHS`: Available paths for different operations
///
/// # Required Bounds
///
/// Entities must be serializable, deserializable, cloneable, and thread-safe.
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The singular name of the entity (e.g., "Plugin").
    const NAME: &'static str;

    /// Available paths for this entity.
    ///
    /// The path selection logic chooses the most specific path that
    /// matches the available IDs.
    const PATHS: &'static [ResourcePath];

    /// Resolves the path for `operation` from the given `(name, value)` IDs.
    ///
    /// ID values are percent-encoded before interpolation, so names that
    /// contain spaces or slashes stay within a single path segment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no path for the
    /// operation can be built from the given IDs.
    fn resolve_path(
        operation: ResourceOperation,
        ids: &[(&'static str, &str)],
    ) -> Result<(&'static ResourcePath, String), ResourceError> {
        let available_ids: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();
        let path = get_path(Self::PATHS, operation, &available_ids).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: operation.as_str(),
            },
        )?;

        let encoded: HashMap<&str, String> = ids
            .iter()
            .map(|(name, value)| (*name, urlencoding::encode(value).into_owned()))
            .collect();

        Ok((path, build_path(path.template, &encoded)))
    }

    /// Encodes the entity as a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialize`] if the entity cannot be encoded.
    fn to_body(&self) -> Result<Value, ResourceError> {
        serde_json::to_value(self).map_err(|source| ResourceError::Serialize {
            resource: Self::NAME,
            source,
        })
    }

    /// Decodes an entity from a JSON response body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body does not match the
    /// entity's shape.
    fn from_body(body: Value) -> Result<Self, ResourceError> {
        serde_json::from_value(body).map_err(|source| ResourceError::Decode {
            resource: Self::NAME,
            source,
        })
    }

    /// Decodes a page of raw items, failing on the first bad item.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] for the first item that does not
    /// match the entity's shape.
    fn from_items(items: Vec<Value>) -> Result<Vec<Self>, ResourceError> {
        items.into_iter().map(Self::from_body).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct MockTarget {
        id: Option<String>,
        weight: u32,
    }

    impl RestResource for MockTarget {
        const NAME: &'static str = "Target";
        const PATHS: &'static [ResourcePath] = &[
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::All,
                &["upstream_id"],
                "upstreams/{upstream_id}/targets",
            ),
            ResourcePath::new(
                HttpMethod::Delete,
                ResourceOperation::Delete,
                &["upstream_id", "id"],
                "upstreams/{upstream_id}/targets/{id}",
            ),
        ];
    }

    #[test]
    fn test_resolve_path_interpolates_nested_ids() {
        let (path, url) = MockTarget::resolve_path(
            ResourceOperation::Delete,
            &[("upstream_id", "up1"), ("id", "t1")],
        )
        .unwrap();

        assert_eq!(path.http_method, HttpMethod::Delete);
        assert_eq!(url, "upstreams/up1/targets/t1");
    }

    #[test]
    fn test_resolve_path_percent_encodes_values() {
        let (_, url) =
            MockTarget::resolve_path(ResourceOperation::All, &[("upstream_id", "a/b c")]).unwrap();

        assert_eq!(url, "upstreams/a%2Fb%20c/targets");
    }

    #[test]
    fn test_resolve_path_fails_without_required_ids() {
        let result = MockTarget::resolve_path(ResourceOperation::All, &[]);

        assert!(matches!(
            result,
            Err(ResourceError::PathResolutionFailed {
                resource: "Target",
                operation: "all"
            })
        ));
    }

    #[test]
    fn test_from_items_decodes_in_order() {
        let items = vec![
            json!({"id": "t1", "weight": 100}),
            json!({"id": "t2", "weight": 0}),
        ];

        let targets = MockTarget::from_items(items).unwrap();

        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].id.as_deref(), Some("t1"));
        assert_eq!(targets[1].weight, 0);
    }

    #[test]
    fn test_from_items_fails_on_bad_item() {
        let items = vec![
            json!({"id": "t1", "weight": 100}),
            json!({"id": "t2", "weight": "heavy"}),
        ];

        let result = MockTarget::from_items(items);

        assert!(matches!(
            result,
            Err(ResourceError::Decode {
                resource: "Target",
                ..
            })
        ));
    }

    #[test]
    fn test_to_body_encodes_fields() {
        let target = MockTarget {
            id: None,
            weight: 50,
        };

        assert_eq!(target.to_body().unwrap(), json!({"id": null, "weight": 50}));
    }
}
