//! Path building infrastructure for Admin API entities.
//!
//! An entity can be reached through several URL templates. Plugins, for
//! example, are updated via:
//! - `services/{service_id}/plugins/{id}` (scoped to a service)
//! - `plugins/{id}` (global namespace)
//!
//! The path resolution system selects the most specific template whose
//! IDs are all available. If both `service_id` and `id` are known, the
//! nested template wins.
//!
//! # Example
//!
//! ```rust
//! use kong_admin::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use kong_admin::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Put,
//!         ResourceOperation::Update,
//!         &["service_id", "id"],
//!         "services/{service_id}/plugins/{id}",
//!     ),
//!     ResourcePath::new(
//!         HttpMethod::Put,
//!         ResourceOperation::Update,
//!         &["id"],
//!         "plugins/{id}",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Update, &["service_id", "id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("service_id", "svc1");
//! ids.insert("id", "abc");
//! assert_eq!(build_path(path.template, &ids), "services/svc1/plugins/abc");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on an Admin API entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch a single entity by ID or name.
    Find,
    /// List a collection, one page at a time.
    All,
    /// Create an entity, or upsert it when the caller picks the ID.
    Create,
    /// Replace an existing entity.
    Update,
    /// Delete an entity.
    Delete,
    /// Check an entity against its schema without persisting it.
    Validate,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Validate => "validate",
        }
    }
}

/// A path configuration for an entity operation.
///
/// Templates use `{id_name}` placeholders for ID interpolation:
/// - `plugins/{id}` - Single ID
/// - `services/{service_id}/plugins/{id}` - Multiple IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters (e.g., `["service_id", "id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Among the paths for `operation` whose required IDs are all available,
/// the one requiring the most IDs (the most specific) is returned.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL from a template by interpolating IDs.
///
/// Values are inserted as given; callers percent-encode them first.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const SCOPED_PATHS: &[ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "plugins"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["route_id"],
            "routes/{route_id}/plugins",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["service_id"],
            "services/{service_id}/plugins",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "plugins/{id}",
        ),
    ];

    #[test]
    fn test_operation_as_str() {
        assert_eq!(ResourceOperation::Find.as_str(), "find");
        assert_eq!(ResourceOperation::Validate.as_str(), "validate");
    }

    #[test]
    fn test_get_path_prefers_most_specific() {
        let path = get_path(SCOPED_PATHS, ResourceOperation::All, &["route_id"]).unwrap();
        assert_eq!(path.template, "routes/{route_id}/plugins");
    }

    #[test]
    fn test_get_path_falls_back_to_unscoped() {
        let path = get_path(SCOPED_PATHS, ResourceOperation::All, &[]).unwrap();
        assert_eq!(path.template, "plugins");

        let path = get_path(SCOPED_PATHS, ResourceOperation::All, &["consumer_id"]).unwrap();
        assert_eq!(path.template, "plugins");
    }

    #[test]
    fn test_get_path_returns_none_when_ids_missing() {
        assert!(get_path(SCOPED_PATHS, ResourceOperation::Delete, &[]).is_none());
        assert!(get_path(SCOPED_PATHS, ResourceOperation::Find, &["id"]).is_none());
    }

    #[test]
    fn test_build_path_interpolates_all_ids() {
        let mut ids = HashMap::new();
        ids.insert("service_id", "svc1");
        ids.insert("id", "abc");

        assert_eq!(
            build_path("services/{service_id}/plugins/{id}", &ids),
            "services/svc1/plugins/abc"
        );
    }

    #[test]
    fn test_build_path_leaves_unknown_placeholders() {
        let ids: HashMap<&str, &str> = HashMap::new();
        assert_eq!(build_path("plugins/{id}", &ids), "plugins/{id}");
    }

    #[test]
    fn test_resource_path_matches_ids() {
        let path = SCOPED_PATHS[2];
        assert!(path.matches_ids(&["service_id", "id"]));
        assert!(!path.matches_ids(&["id"]));
        assert_eq!(path.id_count(), 1);
    }
}
