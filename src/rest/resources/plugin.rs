//! Plugin resource implementation.
//!
//! This module provides the [`Plugin`] entity and [`PluginService`], the
//! client for the Admin API's `/plugins` endpoints.
//!
//! # Scoping
//!
//! A plugin either applies globally or is attached to an entity:
//! - `service` - runs for every request proxied to that service
//! - `route` - runs for requests matching that route
//! - `consumer` - runs for requests authenticated as that consumer
//!
//! # Example
//!
//! ```rust,ignore
//! use kong_admin::{AdminClient, KongConfig};
//! use kong_admin::rest::resources::{EntityRef, Plugin};
//! use serde_json::json;
//!
//! let client = AdminClient::new(&KongConfig::builder().build()?)?;
//!
//! let mut plugin = Plugin::new("rate-limiting");
//! plugin.service = Some(EntityRef::new("svc1"));
//! plugin.config = json!({"minute": 20}).as_object().cloned();
//!
//! if client.plugins().validate(&plugin).await? {
//!     let created = client.plugins().create(&plugin).await?;
//!     println!("created {:?}", created.id);
//! }
//!
//! let every_plugin = client.plugins().list_all().await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{AdminClient, ListOpt};
use crate::rest::resources::EntityRef;
use crate::rest::{ResourceError, ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

/// A plugin instance configured on the gateway.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `created_at` - Unix timestamp set by the server
///
/// ## Writable Fields
/// - `id` - Server-generated when absent on create
/// - `name` - The plugin type (e.g., `rate-limiting`)
/// - `service`, `route`, `consumer` - The entity the plugin is attached to
/// - `config` - Plugin-specific settings
/// - `enabled` - Whether the plugin runs
/// - `protocols` - Protocols the plugin applies to
/// - `tags` - Free-form labels used for filtering
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Plugin {
    /// The unique identifier of the plugin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The name of the plugin type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// When the plugin was created, in Unix seconds.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<i64>,

    /// The service the plugin is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<EntityRef>,

    /// The route the plugin is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<EntityRef>,

    /// The consumer the plugin is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer: Option<EntityRef>,

    /// Plugin-specific configuration. Its shape depends on `name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Map<String, Value>>,

    /// Whether the plugin is applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Protocols the plugin runs for (e.g., `http`, `grpc`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocols: Option<Vec<String>>,

    /// Tags attached to the plugin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// The entity a plugin applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginScope<'a> {
    /// Applies to every request.
    Global,
    /// Attached to the service with this ID.
    Service(&'a str),
    /// Attached to the route with this ID.
    Route(&'a str),
    /// Attached to the consumer with this ID.
    Consumer(&'a str),
}

impl Plugin {
    /// Creates a plugin of the given type with every other field unset.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns the creation time, if the server reported one.
    #[must_use]
    pub fn created_at_datetime(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .and_then(|seconds| DateTime::<Utc>::from_timestamp(seconds, 0))
    }

    /// Returns the entity this plugin is attached to.
    ///
    /// When several associations are set, the most specific one wins:
    /// consumer, then route, then service. References with an empty ID
    /// count as unset.
    #[must_use]
    pub fn scope(&self) -> PluginScope<'_> {
        fn id_of(reference: &Option<EntityRef>) -> Option<&str> {
            reference.as_ref().and_then(EntityRef::id)
        }

        if let Some(id) = id_of(&self.consumer) {
            PluginScope::Consumer(id)
        } else if let Some(id) = id_of(&self.route) {
            PluginScope::Route(id)
        } else if let Some(id) = id_of(&self.service) {
            PluginScope::Service(id)
        } else {
            PluginScope::Global
        }
    }

    /// Returns the key used to address this plugin on update.
    ///
    /// The ID if non-empty, else the name if non-empty.
    fn update_key(&self) -> Option<&str> {
        non_empty(self.id.as_deref()).or_else(|| non_empty(self.name.as_deref()))
    }
}

impl RestResource for Plugin {
    const NAME: &'static str = "Plugin";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "plugins"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Create,
            &["id"],
            "plugins/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "plugins/{id}"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "plugins/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["service_id", "id"],
            "services/{service_id}/plugins/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "plugins/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Validate,
            &[],
            "schemas/plugins/validate",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "plugins"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["consumer_id"],
            "consumers/{consumer_id}/plugins",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["service_id"],
            "services/{service_id}/plugins",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["route_id"],
            "routes/{route_id}/plugins",
        ),
    ];
}

/// Client for the `/plugins` endpoints.
///
/// Obtained from [`AdminClient::plugins`]. Every method is a single request,
/// except the `list_all*` family which follows the offset cursor until the
/// server reports no further page.
#[derive(Debug, Clone, Copy)]
pub struct PluginService<'a> {
    client: &'a AdminClient,
}

// Verify PluginService is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PluginService<'static>>();
    assert_send_sync::<Plugin>();
};

impl AdminClient {
    /// Returns the client for plugin operations.
    #[must_use]
    pub const fn plugins(&self) -> PluginService<'_> {
        PluginService::new(self)
    }
}

impl<'a> PluginService<'a> {
    /// Creates a plugin service on top of an Admin client.
    #[must_use]
    pub const fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Creates a plugin.
    ///
    /// With a non-empty `id` the plugin is upserted via `PUT /plugins/{id}`,
    /// otherwise it is created via `POST /plugins` and the server picks the
    /// ID. Returns the plugin as stored by the server.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] or [`ResourceError::Admin`] when the
    /// request fails, and [`ResourceError::Decode`] when the response is not
    /// a plugin.
    pub async fn create(&self, plugin: &Plugin) -> Result<Plugin, ResourceError> {
        let mut ids = Vec::new();
        if let Some(id) = non_empty(plugin.id.as_deref()) {
            ids.push(("id", id));
        }

        let (path, url) = Plugin::resolve_path(ResourceOperation::Create, &ids)?;
        let response = self
            .client
            .request(path.http_method, &url, Some(plugin.to_body()?), None)
            .await?;

        Plugin::from_body(response.body)
    }

    /// Fetches a plugin by ID or name.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] if `id_or_name` is empty.
    /// A missing plugin surfaces as an HTTP error for which
    /// [`ResourceError::is_not_found`] is `true`.
    pub async fn get(&self, id_or_name: &str) -> Result<Plugin, ResourceError> {
        require("id_or_name", id_or_name, "get")?;

        let (path, url) = Plugin::resolve_path(ResourceOperation::Find, &[("id", id_or_name)])?;
        let response = self
            .client
            .request(path.http_method, &url, None, None)
            .await?;

        Plugin::from_body(response.body)
    }

    /// Replaces a plugin.
    ///
    /// The plugin is addressed by its ID, or by its name when the ID is
    /// empty. Plugins attached to a service are updated under that service.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] if neither the ID nor the
    /// name is set; nothing is sent in that case.
    pub async fn update(&self, plugin: &Plugin) -> Result<Plugin, ResourceError> {
        let key = plugin.update_key().ok_or(ResourceError::InvalidArgument {
            argument: "id or name",
            operation: "update",
        })?;

        let mut ids = vec![("id", key)];
        if let Some(service_id) = plugin.service.as_ref().and_then(EntityRef::id) {
            ids.push(("service_id", service_id));
        }

        let (path, url) = Plugin::resolve_path(ResourceOperation::Update, &ids)?;
        let response = self
            .client
            .request(path.http_method, &url, Some(plugin.to_body()?), None)
            .await?;

        Plugin::from_body(response.body)
    }

    /// Deletes a plugin by ID or name.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] if `id_or_name` is empty.
    pub async fn delete(&self, id_or_name: &str) -> Result<(), ResourceError> {
        require("id_or_name", id_or_name, "delete")?;

        let (path, url) = Plugin::resolve_path(ResourceOperation::Delete, &[("id", id_or_name)])?;
        self.client.request(path.http_method, &url, None, None).await?;

        Ok(())
    }

    /// Checks a plugin against its schema without persisting it.
    ///
    /// Returns `true` only when the server answers `201 Created`; any other
    /// success status yields `false`.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error for transport failures and non-2xx responses,
    /// including the `400` Kong sends for schema violations.
    pub async fn validate(&self, plugin: &Plugin) -> Result<bool, ResourceError> {
        let (path, url) = Plugin::resolve_path(ResourceOperation::Validate, &[])?;
        let response = self
            .client
            .request(path.http_method, &url, Some(plugin.to_body()?), None)
            .await?;

        Ok(response.is_created())
    }

    /// Fetches one page of plugins.
    ///
    /// Pass the returned cursor back to fetch the following page; `None`
    /// means this was the last one.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if an item is not a plugin, and
    /// the request errors otherwise.
    pub async fn list(
        &self,
        opt: Option<&ListOpt>,
    ) -> Result<(Vec<Plugin>, Option<ListOpt>), ResourceError> {
        let (_, url) = Plugin::resolve_path(ResourceOperation::All, &[])?;
        self.list_by_path(&url, opt).await
    }

    /// Fetches every plugin.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while paging; no partial result is kept.
    pub async fn list_all(&self) -> Result<Vec<Plugin>, ResourceError> {
        self.list_all_for(&[]).await
    }

    /// Fetches every plugin carrying the given tags.
    ///
    /// With `match_all` every tag must be present, otherwise any one of
    /// them is enough.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while paging; no partial result is kept.
    pub async fn list_all_with_tags<S: AsRef<str>>(
        &self,
        tags: &[S],
        match_all: bool,
    ) -> Result<Vec<Plugin>, ResourceError> {
        let (_, url) = Plugin::resolve_path(ResourceOperation::All, &[])?;

        let mut opt = self.first_page();
        opt.tags = tags.iter().map(|t| t.as_ref().to_string()).collect();
        opt.match_all_tags = match_all;

        self.list_all_by_path(&url, opt).await
    }

    /// Fetches every plugin attached to a consumer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] if `consumer_id_or_name`
    /// is empty; nothing is sent in that case.
    pub async fn list_all_for_consumer(
        &self,
        consumer_id_or_name: &str,
    ) -> Result<Vec<Plugin>, ResourceError> {
        require(
            "consumer_id_or_name",
            consumer_id_or_name,
            "list_all_for_consumer",
        )?;
        self.list_all_for(&[("consumer_id", consumer_id_or_name)]).await
    }

    /// Fetches every plugin attached to a service.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] if `service_id_or_name`
    /// is empty; nothing is sent in that case.
    pub async fn list_all_for_service(
        &self,
        service_id_or_name: &str,
    ) -> Result<Vec<Plugin>, ResourceError> {
        require(
            "service_id_or_name",
            service_id_or_name,
            "list_all_for_service",
        )?;
        self.list_all_for(&[("service_id", service_id_or_name)]).await
    }

    /// Fetches every plugin attached to a route.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] if `route_id_or_name` is
    /// empty; nothing is sent in that case.
    pub async fn list_all_for_route(
        &self,
        route_id_or_name: &str,
    ) -> Result<Vec<Plugin>, ResourceError> {
        require("route_id_or_name", route_id_or_name, "list_all_for_route")?;
        self.list_all_for(&[("route_id", route_id_or_name)]).await
    }

    fn first_page(&self) -> ListOpt {
        ListOpt::with_size(self.client.page_size())
    }

    async fn list_all_for(
        &self,
        ids: &[(&'static str, &str)],
    ) -> Result<Vec<Plugin>, ResourceError> {
        let (_, url) = Plugin::resolve_path(ResourceOperation::All, ids)?;
        self.list_all_by_path(&url, self.first_page()).await
    }

    async fn list_by_path(
        &self,
        url: &str,
        opt: Option<&ListOpt>,
    ) -> Result<(Vec<Plugin>, Option<ListOpt>), ResourceError> {
        let (items, next) = self.client.list(url, opt).await?;
        Ok((Plugin::from_items(items)?, next))
    }

    /// Follows the offset cursor from `first` until no page follows.
    ///
    /// A short page does not end the scan; only a missing cursor does.
    async fn list_all_by_path(
        &self,
        url: &str,
        first: ListOpt,
    ) -> Result<Vec<Plugin>, ResourceError> {
        let mut plugins = Vec::new();
        let mut opt = Some(first);

        while let Some(current) = opt {
            let (page, next) = self.list_by_path(url, Some(&current)).await?;

            tracing::debug!(
                path = url,
                count = page.len(),
                more = next.is_some(),
                "fetched plugin page"
            );

            plugins.extend(page);
            opt = next;
        }

        Ok(plugins)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn require(
    argument: &'static str,
    value: &str,
    operation: &'static str,
) -> Result<(), ResourceError> {
    if value.is_empty() {
        return Err(ResourceError::InvalidArgument {
            argument,
            operation,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;
    use serde_json::json;

    #[test]
    fn test_plugin_serialization_omits_unset_fields() {
        let plugin = Plugin::new("key-auth");

        assert_eq!(serde_json::to_value(&plugin).unwrap(), json!({"name": "key-auth"}));
    }

    #[test]
    fn test_plugin_serialization_skips_read_only_fields() {
        let plugin = Plugin {
            id: Some("p1".to_string()),
            created_at: Some(1_700_000_000),
            enabled: Some(false),
            ..Plugin::new("cors")
        };

        let body = serde_json::to_value(&plugin).unwrap();

        assert_eq!(body, json!({"id": "p1", "name": "cors", "enabled": false}));
    }

    #[test]
    fn test_plugin_deserializes_kong_response() {
        let plugin: Plugin = serde_json::from_value(json!({
            "id": "4d924084-1adb-40a5-c042-63b19db421d1",
            "name": "rate-limiting",
            "created_at": 1422386534,
            "service": {"id": "svc1"},
            "route": null,
            "consumer": null,
            "config": {"minute": 20, "hour": 500},
            "enabled": true,
            "protocols": ["http", "https"],
            "tags": ["user-level", "low-priority"]
        }))
        .unwrap();

        assert_eq!(plugin.name.as_deref(), Some("rate-limiting"));
        assert_eq!(plugin.service, Some(EntityRef::new("svc1")));
        assert!(plugin.route.is_none());
        assert!(plugin.consumer.is_none());
        assert_eq!(plugin.config.unwrap().get("minute"), Some(&json!(20)));
        assert_eq!(plugin.enabled, Some(true));
        assert_eq!(plugin.protocols.unwrap().len(), 2);
        assert_eq!(plugin.tags.unwrap()[0], "user-level");
    }

    #[test]
    fn test_plugin_deserialization_rejects_wrong_types() {
        let result = serde_json::from_value::<Plugin>(json!({"name": "cors", "enabled": "yes"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_created_at_datetime_converts_seconds() {
        let plugin = Plugin {
            created_at: Some(1422386534),
            ..Plugin::default()
        };

        let created = plugin.created_at_datetime().unwrap();
        assert_eq!(created.timestamp(), 1422386534);
        assert!(Plugin::default().created_at_datetime().is_none());
    }

    #[test]
    fn test_scope_reports_attachment() {
        assert_eq!(Plugin::new("cors").scope(), PluginScope::Global);

        let mut plugin = Plugin::new("cors");
        plugin.service = Some(EntityRef::new("svc1"));
        assert_eq!(plugin.scope(), PluginScope::Service("svc1"));

        plugin.route = Some(EntityRef::new("r1"));
        assert_eq!(plugin.scope(), PluginScope::Route("r1"));

        plugin.consumer = Some(EntityRef::new("c1"));
        assert_eq!(plugin.scope(), PluginScope::Consumer("c1"));
    }

    #[test]
    fn test_scope_ignores_empty_references() {
        let plugin = Plugin {
            service: Some(EntityRef::default()),
            route: Some(EntityRef::new("")),
            ..Plugin::new("cors")
        };

        assert_eq!(plugin.scope(), PluginScope::Global);
    }

    #[test]
    fn test_update_key_prefers_id_over_name() {
        let mut plugin = Plugin::new("rate-limiting");
        assert_eq!(plugin.update_key(), Some("rate-limiting"));

        plugin.id = Some("p1".to_string());
        assert_eq!(plugin.update_key(), Some("p1"));

        plugin.id = Some(String::new());
        assert_eq!(plugin.update_key(), Some("rate-limiting"));

        assert_eq!(Plugin::default().update_key(), None);
    }

    #[test]
    fn test_plugin_paths_cover_every_operation() {
        let cases: &[(ResourceOperation, &[&str], HttpMethod, &str)] = &[
            (ResourceOperation::Create, &[], HttpMethod::Post, "plugins"),
            (ResourceOperation::Create, &["id"], HttpMethod::Put, "plugins/{id}"),
            (ResourceOperation::Find, &["id"], HttpMethod::Get, "plugins/{id}"),
            (ResourceOperation::Update, &["id"], HttpMethod::Put, "plugins/{id}"),
            (
                ResourceOperation::Update,
                &["service_id", "id"],
                HttpMethod::Put,
                "services/{service_id}/plugins/{id}",
            ),
            (ResourceOperation::Delete, &["id"], HttpMethod::Delete, "plugins/{id}"),
            (
                ResourceOperation::Validate,
                &[],
                HttpMethod::Post,
                "schemas/plugins/validate",
            ),
            (
                ResourceOperation::All,
                &["consumer_id"],
                HttpMethod::Get,
                "consumers/{consumer_id}/plugins",
            ),
        ];

        for (operation, ids, method, template) in cases {
            let path = get_path(Plugin::PATHS, *operation, ids).unwrap();
            assert_eq!(path.http_method, *method, "{operation:?} {ids:?}");
            assert_eq!(path.template, *template, "{operation:?} {ids:?}");
        }
    }

    #[test]
    fn test_resolve_path_encodes_names() {
        let (_, url) =
            Plugin::resolve_path(ResourceOperation::Find, &[("id", "my plugin/v2")]).unwrap();
        assert_eq!(url, "plugins/my%20plugin%2Fv2");
    }

    #[test]
    fn test_require_rejects_empty_values() {
        assert!(require("id_or_name", "p1", "get").is_ok());
        assert!(matches!(
            require("id_or_name", "", "delete"),
            Err(ResourceError::InvalidArgument {
                argument: "id_or_name",
                operation: "delete"
            })
        ));
    }
}
