//! Types shared between Admin API entities.

use serde::{Deserialize, Serialize};

/// A reference to another entity by its ID.
///
/// Kong encodes associations as `{"id": "..."}` in both directions.
///
/// # Example
///
/// ```rust
/// use kong_admin::rest::resources::EntityRef;
///
/// let service = EntityRef::new("svc1");
/// assert_eq!(service.id(), Some("svc1"));
/// assert_eq!(serde_json::to_value(&service).unwrap(), serde_json::json!({"id": "svc1"}));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EntityRef {
    /// The ID of the referenced entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl EntityRef {
    /// Creates a reference to the entity with the given ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }

    /// Returns the referenced ID, treating an empty string as unset.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}
