//! Offset-cursor pagination for Admin API collections.
//!
//! Kong pages collections with an opaque `offset` token. A list response
//! looks like:
//!
//! ```json
//! {
//!   "data": [ { "id": "..." }, { "id": "..." } ],
//!   "next": "/plugins?offset=WyJhYmMiXQ",
//!   "offset": "WyJhYmMiXQ"
//! }
//! ```
//!
//! `next` is `null` on the last page. [`ListOpt`] is the cursor passed
//! between successive calls: hand the returned value back to fetch the
//! following page, stop when `None` comes back.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Pagination and filtering options for a list call.
///
/// # Example
///
/// ```rust
/// use kong_admin::ListOpt;
///
/// let opt = ListOpt {
///     size: Some(100),
///     tags: vec!["team-a".to_string(), "prod".to_string()],
///     match_all_tags: true,
///     ..Default::default()
/// };
///
/// let query = opt.to_query();
/// assert_eq!(query.get("size"), Some(&"100".to_string()));
/// assert_eq!(query.get("tags"), Some(&"team-a,prod".to_string()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListOpt {
    /// Number of entities per page. The server default applies when unset.
    pub size: Option<u32>,
    /// Opaque cursor returned by the previous page.
    pub offset: Option<String>,
    /// Only return entities carrying these tags.
    pub tags: Vec<String>,
    /// Require every tag to match instead of any of them.
    pub match_all_tags: bool,
}

impl ListOpt {
    /// Creates options that only set the page size.
    #[must_use]
    pub const fn with_size(size: u32) -> Self {
        Self {
            size: Some(size),
            offset: None,
            tags: Vec::new(),
            match_all_tags: false,
        }
    }

    /// Converts the options into query parameters.
    ///
    /// Tags are joined with `,` when all of them must match and with `/`
    /// when any of them may match.
    #[must_use]
    pub fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();

        if let Some(size) = self.size {
            query.insert("size".to_string(), size.to_string());
        }
        if let Some(offset) = self.offset.as_deref().filter(|o| !o.is_empty()) {
            query.insert("offset".to_string(), offset.to_string());
        }
        if !self.tags.is_empty() {
            let separator = if self.match_all_tags { "," } else { "/" };
            query.insert("tags".to_string(), self.tags.join(separator));
        }

        query
    }
}

/// The page envelope returned by Admin API list endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse {
    #[serde(default, deserialize_with = "deserialize_data")]
    pub(crate) data: Vec<Value>,
    #[serde(default)]
    pub(crate) next: Option<String>,
    #[serde(default)]
    pub(crate) offset: Option<String>,
}

impl ListResponse {
    /// Builds the cursor for the following page, or `None` on the last page.
    ///
    /// The size and tag filter of the current request carry over.
    pub(crate) fn next_opt(&self, current: Option<&ListOpt>) -> Option<ListOpt> {
        let next = self.next.as_deref().filter(|n| !n.is_empty())?;

        let offset = self
            .offset
            .clone()
            .filter(|o| !o.is_empty())
            .or_else(|| extract_offset(next));

        let Some(offset) = offset else {
            tracing::warn!(next, "list page has a next link but no offset; stopping");
            return None;
        };

        let mut opt = current.cloned().unwrap_or_default();
        opt.offset = Some(offset);
        Some(opt)
    }
}

/// Older gateways encode an empty `data` array as `{}`.
fn deserialize_data<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(Value::Object(map)) if map.is_empty() => Ok(Vec::new()),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected an array for `data`, found {other}"
        ))),
    }
}

/// Extracts the `offset` parameter from a `next` link.
fn extract_offset(next: &str) -> Option<String> {
    let query_start = next.find('?')?;
    let query = &next[query_start + 1..];

    for param in query.split('&') {
        let mut parts = param.splitn(2, '=');
        if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
            if key == "offset" && !value.is_empty() {
                return urlencoding::decode(value)
                    .map(std::borrow::Cow::into_owned)
                    .ok();
            }
        }
    }

    None
}
