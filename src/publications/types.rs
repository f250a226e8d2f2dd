//! Domain values exchanged with the publications API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sales channel a product can be made visible on.
///
/// Publications are only ever produced by decoding API responses; `gid`
/// is aliased from the GraphQL `id` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Global identifier, e.g. `gid://shopify/Publication/1`.
    pub gid: String,
    /// Display name, e.g. `Online Store`.
    pub name: String,
}

/// A global identifier of the form `gid://shopify/<Type>/<id>`.
///
/// # Example
///
/// ```rust
/// use shopify_publisher::publications::Gid;
///
/// assert_eq!(Gid::product("632910392").to_string(), "gid://shopify/Product/632910392");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gid {
    resource: &'static str,
    id: String,
}

impl Gid {
    /// Builds the global identifier of a product.
    ///
    /// The id is used as given; a malformed id surfaces remotely as a
    /// missing product or a GraphQL error.
    #[must_use]
    pub fn product(id: impl Into<String>) -> Self {
        Self {
            resource: "Product",
            id: id.into(),
        }
    }
}

impl fmt::Display for Gid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gid://shopify/{}/{}", self.resource, self.id)
    }
}

/// A validation failure returned inside a mutation payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserError {
    /// Path to the offending input field, when the API supplies one.
    #[serde(default)]
    pub field: Option<Vec<String>>,
    /// Human-readable reason.
    pub message: String,
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) if !field.is_empty() => write!(f, "{}: {}", field.join("."), self.message),
            _ => f.write_str(&self.message),
        }
    }
}
