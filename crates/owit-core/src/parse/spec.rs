use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::components::Components;
use super::operation::PathItem;

/// Info object describing the API.
///
/// `title` is optional at this layer so that an absent title surfaces as a
/// translation error rather than a deserialization failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Top-level OpenAPI 3.x document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpenApiSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,

    #[serde(default)]
    pub info: Info,

    /// `None` when the document has no `paths` key (or an explicit `null`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<IndexMap<String, PathItem>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
}
