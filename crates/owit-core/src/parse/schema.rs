use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The `type` field can be a single type or, since OpenAPI 3.1, an array of types.
///
/// Type names are kept as plain strings: anything the document says is
/// accepted here and left for the type mapper to interpret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeSet {
    /// The type that drives mapping: the first non-`null` entry.
    pub fn primary(&self) -> &str {
        match self {
            TypeSet::Single(name) => name.as_str(),
            TypeSet::Multiple(names) => names
                .iter()
                .find(|n| n.as_str() != "null")
                .or_else(|| names.first())
                .map(String::as_str)
                .unwrap_or(""),
        }
    }
}

/// The subset of a JSON Schema object that the translator reads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<TypeSet>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,

    /// Declared property order is significant: it becomes field order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
}

impl Schema {
    /// The primary type name, or `""` when the schema carries no `type`.
    pub fn type_name(&self) -> &str {
        self.schema_type.as_ref().map(TypeSet::primary).unwrap_or("")
    }

    /// The referenced name: everything after the last `/` of `$ref`.
    pub fn ref_name(&self) -> Option<&str> {
        self.ref_path
            .as_deref()
            .map(|path| path.rsplit('/').next().unwrap_or(path))
    }
}
