pub mod components;
pub mod media_type;
pub mod operation;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod spec;

use crate::error::ParseError;
use spec::OpenApiSpec;

/// Parse an OpenAPI document from YAML.
pub fn from_yaml(input: &str) -> Result<OpenApiSpec, ParseError> {
    let spec: OpenApiSpec = serde_yaml_ng::from_str(input)?;
    validate_version(&spec)?;
    Ok(spec)
}

/// Parse an OpenAPI document from JSON.
pub fn from_json(input: &str) -> Result<OpenApiSpec, ParseError> {
    let spec: OpenApiSpec = serde_json::from_str(input)?;
    validate_version(&spec)?;
    Ok(spec)
}

/// Documents that omit `openapi` are accepted as-is.
fn validate_version(spec: &OpenApiSpec) -> Result<(), ParseError> {
    match spec.openapi.as_deref() {
        Some(version) if !version.starts_with("3.") => {
            Err(ParseError::UnsupportedVersion(version.to_string()))
        }
        _ => Ok(()),
    }
}
