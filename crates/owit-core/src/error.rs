use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported OpenAPI version: {0}")]
    UnsupportedVersion(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

#[derive(Debug, Error)]
pub enum TranslateError {
    /// The document cannot produce a well-formed world declaration.
    #[error("invalid document: missing required field `{0}`")]
    MissingField(&'static str),

    /// Only raised in strict mode; otherwise reported as a diagnostic.
    #[error("unresolved reference `{reference}` in {function}")]
    UnresolvedReference { function: String, reference: String },
}
