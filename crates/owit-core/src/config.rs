use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::transform::TranslateOptions;

/// Top-level project configuration loaded from `.owit.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OwitConfig {
    /// OpenAPI document to read (YAML, or JSON by `.json` extension).
    pub input: String,
    /// Where the WIT document is written. `-` means stdout.
    pub output: String,
    /// World name override; defaults to the lower-cased API title.
    pub world: Option<String>,
    /// Treat unresolved references as errors.
    pub strict: bool,
}

impl Default for OwitConfig {
    fn default() -> Self {
        Self {
            input: "openapi.yaml".to_string(),
            output: "wit/world.wit".to_string(),
            world: None,
            strict: false,
        }
    }
}

impl OwitConfig {
    pub fn translate_options(&self) -> TranslateOptions {
        TranslateOptions {
            world_name: self.world.clone(),
            strict: self.strict,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".owit.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<OwitConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config: OwitConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# owit configuration
input: openapi.yaml
output: wit/world.wit   # use "-" to print to stdout

# world: my-api         # defaults to the lower-cased info.title
strict: false           # fail when a response $ref names an undeclared schema
"#
}
