use log::info;

use crate::error::TranslateError;
use crate::ir::WitDocument;
use crate::parse::spec::OpenApiSpec;

use super::diagnostics::Diagnostic;
use super::records::build_records;
use super::world::WorldBuilder;

/// Options controlling translation.
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// Overrides the world name derived from the lower-cased `info.title`.
    pub world_name: Option<String>,
    /// Fail on the first unresolved reference instead of reporting it.
    pub strict: bool,
}

/// The translated document plus everything worth telling the caller about it.
#[derive(Debug, Clone)]
pub struct Translation {
    pub document: WitDocument,
    pub diagnostics: Vec<Diagnostic>,
}

/// Translate a parsed OpenAPI document into the WIT IR.
pub fn translate(spec: &OpenApiSpec) -> Result<Translation, TranslateError> {
    translate_with_options(spec, &TranslateOptions::default())
}

/// Translate with explicit options.
pub fn translate_with_options(
    spec: &OpenApiSpec,
    options: &TranslateOptions,
) -> Result<Translation, TranslateError> {
    // Phase 1: Required fields
    let title = spec
        .info
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or(TranslateError::MissingField("info.title"))?;
    let paths = spec
        .paths
        .as_ref()
        .ok_or(TranslateError::MissingField("paths"))?;

    // A blank override falls back to the title like an absent one.
    let world_name = options
        .world_name
        .as_deref()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map_or_else(|| title.to_lowercase(), str::to_string);

    // Phase 2: Component schemas to records
    let schemas = spec.components.as_ref().map(|c| &c.schemas);
    let records = schemas.map(build_records).unwrap_or_default();

    // Phase 3: Paths to world functions
    let (world, diagnostics) = WorldBuilder::new(schemas).build(world_name, paths);

    if options.strict {
        if let Some(Diagnostic::UnresolvedReference {
            function,
            reference,
            ..
        }) = diagnostics.first()
        {
            return Err(TranslateError::UnresolvedReference {
                function: function.clone(),
                reference: reference.clone(),
            });
        }
    }

    info!(
        "translated {title:?}: {} record(s), {} function(s), {} diagnostic(s)",
        records.len(),
        world.functions.len(),
        diagnostics.len()
    );

    Ok(Translation {
        document: WitDocument { records, world },
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::parse::operation::PathItem;
    use crate::parse::spec::Info;

    fn spec_with(title: Option<&str>, paths: Option<IndexMap<String, PathItem>>) -> OpenApiSpec {
        OpenApiSpec {
            info: Info {
                title: title.map(str::to_string),
                ..Default::default()
            },
            paths,
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_title() {
        let spec = spec_with(None, Some(IndexMap::new()));
        assert!(matches!(
            translate(&spec),
            Err(TranslateError::MissingField("info.title"))
        ));
    }

    #[test]
    fn test_blank_title_counts_as_missing() {
        let spec = spec_with(Some("  "), Some(IndexMap::new()));
        assert!(matches!(
            translate(&spec),
            Err(TranslateError::MissingField("info.title"))
        ));
    }

    #[test]
    fn test_missing_paths() {
        let spec = spec_with(Some("Api"), None);
        assert!(matches!(
            translate(&spec),
            Err(TranslateError::MissingField("paths"))
        ));
    }

    #[test]
    fn test_empty_paths_give_empty_world() {
        let spec = spec_with(Some("MyApi"), Some(IndexMap::new()));
        let translation = translate(&spec).unwrap();
        assert_eq!(translation.document.world.name, "myapi");
        assert!(translation.document.world.functions.is_empty());
        assert!(translation.document.records.is_empty());
        assert!(translation.diagnostics.is_empty());
    }

    #[test]
    fn test_world_name_override() {
        let spec = spec_with(Some("MyApi"), Some(IndexMap::new()));
        let options = TranslateOptions {
            world_name: Some("custom".to_string()),
            strict: false,
        };
        let translation = translate_with_options(&spec, &options).unwrap();
        assert_eq!(translation.document.world.name, "custom");
    }

    #[test]
    fn test_blank_world_name_override_falls_back_to_title() {
        let spec = spec_with(Some("MyApi"), Some(IndexMap::new()));
        for blank in ["", "   "] {
            let options = TranslateOptions {
                world_name: Some(blank.to_string()),
                strict: false,
            };
            let translation = translate_with_options(&spec, &options).unwrap();
            assert_eq!(translation.document.world.name, "myapi");
        }
    }

    #[test]
    fn test_override_does_not_excuse_missing_title() {
        let spec = spec_with(None, Some(IndexMap::new()));
        let options = TranslateOptions {
            world_name: Some("custom".to_string()),
            strict: false,
        };
        assert!(translate_with_options(&spec, &options).is_err());
    }
}
