use heck::ToUpperCamelCase;
use indexmap::IndexMap;
use log::{debug, warn};

use crate::ir::{HttpMethod, WitField, WitFunction, WitType, WitWorld};
use crate::parse::operation::{Operation, PathItem};
use crate::parse::schema::Schema;

use super::diagnostics::Diagnostic;
use super::type_mapper::map_schema;

/// Status code whose body becomes the function's return type.
const SUCCESS_STATUS: &str = "200";

/// Derive a function name from HTTP method + path.
///
/// The method is title-cased, the path is trimmed of slashes, and each
/// segment has its first character upper-cased before the segments are
/// joined with `_`. Path-parameter braces are kept.
///
/// Examples:
/// - `GET /pets` → `GetPets`
/// - `POST /users/{id}` → `PostUsers_{id}`
/// - `DELETE /store/order/{orderId}` → `DeleteStore_Order_{orderId}`
pub fn function_name(method: HttpMethod, path: &str) -> String {
    let prefix = method.as_str().to_upper_camel_case();
    let suffix = path
        .trim_matches('/')
        .split('/')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("_");
    format!("{prefix}{suffix}")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Look up the operation a path item declares for `method`.
pub fn operation_for(item: &PathItem, method: HttpMethod) -> Option<&Operation> {
    match method {
        HttpMethod::Get => item.get.as_ref(),
        HttpMethod::Post => item.post.as_ref(),
        HttpMethod::Put => item.put.as_ref(),
        HttpMethod::Delete => item.delete.as_ref(),
        HttpMethod::Patch => item.patch.as_ref(),
        HttpMethod::Options => item.options.as_ref(),
        HttpMethod::Head => item.head.as_ref(),
        HttpMethod::Trace => item.trace.as_ref(),
    }
}

/// Builds the world block, collecting diagnostics for dangling `$ref`
/// return types along the way.
pub struct WorldBuilder<'a> {
    schemas: Option<&'a IndexMap<String, Schema>>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> WorldBuilder<'a> {
    /// `schemas` are the names return-type references are checked against.
    pub fn new(schemas: Option<&'a IndexMap<String, Schema>>) -> Self {
        Self {
            schemas,
            diagnostics: Vec::new(),
        }
    }

    /// Emit one function per (path, method) pair: paths sorted
    /// lexicographically, methods in `HttpMethod::PRIORITY` order.
    pub fn build(
        mut self,
        name: impl Into<String>,
        paths: &IndexMap<String, PathItem>,
    ) -> (WitWorld, Vec<Diagnostic>) {
        let mut sorted: Vec<(&String, &PathItem)> = paths.iter().collect();
        sorted.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut functions = Vec::new();
        for (path, item) in sorted {
            for method in HttpMethod::PRIORITY {
                if let Some(op) = operation_for(item, method) {
                    functions.push(self.build_function(method, path, op));
                }
            }
        }

        let world = WitWorld {
            name: name.into(),
            functions,
        };
        (world, self.diagnostics)
    }

    fn build_function(&mut self, method: HttpMethod, path: &str, op: &Operation) -> WitFunction {
        let name = function_name(method, path);
        let params = build_params(op);
        let returns = self.resolve_return(&name, method, path, op);

        debug!(
            "{method} {path} -> {name} ({} param(s), returns {})",
            params.len(),
            returns
                .as_ref()
                .map_or_else(|| "nothing".to_string(), ToString::to_string)
        );

        WitFunction {
            name,
            method,
            path: path.to_string(),
            params,
            returns,
        }
    }

    /// The `200` response's first media type decides the return type: a
    /// `$ref` yields the referenced name verbatim, anything else is mapped.
    fn resolve_return(
        &mut self,
        function: &str,
        method: HttpMethod,
        path: &str,
        op: &Operation,
    ) -> Option<WitType> {
        let response = op.responses.get(SUCCESS_STATUS)?;
        let (_, media) = response.content.first()?;
        let schema = media.schema.as_ref()?;

        if let (Some(reference), Some(name)) = (schema.ref_path.as_deref(), schema.ref_name()) {
            if !self.is_declared(name) {
                warn!("{function} ({method} {path}): unresolved reference {reference}");
                self.diagnostics.push(Diagnostic::UnresolvedReference {
                    function: function.to_string(),
                    method,
                    path: path.to_string(),
                    reference: reference.to_string(),
                });
            }
            return Some(WitType::Named(name.to_string()));
        }

        Some(map_schema(schema).into())
    }

    fn is_declared(&self, name: &str) -> bool {
        self.schemas.is_some_and(|schemas| schemas.contains_key(name))
    }
}

/// Parameters come from the properties of the request body's first
/// declared media type, in declared order.
fn build_params(op: &Operation) -> Vec<WitField> {
    op.request_body
        .as_ref()
        .and_then(|body| body.first_media_type())
        .and_then(|(_, media)| media.schema.as_ref())
        .map(|schema| {
            schema
                .properties
                .iter()
                .map(|(name, prop)| WitField::new(name.clone(), map_schema(prop)))
                .collect()
        })
        .unwrap_or_default()
}
