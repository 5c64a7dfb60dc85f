use log::debug;

use crate::ir::WitPrimitive;
use crate::parse::schema::Schema;

/// Map an OpenAPI primitive type (and optional format) to a WIT primitive.
///
/// This never fails. `integer` defaults to `i32` unless the format is
/// `int64`; `array` maps to a bare `list`; anything unrecognised, including
/// the empty type of a `$ref`-only schema, maps to `string`.
pub fn map_primitive(openapi_type: &str, format: Option<&str>) -> WitPrimitive {
    match openapi_type {
        "string" => WitPrimitive::String,
        "integer" => match format {
            Some("int64") => WitPrimitive::I64,
            _ => WitPrimitive::I32,
        },
        "boolean" => WitPrimitive::Bool,
        "array" => WitPrimitive::List,
        _ => WitPrimitive::String,
    }
}

/// Map a schema's immediate `type`/`format`. Nested properties and `$ref`
/// targets are not followed.
pub fn map_schema(schema: &Schema) -> WitPrimitive {
    let openapi_type = schema.type_name();
    let mapped = map_primitive(openapi_type, schema.format.as_deref());
    if mapped == WitPrimitive::String && openapi_type != "string" {
        debug!("no WIT primitive for OpenAPI type {openapi_type:?}, using string");
    }
    mapped
}
