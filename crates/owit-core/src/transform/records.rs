use indexmap::IndexMap;
use log::debug;

use crate::ir::{WitField, WitRecord};
use crate::parse::schema::Schema;

use super::type_mapper::map_schema;

/// Build one record per component schema, in declaration order.
pub fn build_records(schemas: &IndexMap<String, Schema>) -> Vec<WitRecord> {
    schemas
        .iter()
        .map(|(name, schema)| build_record(name, schema))
        .collect()
}

/// Build a record whose fields mirror the schema's properties in declared
/// order. A schema without properties yields an empty record.
pub fn build_record(name: &str, schema: &Schema) -> WitRecord {
    let fields: Vec<WitField> = schema
        .properties
        .iter()
        .map(|(prop_name, prop)| WitField::new(prop_name.clone(), map_schema(prop)))
        .collect();

    debug!("record {name}: {} field(s)", fields.len());

    WitRecord {
        name: name.to_string(),
        fields,
    }
}
