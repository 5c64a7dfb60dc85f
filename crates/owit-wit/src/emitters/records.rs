use log::debug;
use minijinja::context;
use owit_core::ir::WitRecord;

use crate::error::WitError;

/// Emit one `type <Name> = record { ... }` block per record, each followed
/// by a blank line.
pub fn emit_records(records: &[WitRecord]) -> Result<String, WitError> {
    let env = super::environment()?;
    let tmpl = env.get_template("records.wit.j2")?;

    let records: Vec<minijinja::Value> = records
        .iter()
        .inspect(|r| debug!("rendering record {} ({} field(s))", r.name, r.fields.len()))
        .map(record_to_ctx)
        .collect();

    Ok(tmpl.render(context! {
        records => records,
    })?)
}

fn record_to_ctx(record: &WitRecord) -> minijinja::Value {
    let fields: Vec<minijinja::Value> = record
        .fields
        .iter()
        .map(|f| {
            context! {
                name => f.name.clone(),
                ty => f.ty.to_string(),
            }
        })
        .collect();

    context! {
        name => record.name.clone(),
        fields => fields,
    }
}
