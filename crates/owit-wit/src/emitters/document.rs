use owit_core::ir::WitDocument;

use crate::error::WitError;

use super::records::emit_records;
use super::world::emit_world;

/// Emit the full document: every record, then the world.
pub fn emit_document(doc: &WitDocument) -> Result<String, WitError> {
    let mut out = emit_records(&doc.records)?;
    out.push_str(&emit_world(&doc.world)?);
    Ok(out)
}
