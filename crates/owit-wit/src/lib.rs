pub mod emitters;
pub mod error;

use owit_core::parse::spec::OpenApiSpec;
use owit_core::transform::{self, Diagnostic, TranslateOptions};

pub use error::WitError;

/// A rendered WIT document and the diagnostics collected while building it.
#[derive(Debug, Clone)]
pub struct WitOutput {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Translate an OpenAPI document straight to WIT text.
pub fn translate(spec: &OpenApiSpec, options: &TranslateOptions) -> Result<WitOutput, WitError> {
    let translation = transform::translate_with_options(spec, options)?;
    let text = emitters::document::emit_document(&translation.document)?;
    Ok(WitOutput {
        text,
        diagnostics: translation.diagnostics,
    })
}
