use std::fmt;

use crate::ir::HttpMethod;

/// How serious a diagnostic is. Diagnostics never stop translation on their
/// own; strict mode turns warnings into errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A non-fatal finding collected alongside the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A `$ref` return type names a schema missing from `components.schemas`.
    /// The name is still emitted, producing a dangling WIT reference.
    UnresolvedReference {
        function: String,
        method: HttpMethod,
        path: String,
        reference: String,
    },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::UnresolvedReference { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedReference {
                function,
                method,
                path,
                reference,
            } => write!(
                f,
                "{function} ({method} {path}): `{reference}` does not match any component schema"
            ),
        }
    }
}
