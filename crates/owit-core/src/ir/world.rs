use std::fmt;

use super::document::WitField;
use super::types::WitType;

/// HTTP method, declared in emission priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    /// All methods in the order functions are emitted for a single path.
    pub const PRIORITY: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Trace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single world block of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitWorld {
    pub name: String,
    pub functions: Vec<WitFunction>,
}

/// One exported function, derived from a (path, method) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitFunction {
    pub name: String,
    pub method: HttpMethod,
    pub path: String,
    pub params: Vec<WitField>,
    pub returns: Option<WitType>,
}
