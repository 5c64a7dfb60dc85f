use std::fmt;

/// The WIT primitive types the translator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WitPrimitive {
    String,
    I32,
    I64,
    Bool,
    /// A bare `list`; element types are not inferred.
    List,
}

impl WitPrimitive {
    pub fn as_str(&self) -> &'static str {
        match self {
            WitPrimitive::String => "string",
            WitPrimitive::I32 => "i32",
            WitPrimitive::I64 => "i64",
            WitPrimitive::Bool => "bool",
            WitPrimitive::List => "list",
        }
    }
}

impl fmt::Display for WitPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type in a field, parameter, or return position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WitType {
    Primitive(WitPrimitive),
    /// A record type referenced by name, echoed verbatim.
    Named(String),
}

impl From<WitPrimitive> for WitType {
    fn from(primitive: WitPrimitive) -> Self {
        WitType::Primitive(primitive)
    }
}

impl fmt::Display for WitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WitType::Primitive(p) => p.fmt(f),
            WitType::Named(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_keywords() {
        assert_eq!(WitPrimitive::String.to_string(), "string");
        assert_eq!(WitPrimitive::I32.to_string(), "i32");
        assert_eq!(WitPrimitive::I64.to_string(), "i64");
        assert_eq!(WitPrimitive::Bool.to_string(), "bool");
        assert_eq!(WitPrimitive::List.to_string(), "list");
    }

    #[test]
    fn test_named_is_verbatim() {
        assert_eq!(WitType::Named("Person".to_string()).to_string(), "Person");
        assert_eq!(WitType::from(WitPrimitive::I64).to_string(), "i64");
    }
}
