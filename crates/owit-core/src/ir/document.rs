use super::types::WitType;
use super::world::WitWorld;

/// A complete WIT document: record declarations followed by one world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitDocument {
    pub records: Vec<WitRecord>,
    pub world: WitWorld,
}

/// A `type <name> = record { ... }` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitRecord {
    pub name: String,
    pub fields: Vec<WitField>,
}

/// A `name: type` pair, used for record fields and function parameters alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitField {
    pub name: String,
    pub ty: WitType,
}

impl WitField {
    pub fn new(name: impl Into<String>, ty: impl Into<WitType>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}
