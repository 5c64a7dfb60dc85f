pub mod document;
pub mod types;
pub mod world;

pub use document::{WitDocument, WitField, WitRecord};
pub use types::{WitPrimitive, WitType};
pub use world::{HttpMethod, WitFunction, WitWorld};
