pub mod diagnostics;
pub mod records;
pub mod spec_to_wit;
pub mod type_mapper;
pub mod world;

pub use diagnostics::{Diagnostic, Severity};
pub use spec_to_wit::{TranslateOptions, Translation, translate, translate_with_options};
