pub mod definition;
pub mod dom;
pub mod entry;
pub mod error;
pub mod group;
pub mod model;
pub mod section;
pub mod table;

#[cfg(test)]
pub(crate) mod testdom;

pub use dom::{Document, DocumentNode};
pub use error::ParseError;
pub use model::{Example, Interpretation, Kind, Languages, Translation, Word};
pub use table::parse_translation;
