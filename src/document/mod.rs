pub mod document;

pub use crate::types::identifiers::{DocumentLabel, DocumentVersion};
pub use document::{Document, DocumentError};
