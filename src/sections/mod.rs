pub mod finder;
pub mod spans;
pub mod window;

pub use finder::DuplicateSectionFinder;
pub use spans::{collapse_overlapping, SectionSpan};
