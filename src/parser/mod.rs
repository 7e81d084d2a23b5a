//! Markdown dialect parsing: line classification, inline cleanup and
//! fill-in-blank segmentation.

pub mod blanks;
mod classifier;
mod inline;
mod source;

pub use blanks::{blank_field, segment, Segment, BLANK_FIELD_WIDTH};
pub use classifier::{LineClassifier, Rule, BLANK_MARKER, CHECKBOX_CHECKED, CHECKBOX_EMPTY};
pub use inline::InlineCleaner;
pub use source::{decode_source, lines, normalize, read_source};
