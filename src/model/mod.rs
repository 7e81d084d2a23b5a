//! Document model types.
//!
//! This module defines the intermediate representation that bridges line
//! classification and output serialization. The model knows nothing about
//! any concrete file format.

mod document;
mod line;
mod paragraph;

pub use document::{Document, Metadata, PageMargins};
pub use line::{Classification, LineKind, SourceLine};
pub use paragraph::{Alignment, Block, BlockKind, ListStyle, StyleSpec, TextSpan};
