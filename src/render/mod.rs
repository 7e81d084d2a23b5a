//! Rendering module: styles lines into blocks and renders the model.

mod builder;
mod json;
mod result;
mod style;
mod text;

pub use builder::{
    build_document, BuilderState, DocumentBuilder, PAGE_MARGIN_INCHES, SEPARATOR_GLYPH,
    SEPARATOR_WIDTH,
};
pub use json::{to_json, JsonFormat};
pub use result::{Conversion, ConversionStats};
pub use style::{StyleResolver, BODY_POINT_SIZE, CLAUSE_INDENT_INCHES, DEFAULT_FONT_FAMILY};
pub use text::to_text;
