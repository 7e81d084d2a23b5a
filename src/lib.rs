//! # mdocx
//!
//! Converts contract-style Markdown into Word documents.
//!
//! The source dialect is deliberately small: headings (`#` to `###`), rules
//! (`---`), bullet and numbered items, checkbox items (`□`/`☑`),
//! parenthesized clauses (`(1)`), whole-line bold statements and fill-in
//! blanks marked with the full-width `＿`. Every line is classified by a fixed,
//! ordered rule table and styled from a fixed style table.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdocx::Mdocx;
//!
//! fn main() -> mdocx::Result<()> {
//!     let report = Mdocx::new()
//!         .with_font("Yu Mincho")
//!         .convert("会員規約.md", "word/会員規約.docx")?;
//!     println!("{} blocks written", report.stats.block_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Total classification**: every line maps to exactly one category
//! - **Fill-in blanks**: `＿` runs become fixed-width fields
//! - **Pluggable output**: anything implementing [`writer::OutputSerializer`]
//! - **Batch isolation**: one failing file never aborts the others

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod writer;

// Re-export commonly used types
pub use convert::{
    convert_file, convert_str, default_output_path, Batch, BatchJob, BatchOutcome, BatchReport,
    ConvertOptions, ConvertReport, OutputFormat,
};
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, BlockKind, Classification, Document, LineKind, ListStyle, Metadata,
    PageMargins, SourceLine, StyleSpec, TextSpan,
};
pub use parser::{InlineCleaner, LineClassifier};
pub use render::{
    to_json, to_text, Conversion, ConversionStats, DocumentBuilder, JsonFormat, StyleResolver,
};
pub use writer::{DocxWriter, OutputSerializer, ParagraphHandle};

use std::path::Path;

/// Classify a single line.
///
/// # Example
///
/// ```
/// use mdocx::{classify_line, LineKind};
///
/// assert_eq!(classify_line("## 第1条").kind(), LineKind::Heading(2));
/// ```
pub fn classify_line(line: &str) -> Classification<'_> {
    LineClassifier::new().classify(line)
}

/// Convert Markdown text to a document with default options.
///
/// # Example
///
/// ```
/// let doc = mdocx::to_document("# Title\n- item").unwrap();
/// assert_eq!(doc.block_count(), 2);
/// ```
pub fn to_document(text: &str) -> Result<Document> {
    Ok(convert_str(text, &ConvertOptions::default())?.document)
}

/// Builder for converting documents.
///
/// # Example
///
/// ```no_run
/// use mdocx::{Mdocx, OutputFormat};
///
/// let report = Mdocx::new()
///     .with_font("Meiryo")
///     .with_format(OutputFormat::Json)
///     .convert("terms.md", "terms.json")?;
/// # Ok::<(), mdocx::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mdocx {
    options: ConvertOptions,
}

impl Mdocx {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Set the font family.
    pub fn with_font(mut self, font_family: impl Into<String>) -> Self {
        self.options = self.options.with_font(font_family);
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.options = self.options.with_format(format);
        self
    }

    /// Normalize the source to Unicode NFC before classification.
    pub fn with_normalization(mut self) -> Self {
        self.options = self.options.with_normalization(true);
        self
    }

    /// Options this builder will use.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert Markdown text in memory.
    pub fn convert_str(&self, text: &str) -> Result<Conversion> {
        convert_str(text, &self.options)
    }

    /// Convert a file.
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<ConvertReport> {
        convert_file(input.as_ref(), output.as_ref(), &self.options)
    }

    /// Build a batch runner with these options.
    pub fn batch(&self) -> Batch {
        Batch::new(self.options.clone())
    }
}
