//! Output serialization.
//!
//! The builder produces an abstract [`Document`]; an [`OutputSerializer`]
//! turns it into a concrete file format. The core only talks to this trait,
//! so any rich-document backend can be plugged in.
//!
//! # Example
//!
//! ```no_run
//! use mdocx::render::{build_document, StyleResolver};
//! use mdocx::writer::{write_document, DocxWriter};
//! use std::path::Path;
//!
//! fn main() -> mdocx::Result<()> {
//!     let conversion = build_document("# 会員規約\n- 第1条", StyleResolver::default())?;
//!     let mut writer = DocxWriter::new();
//!     write_document(&conversion.document, &mut writer, Path::new("terms.docx"))?;
//!     Ok(())
//! }
//! ```

mod docx;

pub use docx::DocxWriter;

use crate::error::{Error, Result};
use crate::model::{BlockKind, Document, Metadata, PageMargins, StyleSpec};
use std::path::Path;

/// Opaque reference to a paragraph created by a serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParagraphHandle(pub usize);

/// Capability surface for persisting a document.
///
/// Calls arrive in document order: `create_document`, then one `add_heading`
/// or `add_paragraph` per block (a paragraph followed by its runs), then
/// `set_page_margins` once, then `save`.
pub trait OutputSerializer {
    /// Start a fresh document, discarding any previous content.
    fn create_document(&mut self) -> Result<()>;

    /// Record document metadata. Backends without metadata ignore it.
    fn set_metadata(&mut self, metadata: &Metadata) -> Result<()> {
        let _ = metadata;
        Ok(())
    }

    /// Add a heading paragraph holding `text`, styled with `style`.
    fn add_heading(&mut self, text: &str, level: u8, style: &StyleSpec) -> Result<ParagraphHandle>;

    /// Add a body paragraph, optionally with a named paragraph style
    /// (`"List Bullet"`, `"List Number"`).
    fn add_paragraph(&mut self, style_name: Option<&str>) -> Result<ParagraphHandle>;

    /// Append a text run. The style carries font, size, weight, alignment and indent.
    fn append_run(&mut self, paragraph: ParagraphHandle, text: &str, style: &StyleSpec)
        -> Result<()>;

    /// Set page margins in inches.
    fn set_page_margins(&mut self, margins: PageMargins) -> Result<()>;

    /// Persist the document.
    fn save(&mut self, path: &Path) -> Result<()>;
}

/// Replay a finalized document through a serializer without saving it.
pub fn emit_document<S: OutputSerializer + ?Sized>(doc: &Document, out: &mut S) -> Result<()> {
    let margins = doc
        .margins
        .ok_or_else(|| Error::Serialize("document has not been finalized".into()))?;

    out.create_document()?;
    out.set_metadata(&doc.metadata)?;

    for block in &doc.blocks {
        match block.kind {
            BlockKind::Heading { level } => {
                out.add_heading(&block.plain_text(), level, &block.style)?;
            }
            BlockKind::Paragraph { list } => {
                let paragraph = out.add_paragraph(list.map(|l| l.style_name()))?;
                for span in &block.spans {
                    out.append_run(paragraph, &span.text, &span.style)?;
                }
            }
        }
    }

    out.set_page_margins(margins)
}

/// Replay a document through a serializer and save it to `path`.
pub fn write_document<S: OutputSerializer + ?Sized>(
    doc: &Document,
    out: &mut S,
    path: &Path,
) -> Result<()> {
    emit_document(doc, out)?;
    out.save(path)
}
