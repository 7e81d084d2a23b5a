//! Single-pass document builder.
//!
//! The builder walks source lines in order and appends zero or one block per
//! line. Page margins are applied once, when the builder is finished.

use chrono::Utc;

use crate::error::{Error, Result};
use crate::model::{Block, Classification, Document, PageMargins, SourceLine};
use crate::parser::{
    self, blank_field, InlineCleaner, LineClassifier, Segment, CHECKBOX_CHECKED, CHECKBOX_EMPTY,
};

use super::{Conversion, ConversionStats, StyleResolver};

/// Glyph used for horizontal rules.
pub const SEPARATOR_GLYPH: char = '─';

/// Number of glyphs in a horizontal rule.
pub const SEPARATOR_WIDTH: usize = 50;

/// Margin on every side of the page, in inches.
pub const PAGE_MARGIN_INCHES: f32 = 1.0;

/// Lifecycle of a [`DocumentBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// No line processed yet
    Idle,
    /// Lines are being appended
    Accumulating,
    /// Margins applied, document handed out
    Finalized,
}

/// Builds one [`Document`] from one source.
#[derive(Debug)]
pub struct DocumentBuilder {
    classifier: LineClassifier,
    cleaner: InlineCleaner,
    resolver: StyleResolver,
    state: BuilderState,
    document: Document,
    stats: ConversionStats,
}

impl DocumentBuilder {
    /// Create a builder using the given style resolver.
    pub fn new(resolver: StyleResolver) -> Self {
        Self {
            classifier: LineClassifier::new(),
            cleaner: InlineCleaner::new(),
            resolver,
            state: BuilderState::Idle,
            document: Document::new(),
            stats: ConversionStats::new(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// The document built so far.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Statistics gathered so far.
    pub fn stats(&self) -> &ConversionStats {
        &self.stats
    }

    /// Classify, style and append one line.
    ///
    /// Returns the block that was appended, or `None` for table rows and
    /// plain lines that are empty after cleaning.
    pub fn push_line(&mut self, line: SourceLine<'_>) -> Result<Option<&Block>> {
        if self.state == BuilderState::Finalized {
            return Err(Error::BuilderFinalized);
        }
        self.state = BuilderState::Accumulating;

        let (rule, classification) = self.classifier.classify_traced(line.text);
        log::trace!("line {}: rule {} -> {}", line.number, rule, classification.kind());
        self.stats.record_line(classification.kind());

        let Some(block) = self.build_block(line.number, classification) else {
            if let Classification::PlainParagraph { .. } = classification {
                self.stats.add_emptied_line();
            }
            return Ok(None);
        };

        if let Classification::FillInBlank { text } = classification {
            self.stats.add_fields(parser::blanks::count_fields(text));
        }
        if block.heading_level() == Some(1) && self.document.metadata.title.is_none() {
            self.document.metadata.title = Some(block.plain_text());
        }
        self.stats.count_text(&block.plain_text());
        self.stats.add_block();
        self.document.add_block(block);
        Ok(self.document.blocks.last())
    }

    /// Push every line of a source text.
    pub fn push_text(&mut self, text: &str) -> Result<()> {
        for line in parser::lines(text) {
            self.push_line(line)?;
        }
        Ok(())
    }

    /// Turn a classification into a block, without touching builder state.
    pub fn build_block(&self, line: usize, classification: Classification<'_>) -> Option<Block> {
        let kind = classification.kind();
        let style = self.resolver.resolve(kind);
        let block_kind = StyleResolver::block_kind(kind);
        let clean = |text: &str| self.cleaner.clean(text);

        let block = match classification {
            Classification::TableRow => return None,
            Classification::Blank => Block::new(line, block_kind, style),
            Classification::Separator => Block::with_text(
                line,
                block_kind,
                style,
                SEPARATOR_GLYPH.to_string().repeat(SEPARATOR_WIDTH),
            ),
            Classification::CheckboxItem { checked, text } => {
                let glyph = if checked {
                    CHECKBOX_CHECKED
                } else {
                    CHECKBOX_EMPTY
                };
                Block::with_text(line, block_kind, style, format!("{} {}", glyph, clean(text)))
            }
            Classification::FillInBlank { text } => {
                let mut block = Block::new(line, block_kind, style);
                for segment in parser::segment(text, &self.cleaner) {
                    match segment {
                        Segment::Text(text) => block.add_text(text),
                        Segment::Field => block.add_text(blank_field()),
                    }
                }
                block
            }
            Classification::PlainParagraph { text } => {
                let text = clean(text);
                if text.is_empty() {
                    return None;
                }
                Block::with_text(line, block_kind, style, text)
            }
            Classification::Heading { text, .. }
            | Classification::BulletItem { text }
            | Classification::NumberedItem { text }
            | Classification::ParenthesizedClause { text }
            | Classification::BoldStatement { text } => {
                Block::with_text(line, block_kind, style, clean(text))
            }
        };

        Some(block)
    }

    /// Apply page margins and hand out the finished document.
    pub fn finish(&mut self) -> Result<Conversion> {
        if self.state == BuilderState::Finalized {
            return Err(Error::BuilderFinalized);
        }
        self.state = BuilderState::Finalized;

        let mut document = std::mem::take(&mut self.document);
        document.margins = Some(PageMargins::uniform(PAGE_MARGIN_INCHES));
        document.metadata.created = Some(Utc::now());

        log::debug!(
            "built {} blocks from {} lines ({} table rows dropped)",
            document.block_count(),
            self.stats.line_count,
            self.stats.table_rows_dropped
        );

        Ok(Conversion::new(document, std::mem::take(&mut self.stats)))
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(StyleResolver::default())
    }
}

/// Build a document from source text in one pass.
pub fn build_document(text: &str, resolver: StyleResolver) -> Result<Conversion> {
    let mut builder = DocumentBuilder::new(resolver);
    builder.push_text(text)?;
    builder.finish()
}
