//! Conversion result with statistics.

use crate::model::{Document, LineKind};
use serde::{Deserialize, Serialize};

/// A finalized document together with the statistics gathered while building it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversion {
    /// The built document
    pub document: Document,

    /// Statistics gathered during the pass
    pub stats: ConversionStats,
}

impl Conversion {
    /// Create a new conversion result.
    pub fn new(document: Document, stats: ConversionStats) -> Self {
        Self { document, stats }
    }
}

/// Statistics collected during a conversion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Source lines processed
    pub line_count: u32,

    /// Blocks emitted
    pub block_count: u32,

    /// Blank lines kept as spacing blocks
    pub blank_count: u32,

    /// Headings emitted
    pub heading_count: u32,

    /// Bulleted and numbered items
    pub list_item_count: u32,

    /// Checkbox items
    pub checkbox_count: u32,

    /// Parenthesized clauses
    pub clause_count: u32,

    /// Horizontal rules
    pub separator_count: u32,

    /// Whole-line bold statements
    pub bold_count: u32,

    /// Plain and fill-in paragraphs
    pub paragraph_count: u32,

    /// Blank fields rendered in fill-in lines
    pub field_count: u32,

    /// Table rows dropped
    pub table_rows_dropped: u32,

    /// Plain lines that were empty after cleaning
    pub empty_after_cleaning: u32,

    /// Approximate word count of emitted text
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classified line.
    pub fn record_line(&mut self, kind: LineKind) {
        self.line_count += 1;
        match kind {
            LineKind::Blank => self.blank_count += 1,
            LineKind::Heading(_) => self.heading_count += 1,
            LineKind::Separator => self.separator_count += 1,
            LineKind::BulletItem | LineKind::NumberedItem => self.list_item_count += 1,
            LineKind::CheckboxItem => self.checkbox_count += 1,
            LineKind::ParenthesizedClause => self.clause_count += 1,
            LineKind::TableRow => self.table_rows_dropped += 1,
            LineKind::BoldStatement => self.bold_count += 1,
            LineKind::FillInBlank | LineKind::PlainParagraph => self.paragraph_count += 1,
        }
    }

    /// Increment block count.
    pub fn add_block(&mut self) {
        self.block_count += 1;
    }

    /// Add rendered blank fields.
    pub fn add_fields(&mut self, count: usize) {
        self.field_count += count as u32;
    }

    /// Record a plain line that produced no block.
    pub fn add_emptied_line(&mut self) {
        self.empty_after_cleaning += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ConversionStats) {
        self.line_count += other.line_count;
        self.block_count += other.block_count;
        self.blank_count += other.blank_count;
        self.heading_count += other.heading_count;
        self.list_item_count += other.list_item_count;
        self.checkbox_count += other.checkbox_count;
        self.clause_count += other.clause_count;
        self.separator_count += other.separator_count;
        self.bold_count += other.bold_count;
        self.paragraph_count += other.paragraph_count;
        self.field_count += other.field_count;
        self.table_rows_dropped += other.table_rows_dropped;
        self.empty_after_cleaning += other.empty_after_cleaning;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
