//! Block and span-level types.

use serde::{Deserialize, Serialize};

/// A rendered paragraph-equivalent unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Source line number this block came from (1-indexed)
    pub line: usize,

    /// Heading or body paragraph
    pub kind: BlockKind,

    /// Paragraph-level style (alignment and indent apply to the paragraph)
    pub style: StyleSpec,

    /// Text spans in order
    pub spans: Vec<TextSpan>,
}

impl Block {
    /// Create a new block with no spans.
    pub fn new(line: usize, kind: BlockKind, style: StyleSpec) -> Self {
        Self {
            line,
            kind,
            style,
            spans: Vec::new(),
        }
    }

    /// Create a block holding a single span in the block style.
    pub fn with_text(
        line: usize,
        kind: BlockKind,
        style: StyleSpec,
        text: impl Into<String>,
    ) -> Self {
        let mut block = Self::new(line, kind, style);
        block.add_text(text);
        block
    }

    /// Add a span using the block style.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.spans.push(TextSpan::new(text, self.style.clone()));
    }

    /// Add a styled span.
    pub fn add_span(&mut self, span: TextSpan) {
        self.spans.push(span);
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Check if the block has no spans (a spacing paragraph).
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self.kind, BlockKind::Heading { .. })
    }

    /// Get the heading level (1-3) or None.
    pub fn heading_level(&self) -> Option<u8> {
        match self.kind {
            BlockKind::Heading { level } => Some(level),
            BlockKind::Paragraph { .. } => None,
        }
    }

    /// Get the list style, if this is a list item.
    pub fn list_style(&self) -> Option<ListStyle> {
        match self.kind {
            BlockKind::Paragraph { list } => list,
            BlockKind::Heading { .. } => None,
        }
    }
}

/// Structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    /// Heading paragraph
    Heading {
        /// Heading level (1-3)
        level: u8,
    },

    /// Body paragraph, optionally rendered as a list item
    Paragraph {
        /// List rendering requested from the serializer
        list: Option<ListStyle>,
    },
}

impl BlockKind {
    /// A body paragraph without list rendering.
    pub const fn paragraph() -> Self {
        BlockKind::Paragraph { list: None }
    }
}

/// A run of text with a single style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content, markers already stripped
    pub text: String,

    /// Span styling
    pub style: StyleSpec,
}

impl TextSpan {
    /// Create a new span.
    pub fn new(text: impl Into<String>, style: StyleSpec) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Check if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Font and paragraph styling for a classification kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSpec {
    /// Font family name
    pub font_family: String,

    /// Font size in points
    pub point_size: f32,

    /// Paragraph alignment
    pub alignment: Alignment,

    /// Left indent in inches
    pub left_indent_inches: f32,

    /// Bold text
    pub bold: bool,
}

impl StyleSpec {
    /// Create a left-aligned, unindented, regular style.
    pub fn new(font_family: impl Into<String>, point_size: f32) -> Self {
        Self {
            font_family: font_family.into(),
            point_size,
            alignment: Alignment::Left,
            left_indent_inches: 0.0,
            bold: false,
        }
    }

    /// Set alignment.
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set left indent in inches.
    pub fn indented(mut self, inches: f32) -> Self {
        self.left_indent_inches = inches;
        self
    }

    /// Make the style bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
}

/// List rendering requested from the output serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// Bulleted list item
    Bullet,
    /// Enumerated list item
    Number,
}

impl ListStyle {
    /// Paragraph style name passed to `add_paragraph`.
    pub fn style_name(&self) -> &'static str {
        match self {
            ListStyle::Bullet => "List Bullet",
            ListStyle::Number => "List Number",
        }
    }
}
