//! Source lines and their classifications.

use serde::Serialize;

/// One right-trimmed line of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// Line number (1-indexed)
    pub number: usize,

    /// Line text without trailing whitespace
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    /// Create a source line, trimming trailing whitespace.
    pub fn new(number: usize, text: &'a str) -> Self {
        Self {
            number,
            text: text.trim_end(),
        }
    }
}

/// The category assigned to a source line.
///
/// Text payloads borrow the raw remainder of the line; inline markers are
/// still present and are stripped when the block is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Classification<'a> {
    /// Empty line
    Blank,

    /// `#`, `##` or `###` heading
    Heading {
        /// Heading level (1-3)
        level: u8,
        /// Title text
        text: &'a str,
    },

    /// `---` horizontal rule
    Separator,

    /// `- ` or `* ` list item
    BulletItem {
        /// Item text
        text: &'a str,
    },

    /// `12. ` list item
    NumberedItem {
        /// Item text, numeral stripped
        text: &'a str,
    },

    /// `□ ` or `☑ ` item
    CheckboxItem {
        /// Whether the box is ticked
        checked: bool,
        /// Item text after the glyph
        text: &'a str,
    },

    /// `(1) ...` clause
    ParenthesizedClause {
        /// Full line
        text: &'a str,
    },

    /// `| ... |` table row, never rendered
    TableRow,

    /// Line wrapped in `**`
    BoldStatement {
        /// Full line
        text: &'a str,
    },

    /// Line containing `＿` blank markers
    FillInBlank {
        /// Full line
        text: &'a str,
    },

    /// Anything else
    PlainParagraph {
        /// Full line
        text: &'a str,
    },
}

impl<'a> Classification<'a> {
    /// Get the payload-free kind of this classification.
    pub fn kind(&self) -> LineKind {
        match self {
            Classification::Blank => LineKind::Blank,
            Classification::Heading { level, .. } => LineKind::Heading(*level),
            Classification::Separator => LineKind::Separator,
            Classification::BulletItem { .. } => LineKind::BulletItem,
            Classification::NumberedItem { .. } => LineKind::NumberedItem,
            Classification::CheckboxItem { .. } => LineKind::CheckboxItem,
            Classification::ParenthesizedClause { .. } => LineKind::ParenthesizedClause,
            Classification::TableRow => LineKind::TableRow,
            Classification::BoldStatement { .. } => LineKind::BoldStatement,
            Classification::FillInBlank { .. } => LineKind::FillInBlank,
            Classification::PlainParagraph { .. } => LineKind::PlainParagraph,
        }
    }

    /// Get the raw text payload, if any.
    pub fn text(&self) -> Option<&'a str> {
        match *self {
            Classification::Heading { text, .. }
            | Classification::BulletItem { text }
            | Classification::NumberedItem { text }
            | Classification::CheckboxItem { text, .. }
            | Classification::ParenthesizedClause { text }
            | Classification::BoldStatement { text }
            | Classification::FillInBlank { text }
            | Classification::PlainParagraph { text } => Some(text),
            Classification::Blank | Classification::Separator | Classification::TableRow => None,
        }
    }
}

/// Classification kind without payload, used as the style table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Empty line
    Blank,
    /// Heading with level
    Heading(u8),
    /// Horizontal rule
    Separator,
    /// Bulleted item
    BulletItem,
    /// Numbered item
    NumberedItem,
    /// Checkbox item
    CheckboxItem,
    /// Parenthesized clause
    ParenthesizedClause,
    /// Table row
    TableRow,
    /// Whole-line bold
    BoldStatement,
    /// Line with blank fields
    FillInBlank,
    /// Plain paragraph
    PlainParagraph,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::Blank => write!(f, "blank"),
            LineKind::Heading(level) => write!(f, "heading{}", level),
            LineKind::Separator => write!(f, "separator"),
            LineKind::BulletItem => write!(f, "bullet"),
            LineKind::NumberedItem => write!(f, "numbered"),
            LineKind::CheckboxItem => write!(f, "checkbox"),
            LineKind::ParenthesizedClause => write!(f, "clause"),
            LineKind::TableRow => write!(f, "table-row"),
            LineKind::BoldStatement => write!(f, "bold"),
            LineKind::FillInBlank => write!(f, "fill-in"),
            LineKind::PlainParagraph => write!(f, "paragraph"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_line_trims_trailing_whitespace() {
        let line = SourceLine::new(3, "  text \t ");
        assert_eq!(line.text, "  text");
        assert_eq!(line.number, 3);
    }

    #[test]
    fn test_kind_and_text() {
        let c = Classification::CheckboxItem {
            checked: true,
            text: "Agreed",
        };
        assert_eq!(c.kind(), LineKind::CheckboxItem);
        assert_eq!(c.text(), Some("Agreed"));
        assert_eq!(Classification::TableRow.text(), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(LineKind::Heading(2).to_string(), "heading2");
        assert_eq!(LineKind::FillInBlank.to_string(), "fill-in");
    }
}
