//! Fixed style table keyed by line kind.

use crate::model::{Alignment, BlockKind, LineKind, ListStyle, StyleSpec};

/// Default font family (Meiryo).
pub const DEFAULT_FONT_FAMILY: &str = "メイリオ";

/// Body text size in points.
pub const BODY_POINT_SIZE: f32 = 10.5;

/// Left indent for checkbox items and parenthesized clauses, in inches.
pub const CLAUSE_INDENT_INCHES: f32 = 0.5;

/// Maps line kinds to styles.
///
/// Only the font family is configurable; sizes, alignment, indent and weight
/// come from the table in [`StyleResolver::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleResolver {
    font_family: String,
}

impl StyleResolver {
    /// Create a resolver using the given font family.
    pub fn new(font_family: impl Into<String>) -> Self {
        Self {
            font_family: font_family.into(),
        }
    }

    /// The font family applied to every style.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Resolve the style for a line kind.
    pub fn resolve(&self, kind: LineKind) -> StyleSpec {
        let body = StyleSpec::new(self.font_family.as_str(), BODY_POINT_SIZE);
        match kind {
            LineKind::Heading(1) => {
                StyleSpec::new(self.font_family.as_str(), 16.0).aligned(Alignment::Center)
            }
            LineKind::Heading(2) => StyleSpec::new(self.font_family.as_str(), 14.0),
            LineKind::Heading(_) => StyleSpec::new(self.font_family.as_str(), 12.0),
            LineKind::Separator => body.aligned(Alignment::Center),
            LineKind::CheckboxItem | LineKind::ParenthesizedClause => {
                body.indented(CLAUSE_INDENT_INCHES)
            }
            LineKind::BoldStatement => body.bold(),
            LineKind::Blank
            | LineKind::BulletItem
            | LineKind::NumberedItem
            | LineKind::TableRow
            | LineKind::FillInBlank
            | LineKind::PlainParagraph => body,
        }
    }

    /// List rendering requested for a line kind.
    pub fn list_style(kind: LineKind) -> Option<ListStyle> {
        match kind {
            LineKind::BulletItem => Some(ListStyle::Bullet),
            LineKind::NumberedItem => Some(ListStyle::Number),
            _ => None,
        }
    }

    /// Structural block kind for a line kind.
    pub fn block_kind(kind: LineKind) -> BlockKind {
        match kind {
            LineKind::Heading(level) => BlockKind::Heading { level },
            other => BlockKind::Paragraph {
                list: Self::list_style(other),
            },
        }
    }
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_sizes() {
        let resolver = StyleResolver::default();

        let h1 = resolver.resolve(LineKind::Heading(1));
        assert_eq!(h1.point_size, 16.0);
        assert_eq!(h1.alignment, Alignment::Center);

        let h2 = resolver.resolve(LineKind::Heading(2));
        assert_eq!(h2.point_size, 14.0);
        assert_eq!(h2.alignment, Alignment::Left);

        let h3 = resolver.resolve(LineKind::Heading(3));
        assert_eq!(h3.point_size, 12.0);
        assert_eq!(h3.alignment, Alignment::Left);
        assert!(!h3.bold);
    }

    #[test]
    fn test_body_kinds() {
        let resolver = StyleResolver::default();
        for kind in [
            LineKind::BulletItem,
            LineKind::NumberedItem,
            LineKind::FillInBlank,
            LineKind::PlainParagraph,
        ] {
            let style = resolver.resolve(kind);
            assert_eq!(style.point_size, BODY_POINT_SIZE);
            assert_eq!(style.alignment, Alignment::Left);
            assert_eq!(style.left_indent_inches, 0.0);
            assert!(!style.bold);
        }
    }

    #[test]
    fn test_indented_kinds() {
        let resolver = StyleResolver::default();
        assert_eq!(
            resolver.resolve(LineKind::CheckboxItem),
            resolver.resolve(LineKind::ParenthesizedClause)
        );
        assert_eq!(
            resolver.resolve(LineKind::CheckboxItem).left_indent_inches,
            CLAUSE_INDENT_INCHES
        );
    }

    #[test]
    fn test_bold_and_separator() {
        let resolver = StyleResolver::default();
        assert!(resolver.resolve(LineKind::BoldStatement).bold);
        let sep = resolver.resolve(LineKind::Separator);
        assert_eq!(sep.alignment, Alignment::Center);
        assert_eq!(sep.point_size, BODY_POINT_SIZE);
    }

    #[test]
    fn test_font_is_threaded() {
        let resolver = StyleResolver::new("Noto Serif JP");
        assert_eq!(resolver.font_family(), "Noto Serif JP");
        assert_eq!(
            resolver.resolve(LineKind::Heading(1)).font_family,
            "Noto Serif JP"
        );
        assert_eq!(
            StyleResolver::default().resolve(LineKind::PlainParagraph).font_family,
            DEFAULT_FONT_FAMILY
        );
    }

    #[test]
    fn test_block_kinds() {
        assert_eq!(
            StyleResolver::block_kind(LineKind::Heading(2)),
            BlockKind::Heading { level: 2 }
        );
        assert_eq!(
            StyleResolver::block_kind(LineKind::BulletItem),
            BlockKind::Paragraph {
                list: Some(ListStyle::Bullet)
            }
        );
        assert_eq!(
            StyleResolver::block_kind(LineKind::CheckboxItem),
            BlockKind::paragraph()
        );
    }
}
