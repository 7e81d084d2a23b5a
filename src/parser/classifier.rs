//! Line classification.
//!
//! Every line is matched against a fixed, ordered rule table. The first rule
//! whose predicate matches produces the classification; later rules are never
//! consulted. The last rule accepts any line, so classification is total.

use regex::Regex;

use crate::model::Classification;

/// Full-width low line used to mark a fill-in field.
pub const BLANK_MARKER: char = '＿';

/// Unticked checkbox glyph.
pub const CHECKBOX_EMPTY: char = '□';

/// Ticked checkbox glyph.
pub const CHECKBOX_CHECKED: char = '☑';

type Predicate = fn(&LineClassifier, &str) -> bool;
type Extractor = for<'c, 'a> fn(&'c LineClassifier, &'a str) -> Classification<'a>;

/// One entry of the classification table.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short rule name, used in diagnostics
    pub name: &'static str,
    matches: Predicate,
    extract: Extractor,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Rules in priority order.
static RULES: [Rule; 13] = [
    Rule {
        name: "blank",
        matches: |_, line| line.is_empty(),
        extract: |_, _| Classification::Blank,
    },
    Rule {
        name: "heading1",
        matches: |_, line| line.starts_with("# "),
        extract: |_, line| Classification::Heading {
            level: 1,
            text: &line[2..],
        },
    },
    Rule {
        name: "heading2",
        matches: |_, line| line.starts_with("## "),
        extract: |_, line| Classification::Heading {
            level: 2,
            text: &line[3..],
        },
    },
    Rule {
        name: "heading3",
        matches: |_, line| line.starts_with("### "),
        extract: |_, line| Classification::Heading {
            level: 3,
            text: &line[4..],
        },
    },
    Rule {
        name: "separator",
        matches: |_, line| line.starts_with("---"),
        extract: |_, _| Classification::Separator,
    },
    Rule {
        name: "bullet",
        matches: |_, line| line.starts_with("- ") || line.starts_with("* "),
        extract: |_, line| Classification::BulletItem { text: &line[2..] },
    },
    Rule {
        name: "numbered",
        matches: |c, line| c.numbered.is_match(line),
        extract: extract_numbered,
    },
    Rule {
        name: "checkbox",
        matches: |_, line| checkbox_remainder(line).is_some(),
        extract: extract_checkbox,
    },
    Rule {
        name: "clause",
        matches: |c, line| c.parenthesized.is_match(line),
        extract: |_, line| Classification::ParenthesizedClause { text: line },
    },
    Rule {
        name: "table",
        matches: |_, line| line.starts_with('|'),
        extract: |_, _| Classification::TableRow,
    },
    Rule {
        name: "bold",
        matches: |_, line| line.starts_with("**") && line.ends_with("**"),
        extract: |_, line| Classification::BoldStatement { text: line },
    },
    Rule {
        name: "fill-in",
        matches: |_, line| line.contains(BLANK_MARKER) && !line.starts_with('#'),
        extract: |_, line| Classification::FillInBlank { text: line },
    },
    Rule {
        name: "paragraph",
        matches: |_, _| true,
        extract: |_, line| Classification::PlainParagraph { text: line },
    },
];

fn extract_numbered<'a>(c: &LineClassifier, line: &'a str) -> Classification<'a> {
    let start = c.numbered.find(line).map_or(0, |m| m.end());
    Classification::NumberedItem {
        text: &line[start..],
    }
}

fn extract_checkbox<'a>(_: &LineClassifier, line: &'a str) -> Classification<'a> {
    match checkbox_remainder(line) {
        Some((checked, text)) => Classification::CheckboxItem { checked, text },
        None => Classification::PlainParagraph { text: line },
    }
}

fn checkbox_remainder(line: &str) -> Option<(bool, &str)> {
    let mut chars = line.chars();
    let checked = match chars.next()? {
        CHECKBOX_CHECKED => true,
        CHECKBOX_EMPTY => false,
        _ => return None,
    };
    chars.as_str().strip_prefix(' ').map(|rest| (checked, rest))
}

/// Classifies source lines using the ordered rule table.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    numbered: Regex,
    parenthesized: Regex,
}

impl LineClassifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self {
            numbered: Regex::new(r"^\d+\.\s").unwrap(),
            parenthesized: Regex::new(r"^\(\d+\)").unwrap(),
        }
    }

    /// The rule table in priority order.
    pub fn rules(&self) -> &'static [Rule] {
        &RULES
    }

    /// Classify one right-trimmed line.
    pub fn classify<'a>(&self, line: &'a str) -> Classification<'a> {
        self.classify_traced(line).1
    }

    /// Classify one line and report the name of the rule that fired.
    pub fn classify_traced<'a>(&self, line: &'a str) -> (&'static str, Classification<'a>) {
        for rule in RULES.iter() {
            if (rule.matches)(self, line) {
                return (rule.name, (rule.extract)(self, line));
            }
        }
        // The final rule accepts every line.
        ("paragraph", Classification::PlainParagraph { text: line })
    }

    /// Names of every rule whose predicate accepts the line, in priority order.
    pub fn matching_rules(&self, line: &str) -> Vec<&'static str> {
        RULES
            .iter()
            .filter(|rule| (rule.matches)(self, line))
            .map(|rule| rule.name)
            .collect()
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineKind;

    fn kind(line: &str) -> LineKind {
        LineClassifier::new().classify(line).kind()
    }

    #[test]
    fn test_blank() {
        assert_eq!(LineClassifier::new().classify(""), Classification::Blank);
    }

    #[test]
    fn test_headings() {
        let c = LineClassifier::new();
        assert_eq!(
            c.classify("# 会員規約"),
            Classification::Heading {
                level: 1,
                text: "会員規約"
            }
        );
        assert_eq!(
            c.classify("## Article 1"),
            Classification::Heading {
                level: 2,
                text: "Article 1"
            }
        );
        assert_eq!(
            c.classify("### Scope"),
            Classification::Heading {
                level: 3,
                text: "Scope"
            }
        );
        // Four hashes is not a heading; it falls through to plain text.
        assert_eq!(kind("#### Deep"), LineKind::PlainParagraph);
        assert_eq!(kind("#NoSpace"), LineKind::PlainParagraph);
    }

    #[test]
    fn test_separator() {
        assert_eq!(kind("---"), LineKind::Separator);
        assert_eq!(kind("-----"), LineKind::Separator);
        // Rule 5 precedes the bullet rule.
        assert_eq!(kind("--- not a bullet"), LineKind::Separator);
    }

    #[test]
    fn test_bullets() {
        let c = LineClassifier::new();
        assert_eq!(
            c.classify("- Item one"),
            Classification::BulletItem { text: "Item one" }
        );
        assert_eq!(
            c.classify("* Item two"),
            Classification::BulletItem { text: "Item two" }
        );
        assert_eq!(kind("-no space"), LineKind::PlainParagraph);
    }

    #[test]
    fn test_numbered() {
        let c = LineClassifier::new();
        assert_eq!(
            c.classify("12. Payment terms"),
            Classification::NumberedItem {
                text: "Payment terms"
            }
        );
        assert_eq!(kind("12.Payment"), LineKind::PlainParagraph);
        assert_eq!(kind("1.5 percent"), LineKind::PlainParagraph);
    }

    #[test]
    fn test_checkbox() {
        let c = LineClassifier::new();
        assert_eq!(
            c.classify("☑ Agreed"),
            Classification::CheckboxItem {
                checked: true,
                text: "Agreed"
            }
        );
        assert_eq!(
            c.classify("□ Agreed"),
            Classification::CheckboxItem {
                checked: false,
                text: "Agreed"
            }
        );
        assert_eq!(kind("□Agreed"), LineKind::PlainParagraph);
    }

    #[test]
    fn test_parenthesized_clause() {
        let c = LineClassifier::new();
        assert_eq!(
            c.classify("(1) The member shall"),
            Classification::ParenthesizedClause {
                text: "(1) The member shall"
            }
        );
        assert_eq!(kind("(a) lettered"), LineKind::PlainParagraph);
    }

    #[test]
    fn test_table_row() {
        assert_eq!(kind("| a | b |"), LineKind::TableRow);
        assert_eq!(kind("|---|---|"), LineKind::TableRow);
    }

    #[test]
    fn test_bold_statement() {
        let c = LineClassifier::new();
        assert_eq!(
            c.classify("**Important notice**"),
            Classification::BoldStatement {
                text: "**Important notice**"
            }
        );
        assert_eq!(kind("**Lead** and more"), LineKind::PlainParagraph);
    }

    #[test]
    fn test_fill_in_blank() {
        assert_eq!(kind("Name: ＿＿＿＿"), LineKind::FillInBlank);
        // Heading rule wins over the blank marker.
        assert_eq!(kind("# Date ＿＿"), LineKind::Heading(1));
        // Lines starting with '#' are excluded from the fill-in rule.
        assert_eq!(kind("#### Date ＿＿"), LineKind::PlainParagraph);
    }

    #[test]
    fn test_rule_priority() {
        let c = LineClassifier::new();
        // A bullet containing blank markers matches both rules; the bullet rule comes first.
        assert_eq!(
            c.classify("- Name: ＿＿"),
            Classification::BulletItem { text: "Name: ＿＿" }
        );
        assert_eq!(
            c.matching_rules("- Name: ＿＿"),
            vec!["bullet", "fill-in", "paragraph"]
        );
        // Bold-wrapped text with blanks resolves to the earlier bold rule.
        assert_eq!(kind("**Date: ＿＿**"), LineKind::BoldStatement);
        // A checkbox line with blanks stays a checkbox.
        assert_eq!(kind("☑ Other: ＿＿"), LineKind::CheckboxItem);
        // A numbered item wrapped in bold stays numbered.
        assert_eq!(kind("1. **Term**"), LineKind::NumberedItem);
    }

    #[test]
    fn test_traced_reports_first_matching_rule() {
        let c = LineClassifier::new();
        for line in ["", "# a", "---", "- a", "1. a", "☑ a", "(1) a", "|a", "**a**", "a＿", "a"] {
            let (name, _) = c.classify_traced(line);
            assert_eq!(Some(&name), c.matching_rules(line).first());
        }
    }

    #[test]
    fn test_rule_table_order() {
        let names: Vec<_> = LineClassifier::new().rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "blank", "heading1", "heading2", "heading3", "separator", "bullet", "numbered",
                "checkbox", "clause", "table", "bold", "fill-in", "paragraph"
            ]
        );
    }
}
