//! Fill-in-blank segmentation.

use super::classifier::BLANK_MARKER;
use super::InlineCleaner;

/// Number of marker glyphs in a rendered blank field.
pub const BLANK_FIELD_WIDTH: usize = 10;

/// One piece of a fill-in-blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Cleaned prose
    Text(String),
    /// A fillable field
    Field,
}

impl Segment {
    /// Rendered text of this segment.
    pub fn render(&self) -> String {
        match self {
            Segment::Text(text) => text.clone(),
            Segment::Field => blank_field(),
        }
    }
}

/// The synthetic run that stands in for a field.
pub fn blank_field() -> String {
    BLANK_MARKER.to_string().repeat(BLANK_FIELD_WIDTH)
}

/// Split a line on blank markers into alternating prose and fields.
///
/// A run of consecutive markers is one field. Prose segments are cleaned;
/// segments that are empty after cleaning are dropped.
pub fn segment(line: &str, cleaner: &InlineCleaner) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut prev_empty = false;

    for (i, part) in line.split(BLANK_MARKER).enumerate() {
        if i == 1 || (i > 1 && !prev_empty) {
            segments.push(Segment::Field);
        }
        prev_empty = part.is_empty();

        if !part.is_empty() {
            let text = cleaner.clean(part);
            if !text.is_empty() {
                segments.push(Segment::Text(text));
            }
        }
    }

    segments
}

/// Count the fields a line would produce.
pub fn count_fields(line: &str) -> usize {
    let mut count = 0;
    let mut in_run = false;
    for c in line.chars() {
        if c == BLANK_MARKER {
            if !in_run {
                count += 1;
            }
            in_run = true;
        } else {
            in_run = false;
        }
    }
    count
}
