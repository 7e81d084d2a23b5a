//! Plain-text preview of the document model.

use crate::model::{Document, ListStyle};

/// Render a document as plain text, one line per block.
///
/// Spacing blocks become empty lines; list items get a marker so the
/// preview reads like the final document.
pub fn to_text(doc: &Document) -> String {
    let mut number = 0;
    doc.blocks
        .iter()
        .map(|block| {
            let text = block.plain_text();
            match block.list_style() {
                Some(ListStyle::Bullet) => {
                    number = 0;
                    format!("• {}", text)
                }
                Some(ListStyle::Number) => {
                    number += 1;
                    format!("{}. {}", number, text)
                }
                None => {
                    number = 0;
                    text
                }
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
