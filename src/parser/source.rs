//! Source reading and line splitting.

use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::model::SourceLine;

const UTF8_BOM: &str = "\u{feff}";

/// Read a source file as UTF-8.
///
/// A missing file is reported as [`Error::InputNotFound`] so callers can skip
/// it without treating it as a conversion failure.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path)?;
    decode_source(&bytes)
}

/// Decode source bytes as UTF-8, dropping a leading byte order mark.
pub fn decode_source(bytes: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(bytes).map_err(|e| Error::Encoding(e.to_string()))?;
    Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
}

/// Apply Unicode NFC normalization.
pub fn normalize(text: &str) -> String {
    text.nfc().collect()
}

/// Split text on `\n` into right-trimmed, numbered lines.
///
/// A trailing newline yields a final empty line, which becomes a spacing
/// block like any other blank line.
pub fn lines(text: &str) -> impl Iterator<Item = SourceLine<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| SourceLine::new(i + 1, line))
}
