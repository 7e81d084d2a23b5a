//! Error types for mdocx library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a document.
///
/// Line classification has no error variant: every line maps to exactly one
/// classification.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// `docx-rs` failed to pack the document.
    #[error("DOCX packaging error: {0}")]
    Docx(String),

    /// A line was pushed after the document was finalized.
    #[error("Document builder already finalized")]
    BuilderFinalized,

    /// The serializer was used out of order (e.g. a run for an unknown paragraph).
    #[error("Serializer error: {0}")]
    Serialize(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}
