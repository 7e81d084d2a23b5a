//! File conversion: one source file in, one document file out.
//!
//! # Example
//!
//! ```no_run
//! use mdocx::convert::{convert_file, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() -> mdocx::Result<()> {
//!     let options = ConvertOptions::new().with_font("Yu Mincho");
//!     let report = convert_file(
//!         Path::new("会員規約.md"),
//!         Path::new("word/会員規約.docx"),
//!         &options,
//!     )?;
//!     println!("{} blocks", report.stats.block_count);
//!     Ok(())
//! }
//! ```

mod batch;

pub use batch::{Batch, BatchJob, BatchOutcome, BatchReport};

use crate::error::Result;
use crate::parser;
use crate::render::{
    build_document, to_json, Conversion, ConversionStats, JsonFormat, StyleResolver,
    DEFAULT_FONT_FAMILY,
};
use crate::writer::{write_document, DocxWriter};
use std::path::{Path, PathBuf};

/// Options for document conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Font family applied to every run
    pub font_family: String,

    /// Normalize the source to Unicode NFC before classification (off by default)
    pub normalize_unicode: bool,

    /// Output format
    pub output_format: OutputFormat,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn with_font(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    /// Enable or disable Unicode normalization.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Style resolver for these options.
    pub fn style_resolver(&self) -> StyleResolver {
        StyleResolver::new(self.font_family.as_str())
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            normalize_unicode: false,
            output_format: OutputFormat::Docx,
        }
    }
}

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Word document
    #[default]
    Docx,

    /// JSON dump of the document model
    Json,
}

impl OutputFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Json => "json",
        }
    }

    /// Guess the format from an output path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "docx" => Some(OutputFormat::Docx),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Result of converting one file.
#[derive(Debug, Clone)]
pub struct ConvertReport {
    /// Source path
    pub input: PathBuf,

    /// Written path
    pub output: PathBuf,

    /// Statistics from the conversion pass
    pub stats: ConversionStats,
}

/// Convert source text to a document.
pub fn convert_str(text: &str, options: &ConvertOptions) -> Result<Conversion> {
    if options.normalize_unicode {
        build_document(&parser::normalize(text), options.style_resolver())
    } else {
        build_document(text, options.style_resolver())
    }
}

/// Convert a source file and write the result to `output`.
///
/// The output's parent directory is created if needed. Errors are returned
/// to the caller; nothing is written if the source cannot be read.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<ConvertReport> {
    let text = parser::read_source(input)?;
    let conversion = convert_str(&text, options)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    match options.output_format {
        OutputFormat::Docx => {
            let mut writer = DocxWriter::new();
            write_document(&conversion.document, &mut writer, output)?;
        }
        OutputFormat::Json => {
            let json = to_json(&conversion.document, JsonFormat::Pretty)?;
            std::fs::write(output, json)?;
        }
    }

    log::info!("converted {} -> {}", input.display(), output.display());

    Ok(ConvertReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        stats: conversion.stats,
    })
}

/// Output path for `input` inside `out_dir`: same stem, format extension.
pub fn default_output_path(input: &Path, out_dir: &Path, format: OutputFormat) -> PathBuf {
    let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
    name.push(".");
    name.push(format.extension());
    out_dir.join(name)
}
