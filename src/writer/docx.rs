//! Office Open XML (.docx) backend built on `docx-rs`.

use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, PageMargin, Paragraph, Run, RunFonts, SpecialIndentType, Start, Style,
    StyleType,
};

use super::{OutputSerializer, ParagraphHandle};
use crate::error::{Error, Result};
use crate::model::{Alignment, Metadata, PageMargins, StyleSpec};

const TWIPS_PER_INCH: f32 = 1440.0;

// US Letter, in twips.
const PAGE_WIDTH: u32 = 12240;
const PAGE_HEIGHT: u32 = 15840;

// Body text size in half-points.
const DEFAULT_HALF_POINTS: usize = 21;

const BULLET_NUM_ID: usize = 10;
const NUMBER_NUM_ID: usize = 11;

const LIST_INDENT: i32 = 720;
const LIST_HANGING: i32 = 360;

/// A paragraph waiting to be packed. Runs can still be appended to it.
#[derive(Debug, Clone)]
struct ParagraphDraft {
    style_id: Option<&'static str>,
    num_id: Option<usize>,
    alignment: Alignment,
    indent_twips: i32,
    runs: Vec<Run>,
}

impl ParagraphDraft {
    fn new(style_id: Option<&'static str>, num_id: Option<usize>) -> Self {
        Self {
            style_id,
            num_id,
            alignment: Alignment::Left,
            indent_twips: 0,
            runs: Vec::new(),
        }
    }

    fn apply(&mut self, style: &StyleSpec) {
        self.alignment = style.alignment;
        self.indent_twips = twips(style.left_indent_inches);
    }

    fn to_paragraph(&self) -> Paragraph {
        let mut paragraph = Paragraph::new();
        if let Some(style_id) = self.style_id {
            paragraph = paragraph.style(style_id);
        }
        if let Some(num_id) = self.num_id {
            paragraph = paragraph.numbering(NumberingId::new(num_id), IndentLevel::new(0));
        }
        if self.alignment == Alignment::Center {
            paragraph = paragraph.align(AlignmentType::Center);
        }
        if self.indent_twips > 0 {
            paragraph = paragraph.indent(Some(self.indent_twips), None, None, None);
        }
        self.runs
            .iter()
            .cloned()
            .fold(paragraph, |paragraph, run| paragraph.add_run(run))
    }
}

/// Writes documents as `.docx` packages.
#[derive(Debug, Clone)]
pub struct DocxWriter {
    started: bool,
    paragraphs: Vec<ParagraphDraft>,
    margins: PageMargins,
    created: Option<DateTime<Utc>>,
}

impl DocxWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self {
            started: false,
            paragraphs: Vec::new(),
            margins: PageMargins::default(),
            created: None,
        }
    }

    /// Number of paragraphs added so far.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Build the package in memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.pack(&mut cursor)?;
        Ok(cursor.into_inner())
    }

    fn pack<W: Write + Seek>(&self, writer: W) -> Result<()> {
        self.build()
            .build()
            .pack(writer)
            .map_err(|e| Error::Docx(e.to_string()))
    }

    fn build(&self) -> Docx {
        let created = self.created.unwrap_or_else(Utc::now);
        let mut docx = Docx::new()
            .default_size(DEFAULT_HALF_POINTS)
            .page_size(PAGE_WIDTH, PAGE_HEIGHT)
            .page_margin(
                PageMargin::new()
                    .top(twips(self.margins.top))
                    .bottom(twips(self.margins.bottom))
                    .left(twips(self.margins.left))
                    .right(twips(self.margins.right)),
            )
            .created_at(&created.to_rfc3339_opts(SecondsFormat::Secs, true));

        for level in 1..=3 {
            docx = docx.add_style(
                Style::new(format!("Heading{}", level), StyleType::Paragraph)
                    .name(format!("heading {}", level))
                    .based_on("Normal"),
            );
        }
        docx = docx
            .add_style(
                Style::new("ListBullet", StyleType::Paragraph)
                    .name("List Bullet")
                    .based_on("Normal"),
            )
            .add_style(
                Style::new("ListNumber", StyleType::Paragraph)
                    .name("List Number")
                    .based_on("Normal"),
            )
            .add_abstract_numbering(list_numbering(BULLET_NUM_ID, "bullet", "•"))
            .add_abstract_numbering(list_numbering(NUMBER_NUM_ID, "decimal", "%1."))
            .add_numbering(Numbering::new(BULLET_NUM_ID, BULLET_NUM_ID))
            .add_numbering(Numbering::new(NUMBER_NUM_ID, NUMBER_NUM_ID));

        self.paragraphs
            .iter()
            .fold(docx, |docx, draft| docx.add_paragraph(draft.to_paragraph()))
    }

    fn paragraph_mut(&mut self, handle: ParagraphHandle) -> Result<&mut ParagraphDraft> {
        self.paragraphs
            .get_mut(handle.0)
            .ok_or_else(|| Error::Serialize(format!("unknown paragraph {}", handle.0)))
    }

    fn push_paragraph(&mut self, draft: ParagraphDraft) -> Result<ParagraphHandle> {
        if !self.started {
            return Err(Error::Serialize("create_document was not called".into()));
        }
        self.paragraphs.push(draft);
        Ok(ParagraphHandle(self.paragraphs.len() - 1))
    }
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSerializer for DocxWriter {
    fn create_document(&mut self) -> Result<()> {
        *self = Self::new();
        self.started = true;
        Ok(())
    }

    fn set_metadata(&mut self, metadata: &Metadata) -> Result<()> {
        self.created = metadata.created;
        Ok(())
    }

    fn add_heading(
        &mut self,
        text: &str,
        level: u8,
        style: &StyleSpec,
    ) -> Result<ParagraphHandle> {
        let style_id = match level {
            1 => "Heading1",
            2 => "Heading2",
            3 => "Heading3",
            other => {
                return Err(Error::Serialize(format!(
                    "unsupported heading level {}",
                    other
                )))
            }
        };
        let handle = self.push_paragraph(ParagraphDraft::new(Some(style_id), None))?;
        self.append_run(handle, text, style)?;
        Ok(handle)
    }

    fn add_paragraph(&mut self, style_name: Option<&str>) -> Result<ParagraphHandle> {
        let draft = match style_name {
            None => ParagraphDraft::new(None, None),
            Some("List Bullet") => ParagraphDraft::new(Some("ListBullet"), Some(BULLET_NUM_ID)),
            Some("List Number") => ParagraphDraft::new(Some("ListNumber"), Some(NUMBER_NUM_ID)),
            Some(other) => {
                return Err(Error::Serialize(format!(
                    "unknown paragraph style {:?}",
                    other
                )))
            }
        };
        self.push_paragraph(draft)
    }

    fn append_run(
        &mut self,
        paragraph: ParagraphHandle,
        text: &str,
        style: &StyleSpec,
    ) -> Result<()> {
        let paragraph = self.paragraph_mut(paragraph)?;
        paragraph.apply(style);
        paragraph.runs.push(styled_run(text, style));
        Ok(())
    }

    fn set_page_margins(&mut self, margins: PageMargins) -> Result<()> {
        self.margins = margins;
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.pack(&mut writer)?;
        writer.flush()?;
        log::debug!(
            "saved {} paragraphs to {}",
            self.paragraphs.len(),
            path.display()
        );
        Ok(())
    }
}

fn twips(inches: f32) -> i32 {
    (inches.max(0.0) * TWIPS_PER_INCH).round() as i32
}

fn styled_run(text: &str, style: &StyleSpec) -> Run {
    let font = style.font_family.as_str();
    let run = Run::new()
        .add_text(text)
        .size((style.point_size * 2.0).round() as usize)
        .fonts(
            RunFonts::new()
                .ascii(font)
                .hi_ansi(font)
                .east_asia(font)
                .cs(font),
        );
    if style.bold {
        run.bold()
    } else {
        run
    }
}

fn list_numbering(id: usize, format: &str, text: &str) -> AbstractNumbering {
    AbstractNumbering::new(id).add_level(
        Level::new(
            0,
            Start::new(1),
            NumberFormat::new(format),
            LevelText::new(text),
            LevelJc::new("left"),
        )
        .indent(
            Some(LIST_INDENT),
            Some(SpecialIndentType::Hanging(LIST_HANGING)),
            None,
            None,
        ),
    )
}
