//! Integration tests for output serializers.

use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use mdocx::render::{build_document, StyleResolver};
use mdocx::writer::{emit_document, write_document};
use mdocx::{
    Alignment, Document, DocxWriter, Error, OutputSerializer, PageMargins, ParagraphHandle,
    Result, StyleSpec,
};
use chrono::SecondsFormat;
use zip::ZipArchive;

/// Serializer that records every call for inspection.
#[derive(Default)]
struct RecordingSerializer {
    calls: Vec<Call>,
    paragraphs: usize,
    saved_to: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Create,
    Heading { level: u8, text: String },
    Paragraph(Option<String>),
    Run {
        paragraph: ParagraphHandle,
        text: String,
        style: StyleSpec,
    },
    Margins(PageMargins),
}

impl OutputSerializer for RecordingSerializer {
    fn create_document(&mut self) -> Result<()> {
        self.calls.push(Call::Create);
        Ok(())
    }

    fn add_heading(&mut self, text: &str, level: u8, _: &StyleSpec) -> Result<ParagraphHandle> {
        self.calls.push(Call::Heading {
            level,
            text: text.to_string(),
        });
        self.paragraphs += 1;
        Ok(ParagraphHandle(self.paragraphs - 1))
    }

    fn add_paragraph(&mut self, style_name: Option<&str>) -> Result<ParagraphHandle> {
        self.calls.push(Call::Paragraph(style_name.map(String::from)));
        self.paragraphs += 1;
        Ok(ParagraphHandle(self.paragraphs - 1))
    }

    fn append_run(
        &mut self,
        paragraph: ParagraphHandle,
        text: &str,
        style: &StyleSpec,
    ) -> Result<()> {
        self.calls.push(Call::Run {
            paragraph,
            text: text.to_string(),
            style: style.clone(),
        });
        Ok(())
    }

    fn set_page_margins(&mut self, margins: PageMargins) -> Result<()> {
        self.calls.push(Call::Margins(margins));
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        self.saved_to = Some(path.to_path_buf());
        Ok(())
    }
}

/// Serializer that rejects every paragraph.
struct FailingSerializer;

impl OutputSerializer for FailingSerializer {
    fn create_document(&mut self) -> Result<()> {
        Ok(())
    }

    fn add_heading(&mut self, _: &str, _: u8, _: &StyleSpec) -> Result<ParagraphHandle> {
        Err(Error::Serialize("no headings".into()))
    }

    fn add_paragraph(&mut self, _style_name: Option<&str>) -> Result<ParagraphHandle> {
        Err(Error::Serialize("no paragraphs".into()))
    }

    fn append_run(&mut self, _: ParagraphHandle, _: &str, _: &StyleSpec) -> Result<()> {
        Ok(())
    }

    fn set_page_margins(&mut self, _margins: PageMargins) -> Result<()> {
        Ok(())
    }

    fn save(&mut self, _path: &Path) -> Result<()> {
        panic!("save must not be reached");
    }
}

fn document(text: &str) -> Document {
    build_document(text, StyleResolver::default()).unwrap().document
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

#[test]
fn test_replay_order() {
    let doc = document("# 規約\n- 住所\n1. 申込\n\n---");
    let mut out = RecordingSerializer::default();
    write_document(&doc, &mut out, Path::new("out.docx")).unwrap();

    let shape: Vec<_> = out
        .calls
        .iter()
        .map(|call| match call {
            Call::Run { text, .. } => format!("run:{}", text.chars().next().unwrap_or(' ')),
            other => format!("{:?}", other),
        })
        .collect();

    assert_eq!(
        shape,
        vec![
            "Create",
            "Heading { level: 1, text: \"規約\" }",
            "Paragraph(Some(\"List Bullet\"))",
            "run:住",
            "Paragraph(Some(\"List Number\"))",
            "run:申",
            "Paragraph(None)",
            "Paragraph(None)",
            "run:─",
            "Margins(PageMargins { top: 1.0, bottom: 1.0, left: 1.0, right: 1.0 })",
        ]
    );
    assert_eq!(out.saved_to.as_deref(), Some(Path::new("out.docx")));
}

#[test]
fn test_runs_target_their_paragraph() {
    let doc = document("氏名：＿＿ 住所：＿＿\n(1) 条項");
    let mut out = RecordingSerializer::default();
    emit_document(&doc, &mut out).unwrap();

    let handles: Vec<_> = out
        .calls
        .iter()
        .filter_map(|call| match call {
            Call::Run { paragraph, .. } => Some(paragraph.0),
            _ => None,
        })
        .collect();
    assert_eq!(handles, vec![0, 0, 0, 0, 1]);

    let clause_style = out
        .calls
        .iter()
        .rev()
        .find_map(|call| match call {
            Call::Run { style, .. } => Some(style.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(clause_style.left_indent_inches, 0.5);
    assert_eq!(clause_style.alignment, Alignment::Left);
    assert!(out.saved_to.is_none());
}

#[test]
fn test_serializer_error_stops_replay() {
    let doc = document("text");
    let result = write_document(&doc, &mut FailingSerializer, Path::new("never.docx"));
    assert!(matches!(result, Err(Error::Serialize(_))));
}

#[test]
fn test_docx_package_parts() {
    let doc = document("# 会員規約\nbody");
    let mut writer = DocxWriter::new();
    emit_document(&doc, &mut writer).unwrap();
    let bytes = writer.to_bytes().unwrap();

    let mut archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
    for name in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "word/_rels/document.xml.rels",
        "word/document.xml",
        "word/styles.xml",
        "word/numbering.xml",
    ] {
        assert!(archive.by_name(name).is_ok(), "missing part {}", name);
    }

    let core = read_part(&bytes, "docProps/core.xml");
    let created = doc.metadata.created.unwrap();
    assert!(core.contains(&created.to_rfc3339_opts(SecondsFormat::Secs, true)));
}

#[test]
fn test_docx_document_xml() {
    let doc = document("# 会員規約\n☑ 同意する\n**重要**\n- A & B <c>");
    let mut writer = DocxWriter::new();
    emit_document(&doc, &mut writer).unwrap();
    assert_eq!(writer.paragraph_count(), 4);

    let xml = read_part(&writer.to_bytes().unwrap(), "word/document.xml");

    assert!(xml.contains(r#"w:val="Heading1""#));
    assert!(xml.contains("会員規約"));
    assert!(xml.contains(r#"w:val="center""#));
    assert!(xml.contains(r#"w:val="32""#));
    assert!(xml.contains(r#"w:eastAsia="メイリオ""#));
    assert!(xml.contains(r#"w:left="720""#));
    assert!(xml.contains("☑ 同意する"));
    assert!(xml.contains("<w:b"));
    assert!(xml.contains(r#"w:val="ListBullet""#));
    assert!(xml.contains("A &amp; B &lt;c&gt;"));
    assert!(xml.contains(r#"w:top="1440""#));
    assert!(xml.contains(r#"w:bottom="1440""#));
}

#[test]
fn test_docx_styles_and_numbering() {
    let mut writer = DocxWriter::new();
    emit_document(&document("- a\n1. b"), &mut writer).unwrap();
    let bytes = writer.to_bytes().unwrap();

    let styles = read_part(&bytes, "word/styles.xml");
    for id in ["Heading1", "Heading2", "Heading3", "ListBullet", "ListNumber"] {
        assert!(styles.contains(&format!(r#"w:styleId="{}""#, id)), "{}", id);
    }

    let numbering = read_part(&bytes, "word/numbering.xml");
    assert!(numbering.contains(r#"w:val="bullet""#));
    assert!(numbering.contains(r#"w:val="decimal""#));
    assert!(numbering.contains("%1."));

    let xml = read_part(&bytes, "word/document.xml");
    assert!(xml.contains("<w:numPr>"));
}

#[test]
fn test_docx_save_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("terms.docx");

    let mut writer = DocxWriter::new();
    write_document(&document("# Terms"), &mut writer, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"PK");
    assert!(read_part(&bytes, "word/document.xml").contains("Terms"));
}

#[test]
fn test_docx_rejects_deep_heading() {
    let mut writer = DocxWriter::new();
    writer.create_document().unwrap();
    let style = StyleSpec::new("Meiryo", 12.0);
    let result = writer.add_heading("細目", 4, &style);
    assert!(matches!(result, Err(Error::Serialize(_))));
    assert_eq!(writer.paragraph_count(), 0);
}
