// Document backend on top of docx-rs.

use std::fs::File;

use docx_rs::{
    BreakType, Docx, DocxError, Paragraph, ParagraphBorder, ParagraphBorderPosition,
    ParagraphBorders, Run, Style, StyleType,
};
use log::debug;
use snafu::ResultExt;

use crate::report::assemble::{DocumentSink, ParagraphStyle};
use crate::report::{CreatingOutputSnafu, ReportResult, WritingDocumentSnafu};

/// Accumulates document content and serializes it to a `.docx` file.
///
/// Paragraphs are collected first and only packed into the document when
/// [DocxSink::save] is called, so a failed run leaves no partial file content
/// in memory to worry about.
pub struct DocxSink {
    children: Vec<Paragraph>,
}

impl DocxSink {
    pub fn new() -> DocxSink {
        DocxSink {
            children: Vec::new(),
        }
    }

    /// Serializes the accumulated content to `path`.
    pub fn save(self, path: &str) -> ReportResult<()> {
        debug!("save: {} paragraphs to {}", self.children.len(), path);
        let file = File::create(path).context(CreatingOutputSnafu { path })?;
        let mut docx = base_docx();
        for p in self.children {
            docx = docx.add_paragraph(p);
        }
        pack(docx, file).context(WritingDocumentSnafu { path })?;
        Ok(())
    }
}

impl Default for DocxSink {
    fn default() -> DocxSink {
        DocxSink::new()
    }
}

impl DocumentSink for DocxSink {
    fn add_heading(&mut self, text: &str, level: usize) {
        let mut p = Paragraph::new()
            .add_run(Run::new().add_text(text))
            .style(heading_style_id(level));
        if level > 0 {
            p = p.outline_lvl(level - 1);
        }
        self.children.push(p);
    }

    fn add_paragraph(&mut self, text: &str, style: ParagraphStyle) {
        let mut run = Run::new().add_text(text);
        if style.italic {
            run = run.italic();
        }
        let mut p = Paragraph::new().add_run(run);
        if style.rule_after {
            // A blank line followed by a bottom border, rendered as a
            // horizontal rule directly below the text.
            p = p.add_run(Run::new().add_break(BreakType::TextWrapping));
            p.property = p.property.set_borders(
                ParagraphBorders::with_empty()
                    .set(ParagraphBorder::new(ParagraphBorderPosition::Bottom)),
            );
        }
        self.children.push(p);
    }

    fn add_page_break(&mut self) {
        self.children
            .push(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)));
    }
}

fn pack(docx: Docx, file: File) -> Result<(), DocxError> {
    docx.build().pack(file)?;
    Ok(())
}

// The document ships its own heading styles; docx-rs does not register any by
// default. Sizes are half-points.
fn base_docx() -> Docx {
    Docx::new()
        .add_style(
            Style::new("Title", StyleType::Paragraph)
                .name("Title")
                .size(56),
        )
        .add_style(heading_style("Heading2", "Heading 2", 26))
        .add_style(heading_style("Heading4", "Heading 4", 24))
        .add_style(heading_style("Heading5", "Heading 5", 22))
}

fn heading_style(id: &str, name: &str, size: usize) -> Style {
    Style::new(id, StyleType::Paragraph)
        .name(name)
        .size(size)
        .bold()
        .color("2E74B5")
}

fn heading_style_id(level: usize) -> &'static str {
    match level {
        0 => "Title",
        1 => "Heading1",
        2 => "Heading2",
        3 => "Heading3",
        4 => "Heading4",
        _ => "Heading5",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_a_zip_container() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");

        let mut sink = DocxSink::new();
        sink.add_heading("A title", 0);
        sink.add_heading("A case", 2);
        sink.add_paragraph(
            "A prompt",
            ParagraphStyle {
                italic: true,
                rule_after: true,
            },
        );
        sink.add_page_break();
        sink.save(path.to_str().unwrap()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn rule_paragraphs_pack() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rule.docx");

        let mut sink = DocxSink::new();
        sink.add_paragraph(
            "closing text",
            ParagraphStyle {
                italic: false,
                rule_after: true,
            },
        );
        sink.save(path.to_str().unwrap()).unwrap();

        assert!(std::fs::read(&path).unwrap().starts_with(b"PK"));
    }

    #[test]
    fn fails_on_an_invalid_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.docx");
        let res = DocxSink::new().save(path.to_str().unwrap());
        assert!(res.is_err());
    }
}
