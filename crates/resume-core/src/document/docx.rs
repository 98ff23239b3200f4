//! Word (.docx) paragraph text extraction using docx-rs.

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use tracing::debug;

use super::Result;
use crate::error::DocumentError;

/// Extract the text of every top-level paragraph, in document order.
///
/// Tables and other non-paragraph blocks are skipped. Empty paragraphs are
/// kept so callers see the same paragraph count the document has.
pub fn extract_paragraphs(data: &[u8]) -> Result<Vec<String>> {
    let docx = docx_rs::read_docx(data).map_err(|e| DocumentError::Docx(format!("{:?}", e)))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    debug!("Read {} paragraphs from Word document", paragraphs.len());
    Ok(paragraphs)
}

/// Paragraph -> Run -> Text, runs concatenated without separator.
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();

    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }

    text
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use docx_rs::{Docx, Run};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    /// Build an in-memory .docx with one paragraph per entry.
    pub(crate) fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }

        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_extract_paragraphs_in_order() {
        let data = build_docx(&["Jane Doe", "123 Main St", "jane@example.com"]);
        let paragraphs = extract_paragraphs(&data).unwrap();
        assert_eq!(paragraphs, vec!["Jane Doe", "123 Main St", "jane@example.com"]);
    }

    #[test]
    fn test_runs_are_concatenated() {
        let para = Paragraph::new()
            .add_run(Run::new().add_text("Software "))
            .add_run(Run::new().add_text("Engineer"));
        assert_eq!(paragraph_text(&para), "Software Engineer");
    }

    #[test]
    fn test_tab_and_break_runs() {
        let para = Paragraph::new().add_run(
            Run::new()
                .add_text("a")
                .add_tab()
                .add_text("b")
                .add_break(docx_rs::BreakType::TextWrapping)
                .add_text("c"),
        );
        assert_eq!(paragraph_text(&para), "a\tb\nc");
    }

    #[test]
    fn test_rejects_garbage() {
        let err = extract_paragraphs(b"not a zip archive").unwrap_err();
        assert!(matches!(err, DocumentError::Docx(_)));
    }
}
