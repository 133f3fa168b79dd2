//! DOCX text extraction using docx-rs.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::error::{ExtractError, ExtractResult};
use crate::types::DocumentFormat;
use crate::Extractor;

/// DOCX text extractor using the docx-rs library.
///
/// Concatenates the text of every top-level paragraph in document order
/// with newline separators. Empty paragraphs contribute empty lines, so the
/// extracted text preserves the document's vertical spacing. Wraps
/// synchronous docx-rs calls in spawn_blocking to avoid blocking the async
/// runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new DOCX extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract text synchronously (called within spawn_blocking).
    fn extract_sync(path: PathBuf) -> Result<String, ExtractError> {
        let content = std::fs::read(&path)?;
        let docx = docx_rs::read_docx(&content)
            .map_err(|e| ExtractError::Docx(format!("Failed to parse DOCX: {}", e)))?;

        let mut paragraphs: Vec<String> = Vec::new();
        for child in docx.document.children {
            if let DocumentChild::Paragraph(p) = child {
                paragraphs.push(Self::paragraph_text(&p));
            }
        }

        Ok(paragraphs.join("\n"))
    }

    /// Extract the text of a single paragraph.
    fn paragraph_text(p: &docx_rs::Paragraph) -> String {
        let mut text = String::new();

        for child in &p.children {
            match child {
                ParagraphChild::Run(r) => {
                    for run_child in &r.children {
                        match run_child {
                            RunChild::Text(t) => {
                                text.push_str(&t.text);
                            }
                            RunChild::Tab(_) => {
                                text.push('\t');
                            }
                            RunChild::Break(_) => {
                                text.push('\n');
                            }
                            _ => {}
                        }
                    }
                }
                ParagraphChild::Hyperlink(h) => {
                    // Hyperlink children are ParagraphChild, so reuse the
                    // run-walking logic for the link text.
                    for child in &h.children {
                        if let ParagraphChild::Run(r) = child {
                            for run_child in &r.children {
                                if let RunChild::Text(t) = run_child {
                                    text.push_str(&t.text);
                                }
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        text
    }
}

#[async_trait]
impl Extractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> ExtractResult<String> {
        let path = path.to_path_buf();
        let text = tokio::task::spawn_blocking(move || Self::extract_sync(path)).await??;
        Ok(text)
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn name(&self) -> &str {
        "docx-rs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Write;

    fn write_docx(docx: Docx) -> tempfile::NamedTempFile {
        let mut buf = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();

        let mut file = tempfile::Builder::new()
            .suffix(".docx")
            .tempfile()
            .unwrap();
        file.write_all(buf.get_ref()).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_docx_extractor_metadata() {
        let extractor = DocxExtractor::new();
        assert_eq!(extractor.name(), "docx-rs");
        assert_eq!(extractor.format(), DocumentFormat::Docx);
    }

    #[tokio::test]
    async fn test_docx_paragraphs_joined_with_newlines() {
        let file = write_docx(
            Docx::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Hello")))
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("World"))),
        );

        let extractor = DocxExtractor::new();
        let text = extractor.extract(file.path()).await.unwrap();
        assert_eq!(text, "Hello\nWorld");
    }

    #[tokio::test]
    async fn test_docx_empty_paragraph_becomes_empty_line() {
        let file = write_docx(
            Docx::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Hello")))
                .add_paragraph(Paragraph::new())
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("World"))),
        );

        let extractor = DocxExtractor::new();
        let text = extractor.extract(file.path()).await.unwrap();
        assert_eq!(text, "Hello\n\nWorld");
    }

    #[tokio::test]
    async fn test_docx_extractor_rejects_corrupt_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".docx")
            .tempfile()
            .unwrap();
        file.write_all(b"this is not a docx document").unwrap();
        file.flush().unwrap();

        let extractor = DocxExtractor::new();
        let result = extractor.extract(file.path()).await;
        assert!(matches!(result, Err(ExtractError::Docx(_))));
    }
}
