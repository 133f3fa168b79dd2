//! PDF text extraction using pdf-extract.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{ExtractError, ExtractResult};
use crate::types::DocumentFormat;
use crate::Extractor;

/// PDF text extractor using the pdf-extract library.
///
/// Extracts text page by page in document order and joins pages with
/// newlines, wrapping the synchronous pdf-extract calls in spawn_blocking
/// to avoid blocking the async runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract text synchronously (called within spawn_blocking).
    fn extract_sync(path: PathBuf) -> Result<String, ExtractError> {
        let pages = pdf_extract::extract_text_by_pages(&path)
            .map_err(|e| ExtractError::Pdf(format!("Failed to parse PDF: {}", e)))?;

        // A page with no extractable text contributes an empty line.
        Ok(pages.join("\n"))
    }
}

#[async_trait]
impl Extractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> ExtractResult<String> {
        let path = path.to_path_buf();
        let text = tokio::task::spawn_blocking(move || Self::extract_sync(path)).await??;
        Ok(text)
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_pdf_extractor_metadata() {
        let extractor = PdfExtractor::new();
        assert_eq!(extractor.name(), "pdf-extract");
        assert_eq!(extractor.format(), DocumentFormat::Pdf);
    }

    #[tokio::test]
    async fn test_pdf_extractor_rejects_corrupt_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".pdf")
            .tempfile()
            .unwrap();
        file.write_all(b"this is not a pdf document").unwrap();
        file.flush().unwrap();

        let extractor = PdfExtractor::new();
        let result = extractor.extract(file.path()).await;
        assert!(matches!(result, Err(ExtractError::Pdf(_))));
    }
}
