//! Factory for creating extractors.

use std::sync::Arc;

use crate::error::{ExtractError, ExtractResult};
use crate::types::DocumentFormat;
use crate::Extractor;

#[cfg(feature = "pdf")]
use crate::PdfExtractor;

#[cfg(feature = "docx")]
use crate::DocxExtractor;

/// Factory for creating document extractors.
pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Create a PDF extractor.
    #[cfg(feature = "pdf")]
    pub fn pdf() -> Arc<dyn Extractor> {
        Arc::new(PdfExtractor::new())
    }

    /// Create a DOCX extractor.
    #[cfg(feature = "docx")]
    pub fn docx() -> Arc<dyn Extractor> {
        Arc::new(DocxExtractor::new())
    }

    /// Create the extractor for a file-based document format.
    ///
    /// `Txt` uploads are decoded in place from their raw bytes and have no
    /// file-based extractor; requesting one is an error.
    pub fn for_format(format: DocumentFormat) -> ExtractResult<Arc<dyn Extractor>> {
        match format {
            #[cfg(feature = "pdf")]
            DocumentFormat::Pdf => Ok(Self::pdf()),

            #[cfg(feature = "docx")]
            DocumentFormat::Docx => Ok(Self::docx()),

            other => Err(ExtractError::UnsupportedFormat(
                other.extension().to_string(),
            )),
        }
    }

    /// Get all available file-based extractors.
    pub fn all() -> Vec<Arc<dyn Extractor>> {
        let mut extractors: Vec<Arc<dyn Extractor>> = Vec::new();

        #[cfg(feature = "pdf")]
        extractors.push(Self::pdf());

        #[cfg(feature = "docx")]
        extractors.push(Self::docx());

        extractors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_all_extractors() {
        let extractors = ExtractorFactory::all();

        #[cfg(all(feature = "pdf", feature = "docx"))]
        assert_eq!(extractors.len(), 2);

        #[cfg(all(feature = "pdf", not(feature = "docx")))]
        assert_eq!(extractors.len(), 1);

        #[cfg(all(feature = "docx", not(feature = "pdf")))]
        assert_eq!(extractors.len(), 1);
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_factory_for_format_pdf() {
        let extractor = ExtractorFactory::for_format(DocumentFormat::Pdf).unwrap();
        assert_eq!(extractor.format(), DocumentFormat::Pdf);
    }

    #[cfg(feature = "docx")]
    #[test]
    fn test_factory_for_format_docx() {
        let extractor = ExtractorFactory::for_format(DocumentFormat::Docx).unwrap();
        assert_eq!(extractor.format(), DocumentFormat::Docx);
    }

    #[test]
    fn test_factory_txt_has_no_file_extractor() {
        let result = ExtractorFactory::for_format(DocumentFormat::Txt);
        assert!(matches!(result, Err(ExtractError::UnsupportedFormat(_))));
    }
}
