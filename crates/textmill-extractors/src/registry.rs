//! Routing of document formats to their extractors.

use std::path::Path;
use std::sync::Arc;

use crate::error::{ExtractError, ExtractResult};
use crate::types::DocumentFormat;
use crate::{Extractor, ExtractorFactory};

/// Registry of file-based extractors, routing each document format to the
/// extractor that handles it.
pub struct ExtractorRegistry {
    extractors: Vec<Arc<dyn Extractor>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Create a registry with all available extractors.
    pub fn with_defaults() -> Self {
        Self {
            extractors: ExtractorFactory::all(),
        }
    }

    /// Add an extractor to the registry.
    pub fn add_extractor(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    /// Run the extractor registered for `format` against a file on disk.
    pub async fn extract(&self, format: DocumentFormat, path: &Path) -> ExtractResult<String> {
        for extractor in &self.extractors {
            if extractor.format() == format {
                return extractor.extract(path).await;
            }
        }

        Err(ExtractError::UnsupportedFormat(
            format.extension().to_string(),
        ))
    }

    /// Check whether a format has a registered extractor.
    pub fn supports(&self, format: DocumentFormat) -> bool {
        self.extractors.iter().any(|e| e.format() == format)
    }

    /// Get the number of registered extractors.
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    /// Check if the registry has no registered extractors.
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_with_defaults() {
        let registry = ExtractorRegistry::with_defaults();

        #[cfg(feature = "pdf")]
        assert!(registry.supports(DocumentFormat::Pdf));

        #[cfg(feature = "docx")]
        assert!(registry.supports(DocumentFormat::Docx));

        // Plain text is decoded in place, never through the registry.
        assert!(!registry.supports(DocumentFormat::Txt));
    }

    #[test]
    fn test_registry_empty() {
        let registry = ExtractorRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(!registry.supports(DocumentFormat::Pdf));
    }

    #[tokio::test]
    async fn test_registry_unregistered_format_error() {
        let registry = ExtractorRegistry::new();
        let result = registry
            .extract(DocumentFormat::Pdf, Path::new("missing.pdf"))
            .await;
        assert!(matches!(result, Err(ExtractError::UnsupportedFormat(_))));
    }
}
