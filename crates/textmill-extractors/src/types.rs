//! Format tags for the supported document types.

use serde::{Deserialize, Serialize};

/// Closed set of document formats the service accepts.
///
/// Dispatch is driven by this tag rather than by branching on raw extension
/// strings; adding a format means adding a variant plus an extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Plain UTF-8 text.
    Txt,
    /// Microsoft Word document.
    Docx,
    /// PDF document.
    Pdf,
}

impl DocumentFormat {
    /// Resolve a file extension (without the leading dot) to a format tag.
    ///
    /// Matching is case-insensitive; unknown extensions return `None`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(Self::Txt),
            "docx" => Some(Self::Docx),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Canonical lower-case extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension_known_formats() {
        assert_eq!(DocumentFormat::from_extension("txt"), Some(DocumentFormat::Txt));
        assert_eq!(DocumentFormat::from_extension("docx"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_extension("pdf"), Some(DocumentFormat::Pdf));
    }

    #[test]
    fn test_from_extension_is_case_insensitive() {
        assert_eq!(DocumentFormat::from_extension("PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("Docx"), Some(DocumentFormat::Docx));
    }

    #[test]
    fn test_from_extension_unknown() {
        assert_eq!(DocumentFormat::from_extension("png"), None);
        assert_eq!(DocumentFormat::from_extension(""), None);
        assert_eq!(DocumentFormat::from_extension("doc"), None);
    }

    #[test]
    fn test_extension_round_trip() {
        for format in [DocumentFormat::Txt, DocumentFormat::Docx, DocumentFormat::Pdf] {
            assert_eq!(DocumentFormat::from_extension(format.extension()), Some(format));
        }
    }
}
