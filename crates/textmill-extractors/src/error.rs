//! Extraction error types.

use thiserror::Error;

/// Errors that can occur while turning an uploaded document into text.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No extractor handles the given format or extension.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// PDF library failed to parse the document.
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// DOCX library failed to parse the document.
    #[error("DOCX extraction error: {0}")]
    Docx(String),

    /// IO error while reading the document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Plain-text upload is not valid UTF-8.
    #[error("Invalid UTF-8 in text document: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Task join error from spawn_blocking.
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
