//! textmill-extractors - Plain-text extraction from uploaded documents.
//!
//! Provides extractors for PDF and DOCX files plus strict UTF-8 decoding for
//! plain-text uploads, behind a unified trait-based interface. The binary
//! formats are handled entirely by external parsing libraries; nothing in
//! this crate decodes PDF or DOCX structure itself.
//!
//! # Features
//!
//! - `pdf` (default) - PDF text extraction via pdf-extract
//! - `docx` (default) - DOCX text extraction via docx-rs
//!
//! # Example
//!
//! ```ignore
//! use textmill_extractors::{DocumentFormat, ExtractorRegistry};
//!
//! // Route a file to the extractor for its format
//! let registry = ExtractorRegistry::with_defaults();
//! let text = registry.extract(DocumentFormat::Pdf, path).await?;
//!
//! // Plain-text uploads skip the filesystem entirely
//! let text = textmill_extractors::decode_plain_text(&bytes)?;
//! ```

mod error;
mod factory;
mod registry;
mod text;
mod types;

#[cfg(feature = "pdf")]
mod pdf;

#[cfg(feature = "docx")]
mod docx;

pub use error::{ExtractError, ExtractResult};
pub use factory::ExtractorFactory;
pub use registry::ExtractorRegistry;
pub use text::decode_plain_text;
pub use types::DocumentFormat;

#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;

#[cfg(feature = "docx")]
pub use docx::DocxExtractor;

use std::path::Path;

use async_trait::async_trait;

/// Core Extractor trait - all file-based extractors implement this.
///
/// Extractors are single-shot and stateless: one call turns one document on
/// disk into its plain-text content.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract the plain-text content of the document at `path`.
    async fn extract(&self, path: &Path) -> ExtractResult<String>;

    /// The document format this extractor handles.
    fn format(&self) -> DocumentFormat;

    /// Human-readable name for this extractor.
    fn name(&self) -> &str;
}
