//! Error handling for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use textmill_extractors::ExtractError;

/// Message returned for uploads whose extension is not supported.
pub const UNSUPPORTED_TYPE_MESSAGE: &str =
    "Unsupported file type. Please upload a .txt, .docx, or .pdf file.";

/// Message returned when an extractor cannot produce text from a document.
pub const EXTRACTION_FAILED_MESSAGE: &str = "Failed to extract text from the file.";

/// Message returned for unexpected failures while handling an upload.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An internal server error occurred during file processing.";

/// API error type.
///
/// Every failure in the upload pipeline is converted to one of these at the
/// handler boundary; nothing propagates past it. Internal causes are logged
/// server-side and never placed in `message`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unsupported_media_type() -> Self {
        Self::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, UNSUPPORTED_TYPE_MESSAGE)
    }

    pub fn extraction_failed() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, EXTRACTION_FAILED_MESSAGE)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error response body.
///
/// The wire contract is a flat object: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

// Convert from extraction errors.
//
// Library-level parse failures keep their own client message; everything
// else collapses into the generic internal error.
impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat(_) => ApiError::unsupported_media_type(),
            ExtractError::Pdf(_) | ExtractError::Docx(_) => ApiError::extraction_failed(),
            ExtractError::Io(_) | ExtractError::Utf8(_) | ExtractError::TaskJoin(_) => {
                ApiError::internal()
            }
        }
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
