//! Document upload and text extraction endpoint.

use std::io::Write;
use std::path::Path;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::error;

use textmill_extractors::{decode_plain_text, DocumentFormat};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Form field the front-end uses for the uploaded document.
const UPLOAD_FIELD: &str = "resumeFile";

/// Prefix for the per-request temporary files.
const TEMP_FILE_PREFIX: &str = "textmill-";

/// Response for a successful extraction.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub text_content: String,
}

/// Extract the plain-text content of an uploaded document.
/// POST /upload_resume
pub async fn upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let (filename, data) = read_upload_field(&mut multipart).await?;

    if filename.is_empty() {
        return Err(ApiError::bad_request("No selected file"));
    }

    let filename = sanitize_filename(&filename);
    let extension = file_extension(&filename);

    let format = DocumentFormat::from_extension(&extension)
        .ok_or_else(ApiError::unsupported_media_type)?;

    let text = match format {
        // Plain text is decoded straight from the request body and never
        // touches the disk.
        DocumentFormat::Txt => decode_plain_text(&data).map_err(|err| {
            error!(error = %err, "failed to decode uploaded text file");
            ApiError::from(err)
        })?,
        format => extract_via_temp_file(&state, format, &data).await?,
    };

    Ok(Json(UploadResponse { text_content: text }))
}

/// Pull the upload field out of the multipart form.
///
/// Returns the declared filename and the raw bytes. A form without the
/// field, or one we cannot read at all, is a client error.
async fn read_upload_field(multipart: &mut Multipart) -> Result<(String, Vec<u8>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::bad_request("No file part in the request"))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        let data = field.bytes().await.map_err(|err| {
            error!(error = %err, "failed to read upload field body");
            ApiError::internal()
        })?;

        return Ok((filename, data.to_vec()));
    }

    Err(ApiError::bad_request("No file part in the request"))
}

/// Persist the upload to a uniquely named temporary file and run the
/// extractor for `format` on it.
///
/// The file lives exactly as long as this call: the `NamedTempFile` guard
/// removes it on drop, on success and on every failure path.
async fn extract_via_temp_file(
    state: &AppState,
    format: DocumentFormat,
    data: &[u8],
) -> Result<String, ApiError> {
    let temp_file = persist_to_temp_file(format, data).map_err(|err| {
        error!(error = %err, "failed to persist upload to temporary file");
        ApiError::internal()
    })?;

    state
        .extractors
        .extract(format, temp_file.path())
        .await
        .map_err(|err| {
            error!(error = %err, format = format.extension(), "text extraction failed");
            ApiError::from(err)
        })
}

/// Write the upload bytes to a temporary file carrying the format's
/// extension, so extraction libraries that sniff suffixes see the right one.
fn persist_to_temp_file(format: DocumentFormat, data: &[u8]) -> std::io::Result<NamedTempFile> {
    let mut temp_file = tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .suffix(&format!(".{}", format.extension()))
        .tempfile()?;

    temp_file.write_all(data)?;
    temp_file.flush()?;

    Ok(temp_file)
}

/// Normalize a client-supplied filename before deriving its extension.
///
/// Path components are stripped and anything outside `[A-Za-z0-9._-]` is
/// replaced with an underscore, so a hostile filename cannot traverse
/// directories or collide with another upload's name.
fn sanitize_filename(filename: &str) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Lower-cased extension of a sanitized filename, without the leading dot.
fn file_extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}
