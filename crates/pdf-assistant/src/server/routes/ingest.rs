//! PDF upload endpoint

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::IngestResponse;

/// Multipart field carrying the PDF
const FILE_FIELD: &str = "file";

/// Content types accepted for the uploaded file
const ACCEPTED_CONTENT_TYPES: &[&str] = &["application/pdf", "application/octet-stream"];

/// POST /upload - Replace the active document with the uploaded PDF
pub async fn upload_pdf(
    State(state): State<AppState>,
    multipart: Multipart,
) -> (StatusCode, Json<IngestResponse>) {
    let start = Instant::now();

    let result = match read_file_field(multipart).await {
        Ok(data) => state.ingest_document(data).await.map(|_| ()),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            tracing::info!("Upload processed in {:?}", start.elapsed());
            (StatusCode::OK, Json(IngestResponse::success()))
        }
        Err(e) => {
            tracing::warn!("Upload failed: {}", e);
            (e.status_code(), Json(IngestResponse::error(&e)))
        }
    }
}

/// Pull the bytes of the `file` field, skipping any other fields
async fn read_file_field(mut multipart: Multipart) -> Result<Vec<u8>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::invalid_argument(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        if let Some(content_type) = field.content_type() {
            let essence = content_type
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase();
            if !ACCEPTED_CONTENT_TYPES.contains(&essence.as_str()) {
                return Err(Error::unreadable(format!(
                    "Expected a PDF upload, got '{}'",
                    content_type
                )));
            }
        }

        let filename = field.file_name().unwrap_or("upload.pdf").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| Error::invalid_argument(format!("Failed to read file: {}", e)))?;

        if data.is_empty() {
            return Err(Error::MissingDocument);
        }

        tracing::info!("Processing file: {} ({} bytes)", filename, data.len());
        return Ok(data.to_vec());
    }

    Err(Error::MissingDocument)
}
