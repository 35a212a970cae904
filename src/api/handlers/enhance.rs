use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::response::ApiError;
use crate::{enhance, filename, AppState};

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct EnhanceResponse {
    pub success: bool,
    pub download_url: String,
}

// ============================================================================
// Handler
// ============================================================================

/// Accept a multipart upload in the `file` field, store it, run the
/// enhancement, and store the result under `enhanced_<name>`.
///
/// Known limitation: two uploads whose filenames sanitize to the same name
/// overwrite each other, in the uploads store and the processed store both.
/// Last write wins; there is no ordering guarantee between racing requests.
pub async fn enhance_upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<EnhanceResponse>, ApiError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart data: {e}")))?
    {
        if field.name() != Some("file") {
            // Ignore unknown fields
            continue;
        }

        let raw_name = field.file_name().unwrap_or("").to_string();
        if raw_name.is_empty() {
            return Err(ApiError::bad_request("No selected file"));
        }
        if !filename::is_allowed(&raw_name) {
            return Err(ApiError::bad_request("File type not allowed"));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read file: {e}")))?;

        if data.len() as u64 > state.config.max_upload_size {
            return Err(ApiError::payload_too_large(format!(
                "File exceeds maximum upload size of {} bytes",
                state.config.max_upload_size
            )));
        }

        upload = Some((raw_name, data));
        break;
    }

    let (raw_name, data) = upload.ok_or_else(|| ApiError::bad_request("No file part"))?;

    let name = filename::sanitize(&raw_name);
    if name.is_empty() {
        return Err(ApiError::bad_request("No selected file"));
    }

    state.uploads.put(&name, data.clone()).await.map_err(|e| {
        tracing::error!(file = %name, error = %e, "Failed to store upload");
        ApiError::internal("Failed to process image.")
    })?;

    // The output keeps the upload's extension, so the encode format follows
    // from the sanitized name.
    let format = match enhance::format_for(&name) {
        Ok(format) => format,
        Err(e) => {
            tracing::error!(file = %name, error = %e, "No encodable output format");
            return Err(ApiError::internal("Failed to process image."));
        }
    };

    // Decode plus two full-image passes is CPU-bound; keep it off the
    // async workers.
    let enhanced = match tokio::task::spawn_blocking(move || enhance::enhance_image(&data, format))
        .await
    {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(e)) => {
            tracing::error!(file = %name, error = %e, "Image enhancement failed");
            return Err(ApiError::internal("Failed to process image."));
        }
        Err(e) => {
            tracing::error!(file = %name, error = %e, "Enhancement task panicked");
            return Err(ApiError::internal("Failed to process image."));
        }
    };

    let output = filename::output_name(&name);
    state
        .processed
        .put(&output, Bytes::from(enhanced))
        .await
        .map_err(|e| {
            tracing::error!(file = %output, error = %e, "Failed to store processed image");
            ApiError::internal("Failed to process image.")
        })?;

    tracing::debug!(file = %name, output = %output, "Enhanced image");

    Ok(Json(EnhanceResponse {
        success: true,
        download_url: format!("/download/{output}"),
    }))
}
