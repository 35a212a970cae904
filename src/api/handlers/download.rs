use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::path::{Component, Path};
use std::sync::Arc;

use crate::api::response::ApiError;
use crate::store::BlobStoreError;
use crate::AppState;

/// Serve a processed file as an attachment.
/// Route: GET /download/:name
pub async fn download(
    State(state): State<Arc<AppState>>,
    axum::extract::Path(name): axum::extract::Path<String>,
) -> Result<Response, ApiError> {
    // Only a single normal path component may reach the store; `..`,
    // absolute paths, and embedded separators (including percent-encoded
    // ones, which arrive decoded) are treated as absent files.
    if !is_plain_name(&name) {
        return Err(ApiError::not_found("File not found"));
    }

    let data = state.processed.get(&name).await.map_err(|e| match e {
        BlobStoreError::NotFound(_) => ApiError::not_found("File not found"),
        _ => ApiError::internal(format!("Failed to retrieve file: {e}")),
    })?;

    let byte_size = data.len() as u64;

    // Build response with appropriate headers
    let mut response = (StatusCode::OK, data).into_response();
    let headers = response.headers_mut();

    headers.insert(
        header::CONTENT_TYPE,
        mime_guess::from_path(&name)
            .first_or_octet_stream()
            .to_string()
            .parse()
            .unwrap_or(header::HeaderValue::from_static("application/octet-stream")),
    );

    headers.insert(header::CONTENT_LENGTH, header::HeaderValue::from(byte_size));

    // Force a save dialog under the processed name
    if let Ok(value) = format!("attachment; filename=\"{name}\"").parse() {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }

    Ok(response)
}

fn is_plain_name(name: &str) -> bool {
    if name.contains('\\') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(components.next(), Some(Component::Normal(_))) && components.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::is_plain_name;

    #[test]
    fn plain_names_accepted() {
        assert!(is_plain_name("enhanced_photo.JPG"));
        assert!(is_plain_name("enhanced_a.png"));
    }

    #[test]
    fn traversal_names_rejected() {
        assert!(!is_plain_name(""));
        assert!(!is_plain_name("."));
        assert!(!is_plain_name(".."));
        assert!(!is_plain_name("../../etc/passwd"));
        assert!(!is_plain_name("/etc/passwd"));
        assert!(!is_plain_name("a/b.png"));
        assert!(!is_plain_name("..\\x.png"));
    }
}
