use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let upload_limit = state.config.max_upload_size as usize;

    Router::new()
        // Upload page
        .route("/", get(handlers::index))
        // Upload and enhance
        .route(
            "/enhance",
            post(handlers::enhance_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Processed file download
        .route("/download/:name", get(handlers::download))
        // Internal
        .route("/_internal/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
