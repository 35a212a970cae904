//! photo-enhancer - a web utility that applies a fixed contrast/brightness
//! boost to uploaded images
//!
//! This crate provides image upload, a two-step enhancement transform, and
//! download serving with:
//! - A fixed contrast x1.5 then brightness x1.2 adjustment per upload
//! - Filename sanitization and an extension allow-list (png, jpg, jpeg)
//! - A small blob-store abstraction over the uploads/processed directories
//! - REST API with multipart upload support

pub mod api;
pub mod config;
pub mod enhance;
pub mod filename;
pub mod store;

use std::sync::Arc;

use config::Config;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub uploads: Arc<dyn store::BlobStore>,
    pub processed: Arc<dyn store::BlobStore>,
}
