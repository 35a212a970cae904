mod download;
mod enhance;
mod pages;

pub use download::download;
pub use enhance::{enhance_upload, EnhanceResponse};
pub use pages::{health, index};
