pub mod client;
pub mod error;
pub mod status;
pub mod upload;

pub use client::{HttpImageApi, ImageApi};
pub use error::ApiError;
pub use status::ApiStatus;
pub use upload::{ExifTags, ImageMetadata, ImageSize, UploadFile, UploadResult};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

// joins a base url and an absolute path without doubling the slash,
// since the base url comes straight from the build environment
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    format!("{base}/{path}")
}

pub fn image_link(base_url: &str, image_id: &str) -> String {
    endpoint_url(base_url, &format!("uploads/{image_id}"))
}
