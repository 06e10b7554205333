//! Uploads domain: admin image uploads and media release

pub mod api;
pub mod domain;

pub use domain::UploadPolicy;

// Re-export API types
pub use api::routes;
pub use api::UploadsState;
