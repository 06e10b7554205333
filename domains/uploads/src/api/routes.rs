//! Route definitions for Uploads domain API

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use super::handlers::uploads;
use super::middleware::UploadsState;

/// Room for multipart boundaries and part headers around the file itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create all Uploads domain API routes
///
/// The body limit sits just above `max_upload_bytes` so oversized files are
/// cut off early and still reported with the upload error shape.
pub fn routes(max_upload_bytes: usize) -> Router<UploadsState> {
    Router::new()
        .route(
            "/api/upload",
            post(uploads::upload_file).delete(uploads::delete_file),
        )
        .layer(DefaultBodyLimit::max(
            max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES),
        ))
}
