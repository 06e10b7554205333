//! Upload handlers
//!
//! Admin-only image uploads. Stored files are referenced by the URL
//! returned here; projects point at that URL.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use folio_auth::AdminUser;
use folio_common::{Error, Result, ValidatedJson};
use folio_storage::StorageError;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::UploadsState;
use crate::domain::UploadPolicy;

/// Multipart field carrying the file
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub filename: String,
    pub size: usize,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DeleteUploadRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "No URL provided"))]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteUploadResponse {
    pub success: bool,
}

fn map_storage_error(error: StorageError) -> Error {
    match error {
        StorageError::InvalidReference(reference) => {
            Error::Validation(format!("Not an uploaded file: {}", reference))
        }
        StorageError::NotFound(reference) => {
            Error::NotFound(format!("Upload not found: {}", reference))
        }
        StorageError::Io(e) => Error::Storage(e.to_string()),
    }
}

fn map_multipart_error(error: MultipartError, policy: &UploadPolicy) -> Error {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        policy.too_large()
    } else {
        Error::Validation(error.body_text())
    }
}

/// Upload an image
///
/// **POST /api/upload** (multipart, field `file`)
pub async fn upload_file(
    AdminUser(session): AdminUser,
    State(state): State<UploadsState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>> {
    let mut multipart = multipart.map_err(|e| Error::Validation(e.body_text()))?;
    let policy = state.policy;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| map_multipart_error(e, &policy))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        policy.check_content_type(content_type.as_deref())?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| map_multipart_error(e, &policy))?;
        if bytes.is_empty() {
            return Err(Error::Validation("No file provided".to_string()));
        }
        policy.check_size(bytes.len())?;

        let asset = state
            .storage
            .store(&filename, content_type.as_deref().unwrap_or_default(), &bytes)
            .await
            .map_err(map_storage_error)?;

        tracing::info!(
            url = %asset.url,
            size = asset.size,
            content_type = %asset.content_type,
            admin = %session.user.email,
            "Uploaded file"
        );

        return Ok(Json(UploadResponse {
            url: asset.url,
            filename: asset.filename,
            size: asset.size,
        }));
    }

    Err(Error::Validation("No file provided".to_string()))
}

/// Delete a previously uploaded file
///
/// **DELETE /api/upload** `{ "url": ... }`
pub async fn delete_file(
    AdminUser(session): AdminUser,
    State(state): State<UploadsState>,
    ValidatedJson(request): ValidatedJson<DeleteUploadRequest>,
) -> Result<Json<DeleteUploadResponse>> {
    if !state.storage.owns(&request.url) {
        return Err(Error::Validation(format!(
            "Not an uploaded file: {}",
            request.url
        )));
    }

    state
        .storage
        .delete(&request.url)
        .await
        .map_err(map_storage_error)?;

    tracing::info!(url = %request.url, admin = %session.user.email, "Deleted upload");

    Ok(Json(DeleteUploadResponse { success: true }))
}
