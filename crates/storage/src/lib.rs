//! Folio Asset Storage
//!
//! Stores uploaded media and hands back opaque string references
//! (public URL paths) that projects point at. Provides:
//! - Local disk storage served under a public URL prefix
//! - In-memory storage for testing and development

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub mod local;
pub mod mock;

pub use local::LocalAssetStorage;
pub use mock::MemoryAssetStorage;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid asset reference: {0}")]
    InvalidReference(String),

    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A stored asset and the reference projects use to point at it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredAsset {
    pub url: String,
    pub filename: String,
    pub size: usize,
    pub content_type: String,
}

/// Storage backend for uploaded media
#[async_trait::async_trait]
pub trait AssetStorage: Send + Sync {
    /// Persist the bytes and return the asset's public reference
    async fn store(
        &self,
        filename: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredAsset, StorageError>;

    /// Remove a previously stored asset
    async fn delete(&self, reference: &str) -> Result<(), StorageError>;

    /// Whether `reference` points into this storage.
    ///
    /// References outside it (external URLs, sample paths) are never deleted.
    fn owns(&self, reference: &str) -> bool;
}

/// Reduce an uploaded file name to a safe single path segment
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let mut out = String::with_capacity(base.len());
    for c in base.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            out.push(c);
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }

    let trimmed = out.trim_start_matches(['.', '-']).trim_end_matches('-');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Unique stored name for an upload: `<millis>-<short id>-<sanitized name>`
pub(crate) fn stored_name(filename: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!(
        "{}-{}-{}",
        Utc::now().timestamp_millis(),
        &id[..8],
        sanitize_filename(filename)
    )
}

/// Split `<prefix>/<name>` into `name`, rejecting anything that could
/// escape the storage root.
pub(crate) fn name_under_prefix<'a>(
    prefix: &str,
    reference: &'a str,
) -> Result<&'a str, StorageError> {
    let name = reference
        .strip_prefix(prefix.trim_end_matches('/'))
        .and_then(|rest| rest.strip_prefix('/'))
        .ok_or_else(|| StorageError::InvalidReference(reference.to_string()))?;

    if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
        return Err(StorageError::InvalidReference(reference.to_string()));
    }

    Ok(name)
}
