//! Upload acceptance rules

use folio_common::{Error, Result};

const MEBIBYTE: usize = 1024 * 1024;

/// What the admin may upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_bytes: usize,
}

impl UploadPolicy {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// Human-readable size ceiling, e.g. `5MB`
    pub fn limit_label(&self) -> String {
        if self.max_bytes >= MEBIBYTE && self.max_bytes % MEBIBYTE == 0 {
            format!("{}MB", self.max_bytes / MEBIBYTE)
        } else {
            format!("{} bytes", self.max_bytes)
        }
    }

    /// Only `image/*` content types are accepted
    pub fn check_content_type(&self, content_type: Option<&str>) -> Result<()> {
        match content_type {
            Some(ct) if ct.trim().to_ascii_lowercase().starts_with("image/") => Ok(()),
            _ => Err(Error::Validation("Only image files are allowed".to_string())),
        }
    }

    pub fn check_size(&self, size: usize) -> Result<()> {
        if size > self.max_bytes {
            return Err(self.too_large());
        }
        Ok(())
    }

    pub fn too_large(&self) -> Error {
        Error::PayloadTooLarge(format!(
            "File size must be less than {}",
            self.limit_label()
        ))
    }
}
