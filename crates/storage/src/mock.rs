//! In-memory asset storage
//!
//! Keeps uploaded bytes in a map for tests and development runs
//! without a writable upload directory.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{name_under_prefix, stored_name, AssetStorage, StorageError, StoredAsset};

const MEMORY_PREFIX: &str = "/uploads";

/// In-memory storage backend
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStorage {
    assets: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryAssetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an asset with this reference is currently stored
    pub fn contains(&self, reference: &str) -> bool {
        self.assets
            .lock()
            .map(|assets| assets.contains_key(reference))
            .unwrap_or(false)
    }

    /// Number of stored assets
    pub fn len(&self) -> usize {
        self.assets.lock().map(|assets| assets.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert an asset under a fixed reference (test fixtures)
    pub fn insert(&self, reference: &str, bytes: &[u8]) {
        if let Ok(mut assets) = self.assets.lock() {
            assets.insert(reference.to_string(), bytes.to_vec());
        }
    }
}

#[async_trait::async_trait]
impl AssetStorage for MemoryAssetStorage {
    async fn store(
        &self,
        filename: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredAsset, StorageError> {
        let url = format!("{}/{}", MEMORY_PREFIX, stored_name(filename));
        self.insert(&url, bytes);

        Ok(StoredAsset {
            url,
            filename: filename.to_string(),
            size: bytes.len(),
            content_type: content_type.to_string(),
        })
    }

    async fn delete(&self, reference: &str) -> Result<(), StorageError> {
        name_under_prefix(MEMORY_PREFIX, reference)?;

        let removed = self
            .assets
            .lock()
            .map_err(|_| StorageError::Io(std::io::Error::other("asset map poisoned")))?
            .remove(reference);

        match removed {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound(reference.to_string())),
        }
    }

    fn owns(&self, reference: &str) -> bool {
        name_under_prefix(MEMORY_PREFIX, reference).is_ok()
    }
}
