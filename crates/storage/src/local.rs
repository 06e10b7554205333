//! Local disk asset storage
//!
//! Files are written flat into a root directory and referenced as
//! `<public prefix>/<stored name>`; the HTTP layer serves that prefix
//! straight from the same directory.

use std::path::{Path, PathBuf};

use crate::{name_under_prefix, stored_name, AssetStorage, StorageError, StoredAsset};

#[derive(Debug, Clone)]
pub struct LocalAssetStorage {
    root: PathBuf,
    public_prefix: String,
}

impl LocalAssetStorage {
    /// Create the storage, making sure the root directory exists
    pub async fn new(
        root: impl Into<PathBuf>,
        public_prefix: impl Into<String>,
    ) -> Result<Self, StorageError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;

        let public_prefix = public_prefix.into().trim_end_matches('/').to_string();
        tracing::info!(root = %root.display(), prefix = %public_prefix, "Local asset storage ready");

        Ok(Self {
            root,
            public_prefix,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn public_prefix(&self) -> &str {
        &self.public_prefix
    }

    fn path_for(&self, reference: &str) -> Result<PathBuf, StorageError> {
        let name = name_under_prefix(&self.public_prefix, reference)?;
        Ok(self.root.join(name))
    }
}

#[async_trait::async_trait]
impl AssetStorage for LocalAssetStorage {
    async fn store(
        &self,
        filename: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredAsset, StorageError> {
        let name = stored_name(filename);
        tokio::fs::write(self.root.join(&name), bytes).await?;

        let url = format!("{}/{}", self.public_prefix, name);
        tracing::info!(url = %url, size = bytes.len(), "Stored asset");

        Ok(StoredAsset {
            url,
            filename: filename.to_string(),
            size: bytes.len(),
            content_type: content_type.to_string(),
        })
    }

    async fn delete(&self, reference: &str) -> Result<(), StorageError> {
        let path = self.path_for(reference)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(reference, "Deleted asset");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(reference.to_string()))
            }
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn owns(&self, reference: &str) -> bool {
        name_under_prefix(&self.public_prefix, reference).is_ok()
    }
}
