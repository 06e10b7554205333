//! Uploads domain state and auth backend integration

use std::sync::Arc;

use axum::extract::FromRef;
use folio_auth::AuthBackend;
use folio_storage::AssetStorage;

use crate::domain::UploadPolicy;

/// Application state for the Uploads domain
#[derive(Clone)]
pub struct UploadsState {
    pub storage: Arc<dyn AssetStorage>,
    pub auth: AuthBackend,
    pub policy: UploadPolicy,
}

impl FromRef<UploadsState> for AuthBackend {
    fn from_ref(state: &UploadsState) -> Self {
        state.auth.clone()
    }
}
