//! Projects domain state and auth backend integration

use std::sync::Arc;

use axum::extract::FromRef;
use folio_auth::AuthBackend;
use folio_storage::AssetStorage;

use crate::repository::ProjectStore;

/// Application state for the Projects domain
#[derive(Clone)]
pub struct ProjectsState {
    pub store: Arc<dyn ProjectStore>,
    pub storage: Arc<dyn AssetStorage>,
    pub auth: AuthBackend,
}

impl FromRef<ProjectsState> for AuthBackend {
    fn from_ref(state: &ProjectsState) -> Self {
        state.auth.clone()
    }
}

/// Best-effort removal of uploaded media a project no longer references.
///
/// Call after the store change is committed. References still used by any
/// stored project are kept, as are references outside the asset storage
/// (sample images, external URLs). Failures are logged and never fail the
/// request.
pub(crate) async fn release_media(
    store: &dyn ProjectStore,
    storage: &dyn AssetStorage,
    references: &[String],
) {
    let candidates: Vec<&String> = references.iter().filter(|r| storage.owns(r)).collect();
    if candidates.is_empty() {
        return;
    }

    let projects = match store.list().await {
        Ok(projects) => projects,
        Err(e) => {
            tracing::warn!(error = %e, "Could not check media usage; keeping project media");
            return;
        }
    };

    for reference in candidates {
        if projects
            .iter()
            .any(|p| p.owned_media().contains(&reference.as_str()))
        {
            tracing::debug!(reference = %reference, "Media still in use; not released");
            continue;
        }

        match storage.delete(reference).await {
            Ok(()) => tracing::debug!(reference = %reference, "Released project media"),
            Err(e) => {
                tracing::warn!(error = %e, reference = %reference, "Failed to release project media")
            }
        }
    }
}
