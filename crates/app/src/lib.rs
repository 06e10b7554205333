//! Folio application composition root
//!
//! Composes all domain routers into a single application.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use folio_accounts::AccountsState;
use folio_auth::{AuthBackend, AuthConfig};
use folio_common::Config;
use folio_projects::{InMemoryProjectStore, PgProjectStore, ProjectStore, ProjectsState};
use folio_storage::{AssetStorage, LocalAssetStorage};
use folio_uploads::{UploadPolicy, UploadsState};
use sqlx::PgPool;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
};

/// Uploaded files served straight from disk
#[derive(Debug, Clone)]
pub struct PublicUploads {
    /// URL prefix, e.g. `/uploads`
    pub prefix: String,
    pub dir: PathBuf,
}

/// Everything the routers need, already constructed
#[derive(Clone)]
pub struct AppServices {
    pub store: Arc<dyn ProjectStore>,
    pub storage: Arc<dyn AssetStorage>,
    pub auth: AuthBackend,
    pub max_upload_bytes: usize,
    pub secure_cookies: bool,
    pub public_uploads: Option<PublicUploads>,
}

/// Create the main application router from configuration
pub async fn create_app(config: Config) -> Result<Router, anyhow::Error> {
    let store: Arc<dyn ProjectStore> = match &config.database_url {
        Some(url) => {
            let pool = PgPool::connect(url)
                .await
                .map_err(|e| anyhow::anyhow!("Database connection failed: {}", e))?;
            sqlx::migrate!("../../migrations").run(&pool).await?;
            tracing::info!("Using PostgreSQL project store");
            Arc::new(PgProjectStore::new(pool))
        }
        None if config.seed_sample_projects => {
            tracing::info!("Using in-memory project store seeded with sample gallery");
            Arc::new(InMemoryProjectStore::with_sample())
        }
        None => {
            tracing::info!("Using empty in-memory project store");
            Arc::new(InMemoryProjectStore::new())
        }
    };

    let storage = LocalAssetStorage::new(&config.upload_dir, &config.upload_public_prefix).await?;
    let public_uploads = PublicUploads {
        prefix: storage.public_prefix().to_string(),
        dir: storage.root().to_path_buf(),
    };

    if !config.admin_enabled() {
        tracing::warn!("ADMIN_EMAIL or ADMIN_PASSWORD_HASH not set; admin sign-in is disabled");
    }

    let services = AppServices {
        store,
        storage: Arc::new(storage),
        auth: AuthBackend::new(AuthConfig::from_config(&config)),
        max_upload_bytes: config.max_upload_bytes,
        secure_cookies: config.secure_cookies,
        public_uploads: Some(public_uploads),
    };

    Ok(build_router(services))
}

/// Compose the domain routers over prepared services
pub fn build_router(services: AppServices) -> Router {
    let projects_state = ProjectsState {
        store: services.store,
        storage: services.storage.clone(),
        auth: services.auth.clone(),
    };

    let uploads_state = UploadsState {
        storage: services.storage,
        auth: services.auth.clone(),
        policy: UploadPolicy::new(services.max_upload_bytes),
    };

    let accounts_state = AccountsState {
        auth: services.auth,
        secure_cookies: services.secure_cookies,
    };

    let mut app = Router::new()
        .route("/health", get(health_check))
        .route("/", get(|| async { concat!("Folio API v", env!("CARGO_PKG_VERSION")) }))
        .merge(folio_projects::routes().with_state(projects_state))
        .merge(folio_uploads::routes(services.max_upload_bytes).with_state(uploads_state))
        .merge(folio_accounts::routes().with_state(accounts_state));

    if let Some(uploads) = services.public_uploads {
        if uploads.prefix.is_empty() || uploads.prefix == "/" {
            tracing::warn!(prefix = %uploads.prefix, "Upload prefix cannot be the site root; not serving uploads");
        } else {
            app = app.nest_service(&uploads.prefix, ServeDir::new(uploads.dir));
        }
    }

    app
}

/// CORS for the admin frontend.
///
/// With explicit origins, credentials (the session cookie) are allowed;
/// without them every origin is allowed and credentials are not.
pub fn build_cors_layer(allowed_origins: Option<&str>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
