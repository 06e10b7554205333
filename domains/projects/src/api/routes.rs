//! Route definitions for Projects domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{gallery, projects};
use super::middleware::ProjectsState;

/// Public gallery routes
fn gallery_routes() -> Router<ProjectsState> {
    Router::new()
        .route("/api/gallery", get(gallery::list_gallery))
        .route("/api/gallery/categories", get(gallery::list_categories))
        .route("/api/gallery/{slug}", get(gallery::get_gallery_project))
}

/// Admin project management routes
fn project_routes() -> Router<ProjectsState> {
    Router::new()
        .route(
            "/api/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route("/api/projects/stats", get(projects::project_stats))
        .route("/api/projects/slug", post(projects::generate_slug))
        .route("/api/projects/video/resolve", post(projects::resolve_video))
        .route(
            "/api/projects/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
}

/// Create all Projects domain API routes
pub fn routes() -> Router<ProjectsState> {
    Router::new()
        .merge(gallery_routes())
        .merge(project_routes())
}
