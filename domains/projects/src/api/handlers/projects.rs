//! Admin project management handlers
//!
//! Every handler here requires a signed-in admin session.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use folio_auth::AdminUser;
use folio_common::{Error, JsonBody, Pagination, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::{release_media, ProjectsState};
use crate::domain::entities::{Project, PublicationStatus};
use crate::domain::filter::{
    sort_for_listing, ProjectFilter, ProjectStats, StatusFilter, TypeFilter,
};
use crate::domain::form::{slugify, ProjectForm};
use crate::domain::video::{build_embed_url, extract_id, EmbedContext, VideoProvider};

/// Query parameters for the admin project listing
#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsQuery {
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListProjectsQuery {
    fn filter(&self) -> Result<ProjectFilter> {
        let status = self
            .status
            .as_deref()
            .unwrap_or_default()
            .parse::<StatusFilter>()
            .map_err(Error::Validation)?;
        let kind = self
            .kind
            .as_deref()
            .unwrap_or_default()
            .parse::<TypeFilter>()
            .map_err(Error::Validation)?;

        Ok(ProjectFilter::new(
            self.search.clone().unwrap_or_default(),
            status,
            kind,
        ))
    }

    fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Project as returned by the admin API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    #[serde(flatten)]
    pub project: Project,
    pub status: PublicationStatus,
    pub has_video: bool,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            status: project.status(),
            has_video: project.has_video(),
            project,
        }
    }
}

/// One page of the admin listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectResponse>,
    pub total: usize,
    pub page: u32,
    pub total_pages: usize,
}

/// Request for deriving a slug from a title
#[derive(Debug, Deserialize, Validate)]
pub struct SlugRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct SlugResponse {
    pub slug: String,
}

/// Request for canonicalising a pasted video reference
#[derive(Debug, Deserialize, Validate)]
pub struct ResolveVideoRequest {
    pub provider: VideoProvider,
    #[validate(length(min = 1, message = "Video ID or URL is required"))]
    pub input: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveVideoResponse {
    pub video_id: String,
    pub embed_url: Option<String>,
}

/// List projects
///
/// **GET /api/projects**
///
/// Filters by `status`, `type` and a title `search`, then pages the
/// result in listing order.
pub async fn list_projects(
    _admin: AdminUser,
    State(state): State<ProjectsState>,
    Query(query): Query<ListProjectsQuery>,
) -> Result<Json<ProjectListResponse>> {
    let filter = query.filter()?;
    let pagination = query.pagination();

    let mut projects = state.store.list().await?;
    sort_for_listing(&mut projects);

    let matching: Vec<Project> = filter.apply(&projects).into_iter().cloned().collect();
    let total = matching.len();

    Ok(Json(ProjectListResponse {
        projects: pagination
            .apply(matching)
            .into_iter()
            .map(ProjectResponse::from)
            .collect(),
        total,
        page: pagination.page(),
        total_pages: pagination.total_pages(total),
    }))
}

/// Dashboard counts
///
/// **GET /api/projects/stats**
pub async fn project_stats(
    _admin: AdminUser,
    State(state): State<ProjectsState>,
) -> Result<Json<ProjectStats>> {
    let projects = state.store.list().await?;
    Ok(Json(ProjectStats::from_projects(&projects)))
}

/// Create a project
///
/// **POST /api/projects**
///
/// Assembles the submitted form; every invalid field is reported at once
/// and nothing is stored on failure.
pub async fn create_project(
    AdminUser(session): AdminUser,
    State(state): State<ProjectsState>,
    JsonBody(form): JsonBody<ProjectForm>,
) -> Result<(StatusCode, Json<ProjectResponse>)> {
    let project = form.assemble(Utc::now())?;
    let created = state.store.create(project).await?;

    tracing::info!(
        project_id = %created.id,
        slug = %created.slug,
        kind = %created.kind(),
        admin = %session.user.email,
        "Created project"
    );

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(created))))
}

/// Get a project by ID
///
/// **GET /api/projects/{id}**
pub async fn get_project(
    _admin: AdminUser,
    State(state): State<ProjectsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectResponse>> {
    let project = state
        .store
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Project {} not found", id)))?;

    Ok(Json(ProjectResponse::from(project)))
}

/// Replace a project
///
/// **PUT /api/projects/{id}**
///
/// Media the old version referenced and the new one does not is released.
pub async fn update_project(
    AdminUser(session): AdminUser,
    State(state): State<ProjectsState>,
    Path(id): Path<Uuid>,
    JsonBody(form): JsonBody<ProjectForm>,
) -> Result<Json<ProjectResponse>> {
    let existing = state
        .store
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Project {} not found", id)))?;

    let project = form.assemble_replacement(&existing, Utc::now())?;
    let previous = state
        .store
        .replace(project.clone())
        .await?
        .ok_or_else(|| Error::NotFound(format!("Project {} not found", id)))?;

    release_media(
        state.store.as_ref(),
        state.storage.as_ref(),
        &previous.released_media(&project),
    )
    .await;

    tracing::info!(
        project_id = %project.id,
        slug = %project.slug,
        admin = %session.user.email,
        "Updated project"
    );

    Ok(Json(ProjectResponse::from(project)))
}

/// Delete a project and release its media
///
/// **DELETE /api/projects/{id}**
pub async fn delete_project(
    AdminUser(session): AdminUser,
    State(state): State<ProjectsState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let removed = state
        .store
        .delete(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Project {} not found", id)))?;

    let media: Vec<String> = removed
        .owned_media()
        .into_iter()
        .map(str::to_string)
        .collect();
    release_media(state.store.as_ref(), state.storage.as_ref(), &media).await;

    tracing::info!(
        project_id = %removed.id,
        slug = %removed.slug,
        admin = %session.user.email,
        "Deleted project"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Derive a slug from a title
///
/// **POST /api/projects/slug**
pub async fn generate_slug(
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<SlugRequest>,
) -> Json<SlugResponse> {
    Json(SlugResponse {
        slug: slugify(&request.title),
    })
}

/// Canonicalise a pasted video ID or URL and preview its embed URL
///
/// **POST /api/projects/video/resolve**
pub async fn resolve_video(
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<ResolveVideoRequest>,
) -> Json<ResolveVideoResponse> {
    let video_id = extract_id(request.provider, request.input.trim());
    let embed_url = build_embed_url(request.provider, &video_id, EmbedContext::Editor);

    Json(ResolveVideoResponse {
        video_id,
        embed_url,
    })
}
