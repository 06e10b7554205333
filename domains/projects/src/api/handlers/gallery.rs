//! Public gallery handlers
//!
//! Read-only views over the published projects. No session required.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use folio_common::{Error, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::middleware::ProjectsState;
use crate::domain::entities::{Project, ProjectKind, ProjectMedia};
use crate::domain::gallery::{Adjacent, Gallery};
use crate::domain::video::{format_timestamp, EmbedContext, VideoProvider};

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "all".to_string()
}

/// Card shown in the gallery grid
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryCard {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub year: i32,
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    pub has_video: bool,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
}

impl From<&Project> for GalleryCard {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            slug: project.slug.clone(),
            title: project.title.clone(),
            year: project.year,
            tags: project.tags.clone(),
            kind: project.kind(),
            has_video: project.has_video(),
            thumbnail: project.cover_image().map(str::to_string),
            description: project.description.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub filter: String,
    pub projects: Vec<GalleryCard>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<&'static str>,
}

/// Link to a neighbouring project
#[derive(Debug, Serialize)]
pub struct ProjectLink {
    pub slug: String,
    pub title: String,
}

impl From<&Project> for ProjectLink {
    fn from(project: &Project) -> Self {
        Self {
            slug: project.slug.clone(),
            title: project.title.clone(),
        }
    }
}

/// Timelapse marker with its display label
#[derive(Debug, Serialize)]
pub struct StageMarker {
    pub label: String,
    pub timestamp: u32,
    pub time: String,
}

/// Embedded timelapse for the detail page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryVideo {
    pub provider: VideoProvider,
    pub video_id: String,
    pub embed_url: Option<String>,
    pub duration: Option<u32>,
    pub markers: Vec<StageMarker>,
}

/// Full public view of one project
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryDetail {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub year: i32,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub media: ProjectMedia,
    pub thumbnail: Option<String>,
    pub video: Option<GalleryVideo>,
    pub created_at: DateTime<Utc>,
    pub previous: Option<ProjectLink>,
    pub next: Option<ProjectLink>,
}

impl GalleryDetail {
    fn new(project: &Project, adjacent: Adjacent<'_>) -> Self {
        let video = project.video().map(|video| GalleryVideo {
            provider: video.provider,
            video_id: video.video_id.clone(),
            embed_url: video.embed_url(EmbedContext::Public),
            duration: video.duration,
            markers: video
                .timestamps
                .iter()
                .map(|t| StageMarker {
                    label: t.label.clone(),
                    timestamp: t.timestamp,
                    time: format_timestamp(t.timestamp),
                })
                .collect(),
        });

        // Video is reported once, with its public embed URL
        let media = match &project.media {
            ProjectMedia::Process { stages, .. } => ProjectMedia::Process {
                stages: stages.clone(),
                video: None,
            },
            single => single.clone(),
        };

        Self {
            id: project.id,
            slug: project.slug.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            year: project.year,
            tags: project.tags.clone(),
            media,
            thumbnail: project.cover_image().map(str::to_string),
            video,
            created_at: project.created_at,
            previous: adjacent.previous.map(ProjectLink::from),
            next: adjacent.next.map(ProjectLink::from),
        }
    }
}

async fn published_gallery(state: &ProjectsState) -> Result<Gallery> {
    Ok(Gallery::published(state.store.list().await?))
}

/// List published projects
///
/// **GET /api/gallery?filter=<category>**
///
/// `all` (default), `process`, or an exact tag.
pub async fn list_gallery(
    State(state): State<ProjectsState>,
    Query(query): Query<GalleryQuery>,
) -> Result<Json<GalleryResponse>> {
    let gallery = published_gallery(&state).await?;

    let projects = gallery
        .filter_by_category(&query.filter)
        .into_iter()
        .map(GalleryCard::from)
        .collect();

    Ok(Json(GalleryResponse {
        filter: query.filter,
        projects,
    }))
}

/// Gallery filter pills
///
/// **GET /api/gallery/categories**
pub async fn list_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: Gallery::categories().to_vec(),
    })
}

/// Published project detail with previous/next navigation
///
/// **GET /api/gallery/{slug}**
pub async fn get_gallery_project(
    State(state): State<ProjectsState>,
    Path(slug): Path<String>,
) -> Result<Json<GalleryDetail>> {
    let gallery = published_gallery(&state).await?;

    let project = gallery
        .find_by_slug(&slug)
        .ok_or_else(|| Error::NotFound(format!("Project '{}' not found", slug)))?;

    Ok(Json(GalleryDetail::new(project, gallery.adjacent(&slug))))
}
