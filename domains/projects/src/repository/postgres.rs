//! PostgreSQL project store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_common::{Error, Result};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::{slug_conflict, ProjectStore};
use crate::domain::entities::{Project, ProjectMedia};

const PROJECT_COLUMNS: &str = "id, slug, title, description, year, tags, media, published, \
                               sort_order, created_at, updated_at";

#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    slug: String,
    title: String,
    description: Option<String>,
    year: i32,
    tags: Json<Vec<String>>,
    media: Json<ProjectMedia>,
    published: bool,
    sort_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            slug: row.slug,
            title: row.title,
            description: row.description,
            year: row.year,
            tags: row.tags.0,
            media: row.media.0,
            published: row.published,
            order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique-constraint violation on `slug` to a conflict
fn map_write_error(error: sqlx::Error, slug: &str) -> Error {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => slug_conflict(slug),
        _ => Error::Database(error),
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn list(&self) -> Result<Vec<Project>> {
        let rows: Vec<ProjectRow> = sqlx::query_as(&format!(
            "SELECT {} FROM projects ORDER BY seq ASC",
            PROJECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Project>> {
        let row: Option<ProjectRow> = sqlx::query_as(&format!(
            "SELECT {} FROM projects WHERE id = $1",
            PROJECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Project::from))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>> {
        let row: Option<ProjectRow> = sqlx::query_as(&format!(
            "SELECT {} FROM projects WHERE slug = $1",
            PROJECT_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Project::from))
    }

    async fn create(&self, project: Project) -> Result<Project> {
        project.validate()?;
        let row: ProjectRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO projects (id, slug, title, description, year, tags, media,
                                  published, sort_order, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {}
            "#,
            PROJECT_COLUMNS
        ))
        .bind(project.id)
        .bind(&project.slug)
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.year)
        .bind(Json(&project.tags))
        .bind(Json(&project.media))
        .bind(project.published)
        .bind(project.order)
        .bind(project.created_at)
        .bind(project.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &project.slug))?;

        tracing::debug!(project_id = %row.id, slug = %row.slug, "Inserted project");
        Ok(row.into())
    }

    async fn replace(&self, project: Project) -> Result<Option<Project>> {
        project.validate()?;
        let mut tx = self.pool.begin().await?;

        let previous: Option<ProjectRow> = sqlx::query_as(&format!(
            "SELECT {} FROM projects WHERE id = $1 FOR UPDATE",
            PROJECT_COLUMNS
        ))
        .bind(project.id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(previous) = previous else {
            return Ok(None);
        };

        sqlx::query(
            r#"
            UPDATE projects
            SET slug = $2, title = $3, description = $4, year = $5, tags = $6,
                media = $7, published = $8, sort_order = $9, updated_at = $10
            WHERE id = $1
            "#,
        )
        .bind(project.id)
        .bind(&project.slug)
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.year)
        .bind(Json(&project.tags))
        .bind(Json(&project.media))
        .bind(project.published)
        .bind(project.order)
        .bind(project.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, &project.slug))?;

        tx.commit().await?;

        Ok(Some(previous.into()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Project>> {
        let row: Option<ProjectRow> = sqlx::query_as(&format!(
            "DELETE FROM projects WHERE id = $1 RETURNING {}",
            PROJECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Project::from))
    }
}
