//! Repository implementations for the Projects domain

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use folio_common::Result;
use uuid::Uuid;

use crate::domain::entities::Project;

pub use memory::InMemoryProjectStore;
pub use postgres::PgProjectStore;

/// Durable collection of projects.
///
/// `list` returns projects in insertion order; callers apply listing order.
/// Slugs are unique across the store.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>>;

    async fn find(&self, id: Uuid) -> Result<Option<Project>>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>>;

    /// Insert a new project; `Error::Conflict` when the slug is taken
    async fn create(&self, project: Project) -> Result<Project>;

    /// Replace the project with the same id, returning the previous version
    async fn replace(&self, project: Project) -> Result<Option<Project>>;

    /// Remove a project, returning it when it existed
    async fn delete(&self, id: Uuid) -> Result<Option<Project>>;
}

pub(crate) fn slug_conflict(slug: &str) -> folio_common::Error {
    folio_common::Error::Conflict(format!("A project with slug '{}' already exists", slug))
}
