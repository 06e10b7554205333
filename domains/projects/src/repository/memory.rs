//! In-memory project store

use std::sync::Arc;

use async_trait::async_trait;
use folio_common::Result;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{slug_conflict, ProjectStore};
use crate::domain::entities::Project;
use crate::domain::sample::sample_projects;

/// Process-local store; contents are lost on restart
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectStore {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: Arc::new(RwLock::new(projects)),
        }
    }

    /// Store seeded with the sample gallery
    pub fn with_sample() -> Self {
        Self::with_projects(sample_projects())
    }

    pub async fn len(&self) -> usize {
        self.projects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.projects.read().await.is_empty()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn list(&self) -> Result<Vec<Project>> {
        Ok(self.projects.read().await.clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Project>> {
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>> {
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn create(&self, project: Project) -> Result<Project> {
        project.validate()?;
        let mut projects = self.projects.write().await;
        if projects.iter().any(|p| p.slug == project.slug) {
            return Err(slug_conflict(&project.slug));
        }
        projects.push(project.clone());
        Ok(project)
    }

    async fn replace(&self, project: Project) -> Result<Option<Project>> {
        project.validate()?;
        let mut projects = self.projects.write().await;
        if projects
            .iter()
            .any(|p| p.slug == project.slug && p.id != project.id)
        {
            return Err(slug_conflict(&project.slug));
        }

        let Some(slot) = projects.iter_mut().find(|p| p.id == project.id) else {
            return Ok(None);
        };
        Ok(Some(std::mem::replace(slot, project)))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Project>> {
        let mut projects = self.projects.write().await;
        let Some(index) = projects.iter().position(|p| p.id == id) else {
            return Ok(None);
        };
        Ok(Some(projects.remove(index)))
    }
}
