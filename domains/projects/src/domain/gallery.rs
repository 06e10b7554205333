//! Public gallery catalog
//!
//! An ordered, read-only collection of projects. Position in the
//! collection drives prev/next navigation, not dates or `order`.

use serde::Serialize;

use crate::domain::entities::{Project, ProjectKind};
use crate::domain::filter::sort_for_listing;
use crate::domain::sample::sample_projects;

/// Filter pills shown above the public gallery
pub const CATEGORIES: [&str; 4] = ["all", "portrait", "landscape", "process"];

/// Neighbours of a project in gallery order
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Adjacent<'a> {
    pub previous: Option<&'a Project>,
    pub next: Option<&'a Project>,
}

#[derive(Debug, Clone, Default)]
pub struct Gallery {
    projects: Vec<Project>,
}

impl Gallery {
    /// Catalog over projects in the given order
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Catalog of the published subset, in listing order
    pub fn published(projects: Vec<Project>) -> Self {
        let mut projects: Vec<Project> = projects.into_iter().filter(|p| p.published).collect();
        sort_for_listing(&mut projects);
        Self { projects }
    }

    /// The six-project sample catalog
    pub fn sample() -> Self {
        Self::new(sample_projects())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Exact, case-sensitive slug lookup
    pub fn find_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    /// `all`, `process`, or an exact tag
    pub fn filter_by_category(&self, category: &str) -> Vec<&Project> {
        match category {
            "all" => self.projects.iter().collect(),
            "process" => self
                .projects
                .iter()
                .filter(|p| p.kind() == ProjectKind::Process)
                .collect(),
            tag => self.projects.iter().filter(|p| p.has_tag(tag)).collect(),
        }
    }

    pub fn adjacent(&self, slug: &str) -> Adjacent<'_> {
        let Some(index) = self.projects.iter().position(|p| p.slug == slug) else {
            return Adjacent::default();
        };

        Adjacent {
            previous: index.checked_sub(1).and_then(|i| self.projects.get(i)),
            next: self.projects.get(index + 1),
        }
    }

    pub fn categories() -> &'static [&'static str] {
        &CATEGORIES
    }
}
