//! Admin listing filters, ordering and dashboard statistics

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Project, ProjectKind, PublicationStatus};

/// Publication status predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Published,
    Draft,
}

impl StatusFilter {
    pub fn matches(&self, status: PublicationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Published => status == PublicationStatus::Published,
            StatusFilter::Draft => status == PublicationStatus::Draft,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(StatusFilter::All),
            "published" => Ok(StatusFilter::Published),
            "draft" => Ok(StatusFilter::Draft),
            other => Err(format!("Unknown status filter '{}'", other)),
        }
    }
}

/// Project type predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Single,
    Process,
}

impl TypeFilter {
    pub fn matches(&self, kind: ProjectKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Single => kind == ProjectKind::Single,
            TypeFilter::Process => kind == ProjectKind::Process,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(TypeFilter::All),
            "single" => Ok(TypeFilter::Single),
            "process" => Ok(TypeFilter::Process),
            other => Err(format!("Unknown type filter '{}'", other)),
        }
    }
}

/// Combined admin listing filter; all predicates are ANDed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Case-insensitive substring of the title; empty matches everything
    pub search: String,
    pub status: StatusFilter,
    pub kind: TypeFilter,
}

impl ProjectFilter {
    pub fn new(search: impl Into<String>, status: StatusFilter, kind: TypeFilter) -> Self {
        Self {
            search: search.into(),
            status,
            kind,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        let needle = self.search.trim().to_lowercase();
        let title_matches = needle.is_empty() || project.title.to_lowercase().contains(&needle);

        title_matches && self.status.matches(project.status()) && self.kind.matches(project.kind())
    }

    /// Matching projects, in input order
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Sort by `order` ascending; ties keep their existing relative position
pub fn sort_for_listing(projects: &mut [Project]) {
    projects.sort_by_key(|p| p.order);
}

/// Counts for the admin dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total: usize,
    pub published: usize,
    pub drafts: usize,
    pub process: usize,
    pub with_video: usize,
}

impl ProjectStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        projects.iter().fold(Self::default(), |mut stats, p| {
            stats.total += 1;
            if p.published {
                stats.published += 1;
            } else {
                stats.drafts += 1;
            }
            if p.kind() == ProjectKind::Process {
                stats.process += 1;
            }
            if p.has_video() {
                stats.with_video += 1;
            }
            stats
        })
    }
}
