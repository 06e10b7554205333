//! Domain entities for the Projects domain
//!
//! A project is either a single artwork with one featured image, or a
//! process piece documented as an ordered list of stages with an optional
//! timelapse video. The media enum makes the two shapes mutually exclusive.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use folio_common::{Error, Result};

use crate::domain::video::{build_embed_url, EmbedContext, VideoProvider};

/// Project type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    #[default]
    Single,
    Process,
}

impl ProjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::Single => "single",
            ProjectKind::Process => "process",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "single" => Ok(ProjectKind::Single),
            "process" => Ok(ProjectKind::Process),
            other => Err(format!("Unknown project type '{}'", other)),
        }
    }
}

/// Publication status label derived from `published`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    Published,
    Draft,
}

impl From<bool> for PublicationStatus {
    fn from(published: bool) -> Self {
        if published {
            PublicationStatus::Published
        } else {
            PublicationStatus::Draft
        }
    }
}

/// One step of a process piece
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStage {
    /// Unique within the owning project
    pub id: String,
    /// Reference to the uploaded image
    pub image: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Marker into the timelapse video for one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTimestamp {
    pub label: String,
    /// Seconds from the start of the video
    pub timestamp: u32,
}

/// Embedded timelapse video of a process piece
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoReference {
    pub provider: VideoProvider,
    /// Canonical provider ID, or the media URL for `url`
    pub video_id: String,
    #[serde(default)]
    pub timestamps: Vec<StageTimestamp>,
    /// Length in seconds, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl VideoReference {
    pub fn embed_url(&self, context: EmbedContext) -> Option<String> {
        build_embed_url(self.provider, &self.video_id, context)
    }
}

/// Media payload; the variant is the project type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProjectMedia {
    Single {
        #[serde(
            rename = "featuredImage",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        featured_image: Option<String>,
    },
    Process {
        #[serde(rename = "processStages")]
        stages: Vec<ProcessStage>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        video: Option<VideoReference>,
    },
}

impl ProjectMedia {
    pub fn kind(&self) -> ProjectKind {
        match self {
            ProjectMedia::Single { .. } => ProjectKind::Single,
            ProjectMedia::Process { .. } => ProjectKind::Process,
        }
    }
}

/// Portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub year: i32,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub media: ProjectMedia,
    pub published: bool,
    /// Ascending; earlier in listings
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn kind(&self) -> ProjectKind {
        self.media.kind()
    }

    pub fn status(&self) -> PublicationStatus {
        PublicationStatus::from(self.published)
    }

    pub fn featured_image(&self) -> Option<&str> {
        match &self.media {
            ProjectMedia::Single { featured_image } => featured_image.as_deref(),
            ProjectMedia::Process { .. } => None,
        }
    }

    pub fn stages(&self) -> &[ProcessStage] {
        match &self.media {
            ProjectMedia::Single { .. } => &[],
            ProjectMedia::Process { stages, .. } => stages,
        }
    }

    pub fn video(&self) -> Option<&VideoReference> {
        match &self.media {
            ProjectMedia::Single { .. } => None,
            ProjectMedia::Process { video, .. } => video.as_ref(),
        }
    }

    pub fn has_video(&self) -> bool {
        self.video().is_some()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Image shown on gallery cards: the featured image, or the final stage
    pub fn cover_image(&self) -> Option<&str> {
        match &self.media {
            ProjectMedia::Single { featured_image } => featured_image.as_deref(),
            ProjectMedia::Process { stages, .. } => stages.last().map(|s| s.image.as_str()),
        }
    }

    /// Every uploaded asset this project references
    pub fn owned_media(&self) -> Vec<&str> {
        match &self.media {
            ProjectMedia::Single { featured_image } => {
                featured_image.as_deref().into_iter().collect()
            }
            ProjectMedia::Process { stages, .. } => {
                stages.iter().map(|s| s.image.as_str()).collect()
            }
        }
    }

    /// Assets referenced by `self` that `replacement` no longer references
    pub fn released_media(&self, replacement: &Project) -> Vec<String> {
        let kept = replacement.owned_media();
        self.owned_media()
            .into_iter()
            .filter(|asset| !kept.contains(asset))
            .map(str::to_string)
            .collect()
    }

    /// Validate structural invariants of a stored project
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("Project title is required".to_string()));
        }

        if self.slug.trim().is_empty() {
            return Err(Error::Validation("Project slug is required".to_string()));
        }

        if let ProjectMedia::Process { stages, .. } = &self.media {
            if stages.is_empty() {
                return Err(Error::Validation(
                    "Process projects need at least one stage".to_string(),
                ));
            }

            for (index, stage) in stages.iter().enumerate() {
                if stages[..index].iter().any(|s| s.id == stage.id) {
                    return Err(Error::Validation(format!(
                        "Duplicate stage id '{}'",
                        stage.id
                    )));
                }
            }
        }

        Ok(())
    }
}
