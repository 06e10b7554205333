//! Project form assembly
//!
//! `ProjectForm` is the editable shape an admin submits. It is owned by the
//! caller, mutated through the stage and tag helpers, and finally turned
//! into a `Project` by `assemble`, which either returns a complete project
//! or every field-level problem at once.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use folio_common::FieldErrors;

use crate::domain::entities::{
    ProcessStage, Project, ProjectKind, ProjectMedia, StageTimestamp, VideoReference,
};
use crate::domain::video::{extract_id, VideoProvider};

/// Earliest year a project may carry
pub const MIN_YEAR: i32 = 1900;

/// Default spacing between stage markers in a new timelapse
pub const DEFAULT_STAGE_SPACING_SECONDS: u32 = 60;

/// Derive a URL slug from a title: lowercase, non-alphanumeric runs become
/// a single hyphen, no leading or trailing hyphen.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// One stage as edited in the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Editable stage attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageField {
    Image,
    Name,
    Caption,
}

/// Video reference as typed by the admin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoForm {
    pub provider: VideoProvider,
    /// Raw ID or share URL
    #[serde(default)]
    pub video_id: String,
}

/// Raw project form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub year: i32,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub process_stages: Option<Vec<StageForm>>,
    #[serde(default)]
    pub video: Option<VideoForm>,
    pub published: bool,
    pub order: i32,
}

impl ProjectForm {
    /// Empty single-image draft for the given year
    pub fn new(year: i32) -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            description: None,
            year,
            kind: ProjectKind::Single,
            tags: Vec::new(),
            featured_image: None,
            process_stages: None,
            video: None,
            published: false,
            order: 0,
        }
    }

    /// Overwrite the slug with one derived from the current title
    pub fn regenerate_slug(&mut self) {
        self.slug = slugify(&self.title);
    }

    /// Add the tag if absent, remove it if present
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(index) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(index);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    pub fn stages(&self) -> &[StageForm] {
        self.process_stages.as_deref().unwrap_or(&[])
    }

    /// Append a blank stage and return its generated id
    pub fn add_stage(&mut self) -> String {
        let id = format!("stage-{}", Uuid::new_v4().simple());
        self.process_stages.get_or_insert_with(Vec::new).push(StageForm {
            id: id.clone(),
            ..StageForm::default()
        });
        id
    }

    /// Set one attribute of the stage with `id`; false when no such stage
    pub fn update_stage(&mut self, id: &str, field: StageField, value: impl Into<String>) -> bool {
        let Some(stage) = self
            .process_stages
            .as_mut()
            .and_then(|stages| stages.iter_mut().find(|s| s.id == id))
        else {
            return false;
        };

        let value = value.into();
        match field {
            StageField::Image => stage.image = value,
            StageField::Name => stage.name = value,
            StageField::Caption => stage.caption = Some(value),
        }
        true
    }

    pub fn remove_stage(&mut self, id: &str) -> bool {
        let Some(stages) = self.process_stages.as_mut() else {
            return false;
        };
        let before = stages.len();
        stages.retain(|s| s.id != id);
        stages.len() != before
    }

    /// Move the stage at `from` to position `to`, shifting the stages between
    pub fn move_stage(&mut self, from: usize, to: usize) -> bool {
        let Some(stages) = self.process_stages.as_mut() else {
            return false;
        };
        if from >= stages.len() || to >= stages.len() {
            return false;
        }

        let stage = stages.remove(from);
        stages.insert(to, stage);
        true
    }

    /// Check every field, collecting all failures
    pub fn validate(&self, current_year: i32) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.title.trim().is_empty() {
            errors.add("title", "Title is required");
        }

        if self.slug.trim().is_empty() {
            errors.add("slug", "Slug is required");
        }

        let max_year = current_year + 1;
        if !(MIN_YEAR..=max_year).contains(&self.year) {
            errors.add(
                "year",
                format!("Year must be between {} and {}", MIN_YEAR, max_year),
            );
        }

        if self.kind == ProjectKind::Process {
            self.validate_stages(&mut errors);

            if let Some(video) = self.video.as_ref().filter(|v| !v.video_id.trim().is_empty()) {
                if !video.provider.is_editable() {
                    errors.add(
                        "video.provider",
                        format!("Provider '{}' cannot be set from the editor", video.provider),
                    );
                }
            }
        }

        errors.into_result()
    }

    fn validate_stages(&self, errors: &mut FieldErrors) {
        let stages = self.stages();
        if stages.is_empty() {
            errors.add("processStages", "At least one stage is required");
            return;
        }

        for (index, stage) in stages.iter().enumerate() {
            let path = |field: &str| format!("processStages[{}].{}", index, field);

            if stage.id.trim().is_empty() {
                errors.add(path("id"), "Stage id is required");
            } else if stages[..index].iter().any(|s| s.id == stage.id) {
                errors.add(path("id"), "Stage id must be unique");
            }

            if stage.image.trim().is_empty() {
                errors.add(path("image"), "Stage image is required");
            }

            if stage.name.trim().is_empty() {
                errors.add(path("name"), "Stage name is required");
            }
        }
    }

    /// Build a new project
    pub fn assemble(self, now: DateTime<Utc>) -> Result<Project, FieldErrors> {
        self.build(Uuid::new_v4(), now, now)
    }

    /// Build the replacement for `existing`, keeping its identity and creation time
    pub fn assemble_replacement(
        self,
        existing: &Project,
        now: DateTime<Utc>,
    ) -> Result<Project, FieldErrors> {
        self.build(existing.id, existing.created_at, now)
    }

    fn build(
        self,
        id: Uuid,
        created_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Project, FieldErrors> {
        self.validate(now.year())?;

        let media = match self.kind {
            ProjectKind::Single => ProjectMedia::Single {
                featured_image: non_empty(self.featured_image),
            },
            ProjectKind::Process => {
                let stages: Vec<ProcessStage> = self
                    .process_stages
                    .unwrap_or_default()
                    .into_iter()
                    .map(|s| ProcessStage {
                        id: s.id,
                        image: s.image,
                        name: s.name,
                        caption: non_empty(s.caption),
                    })
                    .collect();

                let video = self
                    .video
                    .filter(|v| !v.video_id.trim().is_empty())
                    .map(|v| VideoReference {
                        provider: v.provider,
                        video_id: extract_id(v.provider, v.video_id.trim()),
                        timestamps: default_timestamps(&stages),
                        duration: None,
                    });

                ProjectMedia::Process { stages, video }
            }
        };

        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags {
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Ok(Project {
            id,
            slug: self.slug.trim().to_string(),
            title: self.title.trim().to_string(),
            description: non_empty(self.description),
            year: self.year,
            tags,
            media,
            published: self.published,
            order: self.order,
            created_at,
            updated_at: now,
        })
    }
}

impl From<&Project> for ProjectForm {
    fn from(project: &Project) -> Self {
        let process_stages = match &project.media {
            ProjectMedia::Single { .. } => None,
            ProjectMedia::Process { stages, .. } => Some(
                stages
                    .iter()
                    .map(|s| StageForm {
                        id: s.id.clone(),
                        image: s.image.clone(),
                        name: s.name.clone(),
                        caption: s.caption.clone(),
                    })
                    .collect(),
            ),
        };

        Self {
            title: project.title.clone(),
            slug: project.slug.clone(),
            description: project.description.clone(),
            year: project.year,
            kind: project.kind(),
            tags: project.tags.clone(),
            featured_image: project.featured_image().map(str::to_string),
            process_stages,
            video: project.video().map(|v| VideoForm {
                provider: v.provider,
                video_id: v.video_id.clone(),
            }),
            published: project.published,
            order: project.order,
        }
    }
}

/// One marker per stage, spaced a minute apart and labelled by stage name
fn default_timestamps(stages: &[ProcessStage]) -> Vec<StageTimestamp> {
    stages
        .iter()
        .zip((0u32..).map(|i| i * DEFAULT_STAGE_SPACING_SECONDS))
        .map(|(stage, timestamp)| StageTimestamp {
            label: stage.name.clone(),
            timestamp,
        })
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
