//! Projects domain: portfolio projects, process stages, video references, public gallery

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{
    ProcessStage, Project, ProjectKind, ProjectMedia, PublicationStatus, StageTimestamp,
    VideoReference,
};
pub use domain::filter::{sort_for_listing, ProjectFilter, ProjectStats, StatusFilter, TypeFilter};
pub use domain::form::{slugify, ProjectForm, StageField, StageForm, VideoForm};
pub use domain::gallery::{Adjacent, Gallery, CATEGORIES};
pub use domain::video::{
    build_embed_url, extract_id, format_timestamp, parse_timestamp, EmbedContext, VideoProvider,
};

// Re-export repository types
pub use repository::{InMemoryProjectStore, PgProjectStore, ProjectStore};

// Re-export API types
pub use api::routes;
pub use api::ProjectsState;
