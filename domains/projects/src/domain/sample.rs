//! Sample gallery used to seed an empty in-memory store

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::{
    ProcessStage, Project, ProjectMedia, StageTimestamp, VideoReference,
};
use crate::domain::video::VideoProvider;

/// 2024-01-01T00:00:00Z
const SEEDED_AT: i64 = 1_704_067_200;

struct SampleVideo {
    id: &'static str,
    duration: u32,
    stages: &'static [(&'static str, u32)],
}

struct SampleProject {
    title: &'static str,
    slug: &'static str,
    year: i32,
    tag: &'static str,
    description: &'static str,
    video: Option<SampleVideo>,
}

const SAMPLES: [SampleProject; 6] = [
    SampleProject {
        title: "Aurora Study",
        slug: "aurora-study",
        year: 2024,
        tag: "portrait",
        description: "A digital portrait exploring ethereal light and color, capturing the mystical essence of aurora borealis through human form.",
        video: Some(SampleVideo {
            id: "dQw4w9WgXcQ",
            duration: 154,
            stages: &[
                ("Initial Sketch", 0),
                ("Line Work", 38),
                ("Base Colors", 77),
                ("Final Render", 115),
            ],
        }),
    },
    SampleProject {
        title: "Mountain Dawn",
        slug: "mountain-dawn",
        year: 2024,
        tag: "landscape",
        description: "A serene landscape capturing the first light of dawn breaking over mountain peaks, painted with warm golden tones.",
        video: None,
    },
    SampleProject {
        title: "Silent Observer",
        slug: "silent-observer",
        year: 2023,
        tag: "portrait",
        description: "A contemplative portrait study focusing on subtle expressions and the quiet power of observation.",
        video: Some(SampleVideo {
            id: "jNQXAC9IVRw",
            duration: 128,
            stages: &[
                ("Rough Sketch", 0),
                ("Refined Lines", 43),
                ("Color Application", 85),
            ],
        }),
    },
    SampleProject {
        title: "Winter Solstice",
        slug: "winter-solstice",
        year: 2024,
        tag: "landscape",
        description: "A peaceful winter landscape celebrating the quiet beauty of the longest night of the year.",
        video: None,
    },
    SampleProject {
        title: "Ethereal Light",
        slug: "ethereal-light",
        year: 2023,
        tag: "portrait",
        description: "An abstract exploration of light and form, where reality dissolves into luminous particles.",
        video: None,
    },
    SampleProject {
        title: "Frozen Lake",
        slug: "frozen-lake",
        year: 2024,
        tag: "landscape",
        description: "A detailed study of ice formations and reflections on a frozen lake, exploring texture and atmosphere.",
        video: Some(SampleVideo {
            id: "M7lc1UVf-VE",
            duration: 186,
            stages: &[
                ("Composition", 0),
                ("Values", 47),
                ("Color", 93),
                ("Details", 140),
            ],
        }),
    },
];

/// The six sample projects, all published, in gallery order
pub fn sample_projects() -> Vec<Project> {
    let seeded_at: DateTime<Utc> = DateTime::from_timestamp(SEEDED_AT, 0).unwrap_or_default();

    SAMPLES
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let cover = format!("/{}.jpg", sample.slug);
            let media = match &sample.video {
                None => ProjectMedia::Single {
                    featured_image: Some(cover),
                },
                Some(video) => sample_process(sample.slug, cover, video),
            };

            Project {
                id: Uuid::from_u128(index as u128 + 1),
                slug: sample.slug.to_string(),
                title: sample.title.to_string(),
                description: Some(sample.description.to_string()),
                year: sample.year,
                tags: vec![sample.tag.to_string()],
                media,
                published: true,
                order: index as i32,
                created_at: seeded_at,
                updated_at: seeded_at,
            }
        })
        .collect()
}

/// Stage images live under `/<slug>/`; the final stage is the finished piece
fn sample_process(slug: &str, cover: String, video: &SampleVideo) -> ProjectMedia {
    let last = video.stages.len().saturating_sub(1);
    let stages = video
        .stages
        .iter()
        .enumerate()
        .map(|(i, (label, _))| ProcessStage {
            id: format!("stage-{}", i + 1),
            image: if i == last {
                cover.clone()
            } else {
                format!("/{}/stage-{}.jpg", slug, i + 1)
            },
            name: label.to_string(),
            caption: None,
        })
        .collect();

    let timestamps = video
        .stages
        .iter()
        .map(|(label, timestamp)| StageTimestamp {
            label: label.to_string(),
            timestamp: *timestamp,
        })
        .collect();

    ProjectMedia::Process {
        stages,
        video: Some(VideoReference {
            provider: VideoProvider::Youtube,
            video_id: video.id.to_string(),
            timestamps,
            duration: Some(video.duration),
        }),
    }
}
