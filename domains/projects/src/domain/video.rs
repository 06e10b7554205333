//! Video reference resolution
//!
//! Turns whatever the artist pasted (a raw ID or a full share URL) into the
//! provider's canonical ID, and builds the embeddable player URL for it.
//! Nothing here touches the network: a bad ID produces an embed URL that
//! simply fails to play in the browser.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static::lazy_static! {
    /// `youtube.com/watch?v=<id>` or `youtu.be/<id>`; the ID ends at a URL delimiter or whitespace
    static ref YOUTUBE_URL_REGEX: Regex =
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([^&\s/?#]+)").unwrap();

    static ref VIMEO_URL_REGEX: Regex = Regex::new(r"vimeo\.com/(\d+)").unwrap();
}

/// Length of a canonical YouTube video ID
const YOUTUBE_ID_LEN: usize = 11;

/// Where a video is hosted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoProvider {
    Youtube,
    Vimeo,
    /// A direct, playable media URL
    Url,
    /// Mux playback ID (HLS stream)
    Mux,
}

impl VideoProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoProvider::Youtube => "youtube",
            VideoProvider::Vimeo => "vimeo",
            VideoProvider::Url => "url",
            VideoProvider::Mux => "mux",
        }
    }

    /// Providers the admin form accepts
    pub fn is_editable(&self) -> bool {
        !matches!(self, VideoProvider::Mux)
    }
}

impl fmt::Display for VideoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "youtube" => Ok(VideoProvider::Youtube),
            "vimeo" => Ok(VideoProvider::Vimeo),
            "url" => Ok(VideoProvider::Url),
            "mux" => Ok(VideoProvider::Mux),
            other => Err(format!("Unknown video provider '{}'", other)),
        }
    }
}

/// Where an embed URL will be played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedContext {
    /// Admin preview while editing
    #[default]
    Editor,
    /// Read-only playback on the public site (related videos suppressed)
    Public,
}

/// Extract the canonical video ID from a raw ID or URL.
///
/// Unrecognised input is returned unchanged; the player will reject it.
pub fn extract_id(provider: VideoProvider, raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    match provider {
        VideoProvider::Youtube => {
            if raw.chars().count() == YOUTUBE_ID_LEN && !raw.contains('/') {
                return raw.to_string();
            }
            YOUTUBE_URL_REGEX
                .captures(raw)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| raw.to_string())
        }
        VideoProvider::Vimeo => {
            if raw.chars().all(|c| c.is_ascii_digit()) {
                return raw.to_string();
            }
            VIMEO_URL_REGEX
                .captures(raw)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| raw.to_string())
        }
        VideoProvider::Url | VideoProvider::Mux => raw.to_string(),
    }
}

/// Build the embeddable player URL for a canonical ID.
///
/// Returns `None` for an empty ID.
pub fn build_embed_url(
    provider: VideoProvider,
    canonical_id: &str,
    context: EmbedContext,
) -> Option<String> {
    if canonical_id.is_empty() {
        return None;
    }

    let url = match provider {
        VideoProvider::Youtube => match context {
            EmbedContext::Editor => format!("https://www.youtube.com/embed/{}", canonical_id),
            EmbedContext::Public => {
                format!("https://www.youtube.com/embed/{}?rel=0", canonical_id)
            }
        },
        VideoProvider::Vimeo => format!("https://player.vimeo.com/video/{}", canonical_id),
        VideoProvider::Mux => format!("https://stream.mux.com/{}.m3u8", canonical_id),
        VideoProvider::Url => canonical_id.to_string(),
    };

    Some(url)
}

/// Format seconds as `M:SS` for stage markers
pub fn format_timestamp(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Parse an `M:SS` marker back into seconds; malformed input yields 0
pub fn parse_timestamp(raw: &str) -> u32 {
    let Some((minutes, seconds)) = raw.trim().split_once(':') else {
        return 0;
    };

    match (minutes.parse::<u32>(), seconds.parse::<u32>()) {
        (Ok(m), Ok(s)) => m.saturating_mul(60).saturating_add(s),
        _ => 0,
    }
}
