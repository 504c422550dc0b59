//! Content type classification for stored media URLs.
//!
//! The content type is never stored; it is recomputed from the URL every time
//! a record is rendered, so classification must be a pure function of the URL.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Length of a bare YouTube video ID.
///
/// Any URL of exactly this many characters is treated as an ID. This collides
/// with unrelated short strings such as `example.png`; see DESIGN.md.
///
/// Length is counted in Unicode scalar values. A browser counts UTF-16 code
/// units, so strings with astral characters (emoji) can classify differently
/// here than in a browser.
pub const YOUTUBE_ID_LEN: usize = 11;

/// File extensions rendered as images.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// File extensions rendered as native video.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg"];

static YOUTUBE_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+$").unwrap()
});

/// Rendering category inferred from a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Image,
    Video,
    Youtube,
    Webpage,
}

impl ContentType {
    /// Get the content type ID as a string.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Youtube => "youtube",
            Self::Webpage => "webpage",
        }
    }

    /// Get the display name for the content type.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Youtube => "YouTube",
            Self::Webpage => "Webpage",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "youtube" => Ok(Self::Youtube),
            "webpage" => Ok(Self::Webpage),
            other => Err(format!("unknown content type: {}", other)),
        }
    }
}

/// Classify a stored URL into the content type used to render it.
///
/// YouTube links (or bare 11-character IDs) win over extensions. Anything
/// unrecognized, including URLs without a `.`, is a webpage.
pub fn classify(url: &str) -> ContentType {
    if YOUTUBE_HOST.is_match(url) || url.chars().count() == YOUTUBE_ID_LEN {
        return ContentType::Youtube;
    }

    let extension = url.rsplit('.').next().unwrap_or(url).to_lowercase();
    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        ContentType::Image
    } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        ContentType::Video
    } else {
        ContentType::Webpage
    }
}
