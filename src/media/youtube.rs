//! YouTube video ID extraction.

use std::sync::LazyLock;

use regex::Regex;

use super::content_type::YOUTUBE_ID_LEN;

/// Known YouTube URL shapes: `watch?v=`, `embed/`, `v/`, `e/`, `youtu.be/`
/// and channel-style paths. Captures the 11-character ID.
static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .unwrap()
});

/// Base URL of the embeddable player.
const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Extract the video ID from a YouTube URL.
///
/// A string of exactly 11 characters is assumed to already be an ID.
/// Returns `None` when nothing matches.
pub fn extract_id(url: &str) -> Option<String> {
    if url.chars().count() == YOUTUBE_ID_LEN {
        return Some(url.to_string());
    }

    VIDEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Build the player URL for an embedded video.
pub fn embed_url(video_id: &str) -> String {
    format!(
        "{}{}?autoplay=0&modestbranding=1",
        EMBED_BASE,
        urlencoding::encode(video_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn test_extract_watch_url() {
        assert_eq!(
            extract_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some(ID)
        );
        assert_eq!(
            extract_id("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=42").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn test_extract_short_and_embed_urls() {
        assert_eq!(extract_id("https://youtu.be/dQw4w9WgXcQ").as_deref(), Some(ID));
        assert_eq!(
            extract_id("https://youtu.be/dQw4w9WgXcQ?si=abcdef").as_deref(),
            Some(ID)
        );
        assert_eq!(
            extract_id("https://www.youtube.com/embed/dQw4w9WgXcQ").as_deref(),
            Some(ID)
        );
        assert_eq!(
            extract_id("https://www.youtube.com/v/dQw4w9WgXcQ").as_deref(),
            Some(ID)
        );
        assert_eq!(extract_id("youtube.com/e/dQw4w9WgXcQ").as_deref(), Some(ID));
    }

    #[test]
    fn test_extract_channel_style_path() {
        assert_eq!(
            extract_id("https://www.youtube.com/user/somebody/dQw4w9WgXcQ").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn test_extract_bare_id_passthrough() {
        assert_eq!(extract_id(ID).as_deref(), Some(ID));
    }

    #[test]
    fn test_extract_no_match() {
        assert_eq!(extract_id("not-a-youtube-url"), None);
        assert_eq!(extract_id("https://youtu.be/short"), None);
        assert_eq!(extract_id(""), None);
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            embed_url(ID),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=0&modestbranding=1"
        );
    }
}
