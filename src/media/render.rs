//! Render dispatch from content type to a view strategy.
//!
//! `render` is stateless: the same record and mode always produce the same
//! view. Pages embed the HTML produced by [`ViewNode::to_html`].

use serde::Serialize;

use super::content_type::ContentType;
use super::record::MediaRecord;
use super::youtube::{embed_url, extract_id};
use crate::utils::html_escape;

/// Where a record is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Small preview in a list of records.
    Preview,
    /// Single expanded record.
    Detail,
}

impl RenderMode {
    fn image_size(self) -> (u32, u32) {
        match self {
            Self::Preview => (200, 200),
            Self::Detail => (800, 400),
        }
    }

    fn player_height(self) -> u32 {
        match self {
            Self::Preview => 200,
            Self::Detail => 400,
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::Detail => "detail",
        }
    }
}

/// A rendered view of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewNode {
    Image {
        src: String,
        alt: String,
        width: u32,
        height: u32,
        eager: bool,
    },
    Video {
        src: String,
        mime: &'static str,
    },
    Youtube {
        video_id: String,
        embed_url: String,
        height: u32,
    },
    /// YouTube record whose ID could not be extracted.
    InvalidYoutube,
    Link {
        href: String,
        label: &'static str,
    },
}

/// Label of the outbound link for webpages.
pub const LINK_LABEL: &str = "Open Website";

/// Message shown in place of a player when no video ID is found.
pub const INVALID_YOUTUBE_MESSAGE: &str = "Invalid YouTube Video ID";

/// Pick the rendering strategy for a record.
pub fn render(record: &MediaRecord, mode: RenderMode) -> ViewNode {
    match record.content_type() {
        ContentType::Image => {
            let (width, height) = mode.image_size();
            ViewNode::Image {
                src: record.url.clone(),
                alt: record.title.clone(),
                width,
                height,
                eager: mode == RenderMode::Detail,
            }
        }
        ContentType::Video => ViewNode::Video {
            src: record.url.clone(),
            mime: "video/mp4",
        },
        ContentType::Youtube => match extract_id(&record.url) {
            Some(video_id) => ViewNode::Youtube {
                embed_url: embed_url(&video_id),
                video_id,
                height: mode.player_height(),
            },
            None => ViewNode::InvalidYoutube,
        },
        ContentType::Webpage => ViewNode::Link {
            href: record.url.clone(),
            label: LINK_LABEL,
        },
    }
}

impl ViewNode {
    /// Render to an HTML fragment. All record-derived text is escaped.
    pub fn to_html(&self, mode: RenderMode) -> String {
        let class = mode.css_class();
        match self {
            ViewNode::Image {
                src,
                alt,
                width,
                height,
                eager,
            } => format!(
                r#"<img class="media-image {}" src="{}" alt="{}" width="{}" height="{}" loading="{}">"#,
                class,
                html_escape(src),
                html_escape(alt),
                width,
                height,
                if *eager { "eager" } else { "lazy" }
            ),
            ViewNode::Video { src, mime } => format!(
                r#"<video class="media-video {}" controls preload="metadata">
    <source src="{}" type="{}">
    Your browser does not support the video tag.
</video>"#,
                class,
                html_escape(src),
                mime
            ),
            ViewNode::Youtube {
                video_id,
                embed_url,
                height,
            } => format!(
                r#"<iframe class="media-youtube {}" src="{}" title="YouTube video {}" width="100%" height="{}" frameborder="0" allow="accelerometer; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#,
                class,
                html_escape(embed_url),
                html_escape(video_id),
                height
            ),
            ViewNode::InvalidYoutube => {
                format!(r#"<p class="media-error">{}</p>"#, INVALID_YOUTUBE_MESSAGE)
            }
            ViewNode::Link { href, label } => format!(
                r#"<a class="media-link {}" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                class,
                html_escape(href),
                label
            ),
        }
    }
}

/// Render a record straight to HTML.
pub fn render_html(record: &MediaRecord, mode: RenderMode) -> String {
    render(record, mode).to_html(mode)
}
