//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.

use askama::Template;

use crate::media::{decode_html_entities, render_html, ContentType, MediaRecord, RenderMode};
use crate::utils::build_query;

/// Title-only row on the library page.
pub struct LibraryRow {
    pub id: String,
    pub title: String,
    pub view_href: String,
    pub content_type: &'static str,
}

impl LibraryRow {
    pub fn new(record: &MediaRecord, query: &str) -> Self {
        Self {
            id: record.id.clone(),
            title: decode_html_entities(&record.title),
            view_href: format!(
                "/{}",
                build_query(&[("q", Some(query)), ("view", Some(&record.id))])
            ),
            content_type: record.content_type().id(),
        }
    }
}

/// The expanded record on the library page.
pub struct SelectedMedia {
    pub id: String,
    pub title: String,
    pub media_html: String,
    pub close_href: String,
}

impl SelectedMedia {
    pub fn new(record: &MediaRecord, query: &str) -> Self {
        Self {
            id: record.id.clone(),
            title: decode_html_entities(&record.title),
            media_html: render_html(record, RenderMode::Detail),
            close_href: format!("/{}", build_query(&[("q", Some(query))])),
        }
    }
}

/// Preview card on the gallery page.
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub preview_html: String,
    pub content_type: &'static str,
    /// Link that shows this image large at the top of the page.
    pub enlarge_href: Option<String>,
}

impl GalleryItem {
    pub fn new(record: &MediaRecord, query: &str) -> Self {
        let content_type = record.content_type();
        let enlarge_href = match content_type {
            ContentType::Image => Some(format!(
                "/gallery{}",
                build_query(&[("q", Some(query)), ("show", Some(&record.id))])
            )),
            _ => None,
        };

        Self {
            id: record.id.clone(),
            title: decode_html_entities(&record.title),
            preview_html: render_html(record, RenderMode::Preview),
            content_type: content_type.id(),
            enlarge_href,
        }
    }
}

/// Image shown large at the top of the gallery.
pub struct DisplayedImage {
    pub url: String,
    pub title: String,
}

/// Library page: searchable title list with one expanded record.
#[derive(Template)]
#[template(path = "library.html")]
pub struct LibraryTemplate<'a> {
    pub site_title: &'a str,
    pub query: &'a str,
    pub error: Option<&'a str>,
    pub rows: Vec<LibraryRow>,
    pub selected: Option<SelectedMedia>,
    pub total: usize,
}

/// Gallery page: inline previews for every record.
#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate<'a> {
    pub site_title: &'a str,
    pub query: &'a str,
    pub error: Option<&'a str>,
    pub items: Vec<GalleryItem>,
    pub displayed: Option<DisplayedImage>,
    pub total: usize,
}
