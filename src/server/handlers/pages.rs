//! Library and gallery page handlers.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use super::super::template_structs::{
    DisplayedImage, GalleryItem, GalleryTemplate, LibraryRow, LibraryTemplate, SelectedMedia,
};
use super::super::AppState;
use super::helpers::{error_message, load_records, non_empty};
use crate::media::{decode_html_entities, filter_records, find_record, ContentType};

/// Query params for the library page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LibraryParams {
    pub q: Option<String>,
    pub view: Option<String>,
    pub error: Option<String>,
}

/// Query params for the gallery page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryParams {
    pub q: Option<String>,
    pub show: Option<String>,
    pub error: Option<String>,
}

/// Searchable title list with one expanded record.
pub async fn library_page(
    State(state): State<AppState>,
    Query(params): Query<LibraryParams>,
) -> impl IntoResponse {
    let (records, load_error) = load_records(&state).await;
    let query = params.q.as_deref().unwrap_or("");

    let rows: Vec<LibraryRow> = filter_records(&records, query)
        .into_iter()
        .map(|record| LibraryRow::new(record, query))
        .collect();

    let selected = non_empty(&params.view)
        .and_then(|id| find_record(&records, id))
        .map(|record| SelectedMedia::new(record, query));

    let template = LibraryTemplate {
        site_title: &state.site_title,
        query,
        error: load_error.or_else(|| error_message(params.error.as_deref())),
        rows,
        selected,
        total: records.len(),
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Failed to render library page: {}", e);
        e.to_string()
    }))
}

/// Preview grid of every record.
pub async fn gallery_page(
    State(state): State<AppState>,
    Query(params): Query<GalleryParams>,
) -> impl IntoResponse {
    let (records, load_error) = load_records(&state).await;
    let query = params.q.as_deref().unwrap_or("");

    let items: Vec<GalleryItem> = filter_records(&records, query)
        .into_iter()
        .map(|record| GalleryItem::new(record, query))
        .collect();

    let displayed = non_empty(&params.show)
        .and_then(|id| find_record(&records, id))
        .filter(|record| record.content_type() == ContentType::Image)
        .map(|record| DisplayedImage {
            url: record.url.clone(),
            title: decode_html_entities(&record.title),
        });

    let template = GalleryTemplate {
        site_title: &state.site_title,
        query,
        error: load_error.or_else(|| error_message(params.error.as_deref())),
        items,
        displayed,
        total: records.len(),
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Failed to render gallery page: {}", e);
        e.to_string()
    }))
}
