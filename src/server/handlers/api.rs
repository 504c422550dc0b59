//! API endpoint handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::super::AppState;
use super::helpers::{DELETE_ERROR, LOAD_ERROR};
use crate::collection::{CollectionError, DeleteRequest};
use crate::media::{
    classify, extract_id, filter_records, render, ClassifiedRecord, ContentType, MediaRecord,
    RenderMode,
};

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Search parameters for the media listing.
#[derive(Debug, Deserialize)]
pub struct MediaParams {
    pub q: Option<String>,
}

/// Parameters for classifying a single URL.
#[derive(Debug, Deserialize)]
pub struct ClassifyParams {
    pub url: String,
}

/// API endpoint listing records with their derived content types.
pub async fn api_media(
    State(state): State<AppState>,
    Query(params): Query<MediaParams>,
) -> impl IntoResponse {
    let records = match state.collection.list().await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to fetch media records: {}", e);
            return (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": LOAD_ERROR })),
            )
                .into_response();
        }
    };

    let urls: Vec<ClassifiedRecord> = filter_records(&records, params.q.as_deref().unwrap_or(""))
        .into_iter()
        .map(ClassifiedRecord::from)
        .collect();

    Json(serde_json::json!({ "urls": urls })).into_response()
}

/// API endpoint deleting one record, mirroring the backend's `{id}` body.
pub async fn api_delete_media(
    State(state): State<AppState>,
    Json(request): Json<DeleteRequest>,
) -> impl IntoResponse {
    match state.collection.delete(&request.id).await {
        Ok(()) => {
            tracing::info!("Deleted media record {}", request.id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            tracing::error!("Failed to delete media record {}: {}", request.id, e);
            let status = match e {
                CollectionError::NotFound(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_GATEWAY,
            };
            (status, Json(serde_json::json!({ "error": DELETE_ERROR }))).into_response()
        }
    }
}

/// API endpoint classifying a URL without storing it.
pub async fn api_classify(Query(params): Query<ClassifyParams>) -> impl IntoResponse {
    let content_type = classify(&params.url);
    let youtube_id = match content_type {
        ContentType::Youtube => extract_id(&params.url),
        _ => None,
    };
    let record = MediaRecord::new("", "", params.url.as_str());
    let view = render(&record, RenderMode::Detail);

    Json(serde_json::json!({
        "url": params.url,
        "content_type": content_type,
        "youtube_id": youtube_id,
        "view": view,
    }))
}
