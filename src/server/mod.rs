//! Web server for browsing the media collection.
//!
//! Serves two pages over the same backend list:
//! - Library: searchable titles with one record expanded in detail
//! - Gallery: inline previews for every record
//!
//! Every page load refetches the list from the backend collection.

mod assets;
mod handlers;
mod routes;
mod template_structs;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::collection::{HttpCollection, MediaCollection};
use crate::config::Settings;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub collection: Arc<dyn MediaCollection>,
    pub site_title: String,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let collection = HttpCollection::from_settings(settings)?;

        Ok(Self {
            collection: Arc::new(collection),
            site_title: settings.site_title.clone(),
        })
    }

    /// State over an arbitrary collection.
    pub fn with_collection(collection: Arc<dyn MediaCollection>, site_title: &str) -> Self {
        Self {
            collection,
            site_title: site_title.to_string(),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);
    tracing::info!("Using media collection at {}", settings.backend_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::collection::MemoryCollection;
    use crate::media::{MediaRecord, INVALID_YOUTUBE_MESSAGE};

    fn sample_records() -> Vec<MediaRecord> {
        vec![
            MediaRecord::new("1", "Sunset over the bay", "https://example.com/sunset.jpg"),
            MediaRecord::new("2", "Tom &amp; Jerry clip", "https://example.com/clip.mp4"),
            MediaRecord::new("3", "Never Gonna Give You Up", "https://youtu.be/dQw4w9WgXcQ"),
            MediaRecord::new("4", "Rust homepage", "https://www.rust-lang.org/learn"),
            MediaRecord::new("5", "Trending", "https://www.youtube.com/feed/trending"),
        ]
    }

    fn setup_test_app() -> (axum::Router, Arc<MemoryCollection>) {
        let collection = Arc::new(MemoryCollection::new(sample_records()));
        let state = AppState::with_collection(collection.clone(), "Media Library");
        (create_router(state), collection)
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn post_form(app: axum::Router, body: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/delete")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        (status, location)
    }

    #[tokio::test]
    async fn test_library_lists_all_titles() {
        let (app, _collection) = setup_test_app();
        let (status, html) = get(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Sunset over the bay"));
        assert!(html.contains("Never Gonna Give You Up"));
        assert!(html.contains("Rust homepage"));
        assert!(!html.contains(r#"<section class="selected""#));
    }

    #[tokio::test]
    async fn test_library_search_filters_titles() {
        let (app, _collection) = setup_test_app();
        let (status, html) = get(app, "/library?q=NEVER").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Never Gonna Give You Up"));
        assert!(!html.contains("Sunset over the bay"));
    }

    #[tokio::test]
    async fn test_library_search_uses_decoded_titles() {
        let (app, _collection) = setup_test_app();
        let (_, html) = get(app, "/?q=tom%20%26%20jerry").await;

        assert!(html.contains("clip"));
        assert!(!html.contains("Sunset over the bay"));
    }

    #[tokio::test]
    async fn test_library_search_no_match() {
        let (app, _collection) = setup_test_app();
        let (_, html) = get(app, "/?q=zzzz").await;

        assert!(html.contains("No titles match your search."));
    }

    #[tokio::test]
    async fn test_library_view_expands_record() {
        let (app, _collection) = setup_test_app();
        let (status, html) = get(app, "/?view=3").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"<section class="selected""#));
        assert!(html.contains("https://www.youtube.com/embed/dQw4w9WgXcQ"));
        assert!(html.contains(r#"height="400""#));
    }

    #[tokio::test]
    async fn test_library_view_unknown_id() {
        let (app, _collection) = setup_test_app();
        let (status, html) = get(app, "/?view=missing").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains(r#"<section class="selected""#));
    }

    #[tokio::test]
    async fn test_gallery_renders_previews() {
        let (app, _collection) = setup_test_app();
        let (status, html) = get(app, "/gallery").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"<img class="media-image preview""#));
        assert!(html.contains(r#"loading="lazy""#));
        assert!(html.contains(r#"<video class="media-video preview""#));
        assert!(html.contains(r#"type="video/mp4""#));
        assert!(html.contains(r#"<iframe class="media-youtube preview""#));
        assert!(html.contains(r#"height="200""#));
        assert!(html.contains("Open Website"));
        assert!(html.contains(INVALID_YOUTUBE_MESSAGE));
    }

    #[tokio::test]
    async fn test_gallery_show_displays_image() {
        let (app, _collection) = setup_test_app();
        let (_, html) = get(app.clone(), "/gallery?show=1").await;
        assert!(html.contains(r#"class="displayed-image""#));

        // Non-image records are never displayed large
        let (_, html) = get(app, "/gallery?show=2").await;
        assert!(!html.contains(r#"class="displayed-image""#));
    }

    #[tokio::test]
    async fn test_load_failure_shows_error() {
        let (app, collection) = setup_test_app();
        collection.set_unavailable(true);

        let (status, html) = get(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Failed to load media URLs."));
        assert!(!html.contains("Sunset over the bay"));

        let (_, html) = get(app, "/gallery").await;
        assert!(html.contains("Failed to load media URLs."));
    }

    #[tokio::test]
    async fn test_delete_redirects_and_removes() {
        let (app, collection) = setup_test_app();
        let (status, location) = post_form(app, "id=1&return_to=library&q=").await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location, "/");
        let remaining = collection.list().await.unwrap();
        assert!(remaining.iter().all(|r| r.id != "1"));
    }

    #[tokio::test]
    async fn test_delete_clears_expanded_selection() {
        let (app, _collection) = setup_test_app();
        let (_, location) = post_form(app, "id=3&return_to=library&q=never&view=3").await;

        assert_eq!(location, "/?q=never");
    }

    #[tokio::test]
    async fn test_delete_keeps_other_selection() {
        let (app, _collection) = setup_test_app();
        let (_, location) = post_form(app, "id=1&return_to=library&view=3").await;

        assert_eq!(location, "/?view=3");
    }

    #[tokio::test]
    async fn test_delete_from_gallery() {
        let (app, _collection) = setup_test_app();
        let (_, location) = post_form(app, "id=2&return_to=gallery&q=clip").await;

        assert_eq!(location, "/gallery?q=clip");
    }

    #[tokio::test]
    async fn test_delete_failure_reports_error() {
        let (app, collection) = setup_test_app();
        collection.set_unavailable(true);
        let (status, location) = post_form(app.clone(), "id=1&return_to=library&view=1").await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location, "/?view=1&error=delete");

        collection.set_unavailable(false);
        let (_, html) = get(app, &location).await;
        assert!(html.contains("Failed to delete media."));
        assert!(html.contains(r#"<section class="selected""#));
    }

    #[tokio::test]
    async fn test_api_media() {
        let (app, _collection) = setup_test_app();
        let (status, body) = get(app, "/api/media").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let urls = json["urls"].as_array().unwrap();
        assert_eq!(urls.len(), 5);
        assert_eq!(urls[0]["content_type"], "image");
        assert_eq!(urls[1]["content_type"], "video");
        assert_eq!(urls[2]["content_type"], "youtube");
        assert_eq!(urls[2]["youtube_id"], "dQw4w9WgXcQ");
        assert_eq!(urls[3]["content_type"], "webpage");
    }

    #[tokio::test]
    async fn test_api_media_filtered() {
        let (app, _collection) = setup_test_app();
        let (_, body) = get(app, "/api/media?q=sunset").await;

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let urls = json["urls"].as_array().unwrap();
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0]["id"], "1");
    }

    #[tokio::test]
    async fn test_api_media_backend_failure() {
        let (app, collection) = setup_test_app();
        collection.set_unavailable(true);
        let (status, body) = get(app, "/api/media").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "Failed to load media URLs.");
    }

    #[tokio::test]
    async fn test_api_delete_media() {
        let (app, collection) = setup_test_app();

        let request = |id: &str| {
            Request::builder()
                .method("DELETE")
                .uri("/api/media")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(format!(r#"{{"id": "{}"}}"#, id)))
                .unwrap()
        };

        let response = app.clone().oneshot(request("4")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(collection.list().await.unwrap().len(), 4);

        let response = app.oneshot(request("4")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_api_classify() {
        let (app, _collection) = setup_test_app();
        let (status, body) = get(
            app,
            "/api/classify?url=https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3DdQw4w9WgXcQ",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["content_type"], "youtube");
        assert_eq!(json["youtube_id"], "dQw4w9WgXcQ");
        assert_eq!(json["view"]["kind"], "youtube");
    }

    #[tokio::test]
    async fn test_health_and_css() {
        let (app, _collection) = setup_test_app();
        let (status, _) = get(app.clone(), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/static/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap_or(""));
        assert!(content_type.unwrap_or("").contains("css"));
    }
}
