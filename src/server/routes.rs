//! Router configuration for the web server.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root and /library are the detail-view library page
        .route("/", get(handlers::library_page))
        .route("/library", get(handlers::library_page))
        // Preview grid
        .route("/gallery", get(handlers::gallery_page))
        .route("/delete", post(handlers::delete_media))
        // JSON API
        .route(
            "/api/media",
            get(handlers::api_media).delete(handlers::api_delete_media),
        )
        .route("/api/classify", get(handlers::api_classify))
        .route("/health", get(handlers::health))
        // Static assets
        .route("/static/style.css", get(handlers::serve_css))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
