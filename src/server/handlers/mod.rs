//! HTTP request handlers for the web server.

mod api;
mod delete;
mod helpers;
mod pages;
mod static_files;

// Re-export handlers for use by the router
pub use api::{api_classify, api_delete_media, api_media, health};
pub use delete::delete_media;
pub use pages::{gallery_page, library_page};
pub use static_files::serve_css;
