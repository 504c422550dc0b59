//! Collection client error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Backend returned {status} for {method} {url}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },
    #[error("Invalid collection response: {0}")]
    Decode(String),
    #[error("Invalid collection URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Collection unavailable")]
    Unavailable,
}
