//! Helper types and utility functions for handlers.

use serde::Deserialize;

use super::super::AppState;
use crate::media::MediaRecord;

/// User-visible message when the record list cannot be fetched.
pub const LOAD_ERROR: &str = "Failed to load media URLs.";

/// User-visible message when a delete request fails.
pub const DELETE_ERROR: &str = "Failed to delete media.";

/// Value of the `error` query param after a failed delete.
pub const DELETE_ERROR_CODE: &str = "delete";

/// Fetch the full record list.
///
/// Failures are logged and reported as [`LOAD_ERROR`] with an empty list.
pub async fn load_records(state: &AppState) -> (Vec<MediaRecord>, Option<&'static str>) {
    match state.collection.list().await {
        Ok(records) => (records, None),
        Err(e) => {
            tracing::error!("Failed to fetch media records: {}", e);
            (Vec::new(), Some(LOAD_ERROR))
        }
    }
}

/// Map the `error` query param to a message.
pub fn error_message(code: Option<&str>) -> Option<&'static str> {
    match code {
        Some(DELETE_ERROR_CODE) => Some(DELETE_ERROR),
        _ => None,
    }
}

/// Page a delete form returns to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnTo {
    #[default]
    Library,
    Gallery,
}

impl ReturnTo {
    pub fn path(self) -> &'static str {
        match self {
            Self::Library => "/",
            Self::Gallery => "/gallery",
        }
    }
}

/// Treat empty form/query values as absent.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
