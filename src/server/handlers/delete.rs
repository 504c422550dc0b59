//! Delete form handler.

use axum::{
    extract::{Form, State},
    response::Redirect,
};
use serde::Deserialize;

use super::super::AppState;
use super::helpers::{non_empty, ReturnTo, DELETE_ERROR_CODE};
use crate::utils::build_query;

/// Form posted by the delete buttons.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteForm {
    pub id: String,
    #[serde(default)]
    pub return_to: ReturnTo,
    pub q: Option<String>,
    /// Record currently expanded on the library page.
    pub view: Option<String>,
}

/// Delete one record and redirect back to the page it was deleted from.
///
/// The redirect target refetches the list. A deleted record is never kept as
/// the expanded selection.
pub async fn delete_media(State(state): State<AppState>, Form(form): Form<DeleteForm>) -> Redirect {
    let result = state.collection.delete(&form.id).await;

    let deleted = match result {
        Ok(()) => {
            tracing::info!("Deleted media record {}", form.id);
            true
        }
        Err(ref e) => {
            tracing::error!("Failed to delete media record {}: {}", form.id, e);
            false
        }
    };

    let view = non_empty(&form.view).filter(|view| !(deleted && *view == form.id));
    let mut params = vec![("q", non_empty(&form.q))];
    if form.return_to == ReturnTo::Library {
        params.push(("view", view));
    }
    if !deleted {
        params.push(("error", Some(DELETE_ERROR_CODE)));
    }

    Redirect::to(&format!("{}{}", form.return_to.path(), build_query(&params)))
}
