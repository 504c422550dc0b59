//! Access to the backend URL collection.
//!
//! The backend is an external service: `GET` returns `{urls: [...]}` and
//! `DELETE` with a JSON body `{id}` removes one record.

mod error;
mod http;
mod memory;

pub use error::CollectionError;
pub use http::{parse_collection_url, HttpCollection};
pub use memory::MemoryCollection;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::media::MediaRecord;

/// Response body of the collection endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionListing {
    #[serde(default)]
    pub urls: Vec<MediaRecord>,
}

/// Request body for deleting one record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: String,
}

/// A store of media records.
#[async_trait]
pub trait MediaCollection: Send + Sync {
    /// Fetch every stored record.
    async fn list(&self) -> Result<Vec<MediaRecord>, CollectionError>;

    /// Remove one record by identifier.
    async fn delete(&self, id: &str) -> Result<(), CollectionError>;
}
