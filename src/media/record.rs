//! Stored media record model.

use serde::{Deserialize, Serialize};

use super::content_type::{classify, ContentType};
use super::youtube::extract_id;

/// One stored media entry as returned by the collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct MediaRecord {
    /// Backend identifier. Document stores send this as `_id`.
    pub id: String,
    pub title: String,
    pub url: String,
}

/// Wire form of a record. Document stores may send `_id`, `id`, or both.
#[derive(Deserialize)]
struct RawRecord {
    #[serde(rename = "_id")]
    underscore_id: Option<String>,
    id: Option<String>,
    title: String,
    url: String,
}

impl TryFrom<RawRecord> for MediaRecord {
    type Error = String;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let id = raw
            .underscore_id
            .or(raw.id)
            .ok_or_else(|| "missing field `_id` or `id`".to_string())?;
        Ok(Self {
            id,
            title: raw.title,
            url: raw.url,
        })
    }
}

impl MediaRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
        }
    }

    /// Content type derived from the URL. Recomputed on every call.
    pub fn content_type(&self) -> ContentType {
        classify(&self.url)
    }
}

/// Record annotated with its derived content type, for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedRecord<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub url: &'a str,
    pub content_type: ContentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_id: Option<String>,
}

impl<'a> From<&'a MediaRecord> for ClassifiedRecord<'a> {
    fn from(record: &'a MediaRecord) -> Self {
        let content_type = record.content_type();
        let youtube_id = match content_type {
            ContentType::Youtube => extract_id(&record.url),
            _ => None,
        };
        Self {
            id: &record.id,
            title: &record.title,
            url: &record.url,
            content_type,
            youtube_id,
        }
    }
}
