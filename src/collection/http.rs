//! HTTP client for the backend collection endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use url::Url;

use super::{CollectionError, CollectionListing, DeleteRequest, MediaCollection};
use crate::config::Settings;
use crate::media::MediaRecord;

/// Collection backed by a remote `{urls: [...]}` endpoint.
#[derive(Clone)]
pub struct HttpCollection {
    client: Client,
    url: Url,
}

impl HttpCollection {
    /// Create a client for the collection at `url`.
    pub fn new(url: &str, timeout: Duration, user_agent: &str) -> Result<Self, CollectionError> {
        let url = parse_collection_url(url)?;
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client, url })
    }

    /// Create a client from application settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, CollectionError> {
        Self::new(
            &settings.backend_url,
            Duration::from_secs(settings.request_timeout),
            &settings.user_agent,
        )
    }

    /// The endpoint this client talks to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    fn check_status(&self, method: &'static str, response: &Response) -> Result<(), CollectionError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(CollectionError::Status {
                method,
                url: self.url.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

/// Validate a collection endpoint URL. Only http and https are accepted.
pub fn parse_collection_url(url: &str) -> Result<Url, CollectionError> {
    let parsed = Url::parse(url).map_err(|e| CollectionError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(CollectionError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", scheme),
        }),
    }
}

#[async_trait]
impl MediaCollection for HttpCollection {
    async fn list(&self) -> Result<Vec<MediaRecord>, CollectionError> {
        tracing::debug!("Fetching media records from {}", self.url);
        let response = self.client.get(self.url.clone()).send().await?;
        self.check_status("GET", &response)?;

        let body = response.text().await?;
        let listing: CollectionListing =
            serde_json::from_str(&body).map_err(|e| CollectionError::Decode(e.to_string()))?;

        tracing::debug!("Fetched {} media records", listing.urls.len());
        Ok(listing.urls)
    }

    async fn delete(&self, id: &str) -> Result<(), CollectionError> {
        tracing::debug!("Deleting media record {} via {}", id, self.url);
        let response = self
            .client
            .delete(self.url.clone())
            .json(&DeleteRequest { id: id.to_string() })
            .send()
            .await?;
        self.check_status("DELETE", &response)?;
        Ok(())
    }
}
