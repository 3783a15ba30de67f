//! Collection lookup: which of the viewer's collections already hold a
//! release. Consumed by the add action before the bucket picker opens.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// One of the viewer's collections, as the bucket picker sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionBucket {
    #[serde(alias = "_id", alias = "collectionId")]
    pub id: String,
    #[serde(alias = "title", alias = "collectionName", default)]
    pub name: String,
    /// True when the release is already in this collection
    #[serde(alias = "isIncluded", alias = "included", default)]
    pub contains_release: bool,
}

/// Lookup failed; the add action is aborted and not retried here
#[derive(Debug, thiserror::Error)]
pub enum LookupFailure {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("collection server returned status {0}")]
    Status(u16),
    #[error("unexpected response format: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("collection lookup unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait CollectionLookup: Send + Sync {
    /// Collections of `viewer_identity` that contain or could contain `released_id`.
    async fn lookup(
        &self,
        viewer_identity: &str,
        released_id: &str,
    ) -> Result<Vec<CollectionBucket>, LookupFailure>;
}

/// HTTP client for the collection server (`GET {server}/collections/{user}/{release}`).
#[derive(Clone)]
pub struct CollectionClient {
    server_url: String,
    http: Client,
}

impl CollectionClient {
    pub fn new(server_url: &str) -> Self {
        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn lookup_url(&self, viewer_identity: &str, released_id: &str) -> String {
        format!(
            "{}/collections/{}/{}",
            self.server_url,
            urlencoding::encode(viewer_identity),
            urlencoding::encode(released_id),
        )
    }
}

#[async_trait]
impl CollectionLookup for CollectionClient {
    async fn lookup(
        &self,
        viewer_identity: &str,
        released_id: &str,
    ) -> Result<Vec<CollectionBucket>, LookupFailure> {
        let url = self.lookup_url(viewer_identity, released_id);
        info!("Collection lookup: GET {}", url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        debug!("Response status: {}", status);
        if !status.is_success() {
            warn!("Collection lookup for {} failed: {}", released_id, status);
            return Err(LookupFailure::Status(status.as_u16()));
        }
        let body = response.text().await?;
        let buckets: Vec<CollectionBucket> = serde_json::from_str(&body)?;
        debug!("{} collection(s) for {}", buckets.len(), released_id);
        Ok(buckets)
    }
}
