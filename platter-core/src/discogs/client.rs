use crate::discogs::models::{
    DiscogsArtist, DiscogsRelease, DiscogsTrack, Pagination, RawSearchRecord,
};
use crate::search::{CatalogSearch, SearchPage, SearchQuery, SortKey};
use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

const DISCOGS_BASE_URL: &str = "https://api.discogs.com";
const USER_AGENT: &str = "platter/0.1";

#[derive(Error, Debug)]
pub enum DiscogsError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("API rate limit exceeded")]
    RateLimit,
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("Release not found")]
    NotFound,
    #[error("Discogs API returned status {0}")]
    Status(u16),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// How requests authenticate against Discogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscogsAuth {
    /// Personal access token
    Token(String),
    /// Consumer key and secret of a registered application
    KeySecret { key: String, secret: String },
}

impl DiscogsAuth {
    fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            DiscogsAuth::Token(token) => vec![("token", token.clone())],
            DiscogsAuth::KeySecret { key, secret } => {
                vec![("key", key.clone()), ("secret", secret.clone())]
            }
        }
    }
}

/// Discogs search response wrapper
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    pagination: Pagination,
    #[serde(default)]
    results: Vec<RawSearchRecord>,
}

/// Artist credit in Discogs API responses
#[derive(Debug, Deserialize, Clone)]
struct ArtistCredit {
    id: u64,
    name: String,
}

/// Detailed release response from Discogs
#[derive(Debug, Deserialize)]
struct ReleaseResponse {
    id: u64,
    title: String,
    year: Option<u32>,
    genres: Option<Vec<String>>,
    styles: Option<Vec<String>>,
    formats: Option<Vec<Format>>,
    labels: Option<Vec<LabelCredit>>,
    country: Option<String>,
    images: Option<Vec<Image>>,
    artists: Option<Vec<ArtistCredit>>,
    tracklist: Option<Vec<TrackResponse>>,
}

#[derive(Debug, Deserialize)]
struct Format {
    name: String,
}

#[derive(Debug, Deserialize)]
struct LabelCredit {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Image {
    #[serde(rename = "type")]
    image_type: String,
    uri: String,
    uri150: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TrackResponse {
    position: String,
    title: String,
    duration: Option<String>,
}

#[derive(Clone)]
pub struct DiscogsClient {
    client: Client,
    auth: DiscogsAuth,
    base_url: String,
}

impl DiscogsClient {
    pub fn new(auth: DiscogsAuth) -> Self {
        Self::with_base_url(auth, DISCOGS_BASE_URL)
    }

    pub fn with_base_url(auth: DiscogsAuth, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            auth,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Query string for `database/search`.
    fn search_params(&self, query: &SearchQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", query.query.clone()),
            ("type", "release".to_string()),
        ];
        if !query.format.is_empty() {
            params.push(("format", query.format.clone()));
        }
        if query.sort == SortKey::DateAdded {
            params.push(("sort", "date_added".to_string()));
            params.push(("sort_order", "desc".to_string()));
        }
        params.push(("per_page", query.per_page.to_string()));
        params.push(("page", query.page.max(1).to_string()));
        params.extend(self.auth.query_params());
        params
    }

    /// Free-text search, one page.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchPage, DiscogsError> {
        let url = format!("{}/database/search", self.base_url);
        info!(
            "📡 Discogs API: GET {} q={:?} sort={:?}",
            url, query.query, query.sort
        );
        let response = self
            .client
            .get(&url)
            .query(&self.search_params(query))
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;
        let status = response.status();
        debug!("Response status: {}", status);
        if status.is_success() {
            let body = response.text().await?;
            let search_response: SearchResponse = serde_json::from_str(&body)?;
            info!(
                "✓ Discogs search returned {} result(s) of {} total",
                search_response.results.len(),
                search_response.pagination.items
            );
            Ok(SearchPage {
                item_count: search_response.pagination.items,
                records: search_response.results,
            })
        } else {
            warn!("✗ Discogs search failed: {}", status);
            Err(status_error(status))
        }
    }

    /// Get detailed information about a specific release
    pub async fn get_release(&self, id: &str) -> Result<DiscogsRelease, DiscogsError> {
        let url = format!("{}/releases/{}", self.base_url, urlencoding::encode(id));
        info!("📡 Discogs API: GET {}", url);
        let response = self
            .client
            .get(&url)
            .query(&self.auth.query_params())
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            warn!("✗ Discogs release {} failed: {}", id, status);
            return Err(status_error(status));
        }
        let body = response.text().await?;
        let release: ReleaseResponse = serde_json::from_str(&body)?;
        Ok(release_from_response(release))
    }
}

#[async_trait]
impl CatalogSearch for DiscogsClient {
    type Error = DiscogsError;

    async fn search(&self, query: &SearchQuery) -> Result<SearchPage, DiscogsError> {
        DiscogsClient::search(self, query).await
    }
}

fn status_error(status: StatusCode) -> DiscogsError {
    match status {
        StatusCode::NOT_FOUND => DiscogsError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => DiscogsError::RateLimit,
        StatusCode::UNAUTHORIZED => DiscogsError::InvalidApiKey,
        other => DiscogsError::Status(other.as_u16()),
    }
}

fn release_from_response(release: ReleaseResponse) -> DiscogsRelease {
    let tracklist = release
        .tracklist
        .unwrap_or_default()
        .into_iter()
        .map(|t| DiscogsTrack {
            position: t.position,
            title: t.title,
            duration: t.duration,
        })
        .collect();
    let artists = release
        .artists
        .unwrap_or_default()
        .into_iter()
        .map(|a| DiscogsArtist {
            id: a.id.to_string(),
            name: a.name,
        })
        .collect();
    let primary_image = release.images.as_ref().and_then(|images| {
        images
            .iter()
            .find(|img| img.image_type == "primary")
            .or_else(|| images.first())
    });
    let cover_image = primary_image.map(|img| img.uri.clone());
    let thumb = primary_image.map(|img| img.uri150.clone().unwrap_or_else(|| img.uri.clone()));
    DiscogsRelease {
        id: release.id.to_string(),
        title: release.title,
        year: release.year,
        genre: release.genres.unwrap_or_default(),
        style: release.styles.unwrap_or_default(),
        format: release
            .formats
            .unwrap_or_default()
            .into_iter()
            .map(|f| f.name)
            .collect(),
        country: release.country,
        label: release
            .labels
            .unwrap_or_default()
            .into_iter()
            .map(|l| l.name)
            .collect(),
        cover_image,
        thumb,
        artists,
        tracklist,
    }
}
