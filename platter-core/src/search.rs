//! Catalog search: query shape, the search collaborator trait, and the
//! fetch-then-normalize step that feeds result cards.

use crate::discogs::RawSearchRecord;
use crate::normalize::normalize_batch;
use async_trait::async_trait;
use platter_common::ProcessedResult;
use std::fmt::Display;
use std::str::FromStr;
use tracing::info;

/// Results per page the browse UI asks for
pub const DEFAULT_PER_PAGE: u32 = 24;
/// Only vinyl is listed
pub const DEFAULT_FORMAT: &str = "Vinyl";

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Catalog relevance order
    #[default]
    Relevance,
    /// Newest additions to the catalog first
    DateAdded,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "relevance" => Ok(SortKey::Relevance),
            "date" | "date_added" => Ok(SortKey::DateAdded),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Free-text catalog query
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub query: String,
    pub sort: SortKey,
    pub format: String,
    pub per_page: u32,
    pub page: u32,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            sort: SortKey::default(),
            format: DEFAULT_FORMAT.to_string(),
            per_page: DEFAULT_PER_PAGE,
            page: 1,
        }
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// One page of raw hits from the catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    /// Total hits across all pages
    pub item_count: u64,
    pub records: Vec<RawSearchRecord>,
}

/// Search collaborator. The core only relies on the output shape.
#[async_trait]
pub trait CatalogSearch: Send + Sync {
    type Error: Display + Send;

    async fn search(&self, query: &SearchQuery) -> Result<SearchPage, Self::Error>;
}

/// A normalized hit plus the data the card needs besides its text
#[derive(Debug, Clone, PartialEq)]
pub struct SearchItem {
    /// Release id the add/remove action targets
    pub released_id: String,
    pub thumb: Option<String>,
    pub cover_image: Option<String>,
    pub result: ProcessedResult,
}

/// Normalized search page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub item_count: u64,
    pub items: Vec<SearchItem>,
}

/// Run a query and normalize the batch once.
pub async fn search_and_normalize<C>(
    catalog: &C,
    query: &SearchQuery,
) -> Result<SearchResults, C::Error>
where
    C: CatalogSearch + ?Sized,
{
    let page = catalog.search(query).await?;
    let items = normalize_batch(&page.records);
    info!(
        "Normalized {} result(s) of {} for '{}'",
        items.len(),
        page.item_count,
        query.query
    );
    Ok(SearchResults {
        item_count: page.item_count,
        items,
    })
}
