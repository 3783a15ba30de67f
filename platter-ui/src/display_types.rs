//! Display types for UI components
//!
//! The card text types come from `platter-common`; `ResultCard` adds what a
//! search-result card needs besides its text.

pub use platter_common::{
    ActionClick, ActionKind, ActionSize, DetailField, PageContext, PresentationPlan,
    ProcessedResult, ProcessedTracklist, TitleInfo, ViewMode,
};

/// One search result as the result list renders it
#[derive(Clone, Debug, PartialEq)]
pub struct ResultCard {
    pub released_id: String,
    pub cover_url: Option<String>,
    pub result: ProcessedResult,
}
