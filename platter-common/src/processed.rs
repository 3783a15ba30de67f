//! Display-ready shapes produced from raw catalog records

/// Heading of a result card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleInfo {
    pub title: String,
    pub artist: String,
}

/// One labelled row of release details (e.g. "Genre" / "Rock")
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailField {
    pub info_name: String,
    pub info_content: String,
    /// False when the source attribute was missing or malformed. The row is
    /// still rendered so every card keeps the same layout.
    pub is_valid: bool,
}

impl DetailField {
    pub fn new(info_name: impl Into<String>, info_content: impl Into<String>, is_valid: bool) -> Self {
        Self {
            info_name: info_name.into(),
            info_content: info_content.into(),
            is_valid,
        }
    }

    pub fn valid(info_name: impl Into<String>, info_content: impl Into<String>) -> Self {
        Self::new(info_name, info_content, true)
    }

    pub fn invalid(info_name: impl Into<String>, info_content: impl Into<String>) -> Self {
        Self::new(info_name, info_content, false)
    }
}

/// Tracklist summary appended to the detail view. Same shape as any other
/// detail row.
pub type ProcessedTracklist = DetailField;

/// A normalized search result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessedResult {
    pub title_info: TitleInfo,
    /// One entry per canonical field, in display order
    pub detail_info: Vec<DetailField>,
}

impl ProcessedResult {
    /// Look up a detail row by name.
    pub fn field(&self, info_name: &str) -> Option<&DetailField> {
        self.detail_info.iter().find(|f| f.info_name == info_name)
    }
}
