use serde::{Deserialize, Deserializer};

/// One entry of a Discogs `database/search` response.
///
/// Every attribute is optional: search hits for different result types and
/// sources carry different fields, and the normalizer decides what is usable.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawSearchRecord {
    #[serde(default)]
    pub id: Option<u64>,
    /// "Artist - Title" for releases
    #[serde(default)]
    pub title: Option<String>,
    /// Discogs sends a string, older dumps a number
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: Option<String>,
    #[serde(default)]
    pub genre: Option<Vec<String>>,
    #[serde(default)]
    pub style: Option<Vec<String>>,
    #[serde(default)]
    pub format: Option<Vec<String>>,
    #[serde(default)]
    pub label: Option<Vec<String>>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
}

impl RawSearchRecord {
    /// Release id as used by the collection API, empty when the record has none.
    pub fn released_id(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }
}

/// Paging block of a search response
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Pagination {
    /// Total hits across all pages
    #[serde(default)]
    pub items: u64,
}

/// Artist credit from Discogs
#[derive(Debug, Clone, PartialEq)]
pub struct DiscogsArtist {
    pub id: String,
    pub name: String,
}

/// Full release as returned by `/releases/{id}`
#[derive(Debug, Clone, PartialEq)]
pub struct DiscogsRelease {
    pub id: String,
    pub title: String,
    pub year: Option<u32>,
    pub genre: Vec<String>,
    pub style: Vec<String>,
    pub format: Vec<String>,
    pub country: Option<String>,
    pub label: Vec<String>,
    pub cover_image: Option<String>,
    pub thumb: Option<String>,
    pub artists: Vec<DiscogsArtist>,
    pub tracklist: Vec<DiscogsTrack>,
}

/// Represents a track from Discogs
#[derive(Debug, Clone, PartialEq)]
pub struct DiscogsTrack {
    pub position: String,
    pub title: String,
    pub duration: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Year>::deserialize(deserializer)?.map(|year| match year {
        Year::Text(s) => s,
        Year::Int(n) => n.to_string(),
        Year::Float(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accepts_numeric_year() {
        let record: RawSearchRecord =
            serde_json::from_str(r#"{"id": 7, "title": "A - B", "year": 1997}"#).unwrap();
        assert_eq!(record.year.as_deref(), Some("1997"));
        assert_eq!(record.released_id(), "7");
    }

    #[test]
    fn test_record_tolerates_missing_and_null_fields() {
        let record: RawSearchRecord =
            serde_json::from_str(r#"{"title": "A - B", "year": null, "genre": null}"#).unwrap();
        assert_eq!(record.year, None);
        assert_eq!(record.genre, None);
        assert_eq!(record.released_id(), "");
    }

    #[test]
    fn test_record_ignores_unused_fields() {
        let record: RawSearchRecord = serde_json::from_str(
            r#"{"id": 1, "type": "release", "master_id": 9, "format": ["Vinyl", "LP"]}"#,
        )
        .unwrap();
        assert_eq!(record.released_id(), "1");
        assert_eq!(record.format, Some(vec!["Vinyl".to_string(), "LP".to_string()]));
    }
}
