//! Raw catalog records → display-ready `ProcessedResult`s.
//!
//! Every function here is pure and total. A missing or malformed attribute
//! never fails a record; it becomes a `DetailField` with `is_valid == false`
//! so each card carries one row per canonical field.

use crate::discogs::{DiscogsRelease, DiscogsTrack, RawSearchRecord};
use crate::search::SearchItem;
use platter_common::{DetailField, ProcessedResult, ProcessedTracklist, TitleInfo};

/// Detail rows every normalized result carries, in display order
pub const CANONICAL_FIELDS: [&str; 6] = ["Released", "Genre", "Style", "Format", "Label", "Country"];

pub const TRACKLIST_FIELD: &str = "Tracklist";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Normalize one search hit.
pub fn normalize(raw: &RawSearchRecord) -> ProcessedResult {
    ProcessedResult {
        title_info: split_title(raw.title.as_deref().unwrap_or_default()),
        detail_info: detail_info(&SourceFields {
            year: raw.year.as_deref(),
            genre: raw.genre.as_deref(),
            style: raw.style.as_deref(),
            format: raw.format.as_deref(),
            label: raw.label.as_deref(),
            country: raw.country.as_deref(),
        }),
    }
}

/// Normalize a fetched batch, keeping catalog order.
pub fn normalize_batch(records: &[RawSearchRecord]) -> Vec<SearchItem> {
    records
        .iter()
        .map(|raw| SearchItem {
            released_id: raw.released_id(),
            thumb: raw.thumb.clone(),
            cover_image: raw.cover_image.clone(),
            result: normalize(raw),
        })
        .collect()
}

/// Normalize a full release for the album detail page.
///
/// Release titles carry no artist prefix; the credited artists are joined
/// instead.
pub fn normalize_release(release: &DiscogsRelease) -> (ProcessedResult, Option<ProcessedTracklist>) {
    let artist = if release.artists.is_empty() {
        UNKNOWN_ARTIST.to_string()
    } else {
        release
            .artists
            .iter()
            .map(|a| a.name.trim())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let title = match release.title.trim() {
        "" => UNKNOWN_TITLE.to_string(),
        t => t.to_string(),
    };
    let year = release.year.map(|y| y.to_string());
    let result = ProcessedResult {
        title_info: TitleInfo { title, artist },
        detail_info: detail_info(&SourceFields {
            year: year.as_deref(),
            genre: Some(release.genre.as_slice()),
            style: Some(release.style.as_slice()),
            format: Some(release.format.as_slice()),
            label: Some(release.label.as_slice()),
            country: release.country.as_deref(),
        }),
    };
    (result, normalize_tracklist(&release.tracklist))
}

/// Summarize a tracklist as a single detail row, one line per track.
///
/// Returns `None` for an empty tracklist. The row is invalid when any track
/// has no title.
pub fn normalize_tracklist(tracks: &[DiscogsTrack]) -> Option<ProcessedTracklist> {
    if tracks.is_empty() {
        return None;
    }
    let mut is_valid = true;
    let lines: Vec<String> = tracks
        .iter()
        .map(|track| {
            let title = track.title.trim();
            if title.is_empty() {
                is_valid = false;
            }
            let mut line = match track.position.trim() {
                "" => title.to_string(),
                position => format!("{position}. {title}"),
            };
            if let Some(duration) = track.duration.as_deref().map(str::trim) {
                if !duration.is_empty() {
                    line.push_str(&format!(" ({duration})"));
                }
            }
            line
        })
        .collect();
    Some(DetailField::new(TRACKLIST_FIELD, lines.join("\n"), is_valid))
}

struct SourceFields<'a> {
    year: Option<&'a str>,
    genre: Option<&'a [String]>,
    style: Option<&'a [String]>,
    format: Option<&'a [String]>,
    label: Option<&'a [String]>,
    country: Option<&'a str>,
}

fn detail_info(src: &SourceFields<'_>) -> Vec<DetailField> {
    CANONICAL_FIELDS
        .iter()
        .map(|&name| match name {
            "Released" => released_field(src.year),
            "Genre" => list_field(name, src.genre),
            "Style" => list_field(name, src.style),
            "Format" => list_field(name, src.format),
            "Label" => list_field(name, src.label),
            "Country" => text_field(name, src.country),
            _ => DetailField::invalid(name, ""),
        })
        .collect()
}

/// "Artist - Title" → (title, artist); no separator means no artist.
fn split_title(raw: &str) -> TitleInfo {
    let raw = raw.trim();
    let (artist, title) = match raw.split_once(" - ") {
        Some((artist, title)) => (artist.trim(), title.trim()),
        None => ("", raw),
    };
    TitleInfo {
        title: if title.is_empty() { UNKNOWN_TITLE } else { title }.to_string(),
        artist: if artist.is_empty() { UNKNOWN_ARTIST } else { artist }.to_string(),
    }
}

fn released_field(year: Option<&str>) -> DetailField {
    let year = year.map(str::trim).unwrap_or_default();
    let numeric = !year.is_empty() && year.bytes().all(|b| b.is_ascii_digit());
    // Discogs uses "0" for an unknown year
    let is_valid = numeric && !year.trim_start_matches('0').is_empty();
    DetailField::new("Released", year, is_valid)
}

fn list_field(name: &str, values: Option<&[String]>) -> DetailField {
    let mut kept: Vec<&str> = Vec::new();
    for value in values.unwrap_or_default() {
        let value = value.trim();
        if !value.is_empty() && !kept.contains(&value) {
            kept.push(value);
        }
    }
    if kept.is_empty() {
        DetailField::invalid(name, "")
    } else {
        DetailField::valid(name, kept.join(", "))
    }
}

fn text_field(name: &str, value: Option<&str>) -> DetailField {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => DetailField::valid(name, v),
        _ => DetailField::invalid(name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discogs::DiscogsArtist;

    fn strings(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(|s| s.to_string()).collect())
    }

    fn full_record() -> RawSearchRecord {
        RawSearchRecord {
            id: Some(30233),
            title: Some("Portishead - Dummy".into()),
            year: Some("1994".into()),
            genre: strings(&["Electronic"]),
            style: strings(&["Trip Hop", "Downtempo"]),
            format: strings(&["Vinyl", "LP", "Album"]),
            label: strings(&["Go! Beat", "Go! Beat"]),
            country: Some("UK".into()),
            cover_image: Some("https://img/cover.jpg".into()),
            thumb: Some("https://img/thumb.jpg".into()),
        }
    }

    fn names(result: &ProcessedResult) -> Vec<&str> {
        result
            .detail_info
            .iter()
            .map(|f| f.info_name.as_str())
            .collect()
    }

    #[test]
    fn test_normalize_full_record() {
        let result = normalize(&full_record());
        assert_eq!(result.title_info.artist, "Portishead");
        assert_eq!(result.title_info.title, "Dummy");
        assert_eq!(
            result.detail_info,
            vec![
                DetailField::valid("Released", "1994"),
                DetailField::valid("Genre", "Electronic"),
                DetailField::valid("Style", "Trip Hop, Downtempo"),
                DetailField::valid("Format", "Vinyl, LP, Album"),
                DetailField::valid("Label", "Go! Beat"),
                DetailField::valid("Country", "UK"),
            ]
        );
    }

    #[test]
    fn test_empty_record_still_has_every_field() {
        let result = normalize(&RawSearchRecord::default());
        assert_eq!(names(&result), CANONICAL_FIELDS.to_vec());
        assert!(result.detail_info.iter().all(|f| !f.is_valid));
        assert_eq!(result.title_info.title, UNKNOWN_TITLE);
        assert_eq!(result.title_info.artist, UNKNOWN_ARTIST);
    }

    #[test]
    fn test_partial_record_keeps_canonical_order() {
        let record = RawSearchRecord {
            country: Some("US".into()),
            genre: strings(&["Jazz"]),
            ..Default::default()
        };
        let result = normalize(&record);
        assert_eq!(names(&result), CANONICAL_FIELDS.to_vec());
        assert!(result.field("Genre").unwrap().is_valid);
        assert!(result.field("Country").unwrap().is_valid);
        assert!(!result.field("Released").unwrap().is_valid);
    }

    #[test]
    fn test_non_numeric_year_is_invalid_but_kept() {
        let record = RawSearchRecord {
            year: Some(" 19xx ".into()),
            ..Default::default()
        };
        let released = normalize(&record).detail_info[0].clone();
        assert_eq!(released, DetailField::invalid("Released", "19xx"));
    }

    #[test]
    fn test_zero_year_is_invalid() {
        let record = RawSearchRecord {
            year: Some("0".into()),
            ..Default::default()
        };
        assert!(!normalize(&record).detail_info[0].is_valid);
    }

    #[test]
    fn test_empty_and_missing_are_the_same() {
        let missing = RawSearchRecord::default();
        let empty = RawSearchRecord {
            year: Some("".into()),
            genre: strings(&["", "  "]),
            country: Some(" ".into()),
            ..Default::default()
        };
        assert_eq!(normalize(&missing), normalize(&empty));
    }

    #[test]
    fn test_title_without_separator() {
        let record = RawSearchRecord {
            title: Some("Untitled".into()),
            ..Default::default()
        };
        let info = normalize(&record).title_info;
        assert_eq!(info.title, "Untitled");
        assert_eq!(info.artist, UNKNOWN_ARTIST);
    }

    #[test]
    fn test_title_splits_on_first_separator() {
        let record = RawSearchRecord {
            title: Some("Sonic Youth - Daydream Nation - Deluxe".into()),
            ..Default::default()
        };
        let info = normalize(&record).title_info;
        assert_eq!(info.artist, "Sonic Youth");
        assert_eq!(info.title, "Daydream Nation - Deluxe");
    }

    #[test]
    fn test_normalize_is_repeatable() {
        let record = full_record();
        assert_eq!(normalize(&record), normalize(&record));
    }

    #[test]
    fn test_batch_carries_ids_and_images() {
        let items = normalize_batch(&[full_record(), RawSearchRecord::default()]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].released_id, "30233");
        assert_eq!(items[0].thumb.as_deref(), Some("https://img/thumb.jpg"));
        assert_eq!(items[1].released_id, "");
    }

    #[test]
    fn test_tracklist_summary() {
        let tracks = vec![
            DiscogsTrack {
                position: "A1".into(),
                title: "Mysterons".into(),
                duration: Some("5:02".into()),
            },
            DiscogsTrack {
                position: "".into(),
                title: "Hidden Track".into(),
                duration: None,
            },
        ];
        let tracklist = normalize_tracklist(&tracks).unwrap();
        assert_eq!(tracklist.info_name, TRACKLIST_FIELD);
        assert_eq!(tracklist.info_content, "A1. Mysterons (5:02)\nHidden Track");
        assert!(tracklist.is_valid);
    }

    #[test]
    fn test_tracklist_empty_or_untitled() {
        assert_eq!(normalize_tracklist(&[]), None);
        let tracks = vec![DiscogsTrack {
            position: "1".into(),
            title: " ".into(),
            duration: Some("".into()),
        }];
        let tracklist = normalize_tracklist(&tracks).unwrap();
        assert!(!tracklist.is_valid);
        assert_eq!(tracklist.info_content, "1. ");
    }

    #[test]
    fn test_normalize_release_joins_artists() {
        let release = DiscogsRelease {
            id: "1".into(),
            title: "Collaboration".into(),
            year: Some(2001),
            genre: vec!["Hip Hop".into()],
            style: vec![],
            format: vec!["Vinyl".into()],
            country: None,
            label: vec!["Rawkus".into()],
            cover_image: None,
            thumb: None,
            artists: vec![
                DiscogsArtist {
                    id: "1".into(),
                    name: "Mos Def".into(),
                },
                DiscogsArtist {
                    id: "2".into(),
                    name: "Talib Kweli".into(),
                },
            ],
            tracklist: vec![],
        };
        let (result, tracklist) = normalize_release(&release);
        assert_eq!(result.title_info.artist, "Mos Def, Talib Kweli");
        assert_eq!(names(&result), CANONICAL_FIELDS.to_vec());
        assert_eq!(result.field("Released").unwrap().info_content, "2001");
        assert!(!result.field("Style").unwrap().is_valid);
        assert_eq!(tracklist, None);
    }
}
