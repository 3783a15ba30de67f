use crate::processed::{DetailField, ProcessedResult, ProcessedTracklist};
use crate::view_mode::{ActionKind, ActionSize, PageContext, ViewMode};

/// Detail rows shown next to a card in list view, in this relative order
pub const LIST_FIELD_NAMES: [&str; 2] = ["Released", "Genre"];

/// Click on a card's add/remove icon
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionClick {
    pub kind: ActionKind,
    pub released_id: String,
}

/// Whether a card has a release an action can target.
///
/// Search hits without an id normalize to an empty `released_id`; such cards
/// render without their add/remove control.
pub fn has_release_id(released_id: &str) -> bool {
    !released_id.trim().is_empty()
}

/// What a card renders for a given view mode and page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresentationPlan {
    pub visible_fields: Vec<DetailField>,
    pub show_action: bool,
    pub action_kind: ActionKind,
    pub action_size: ActionSize,
}

/// Decide which fields and controls a result card shows.
///
/// Pure: no I/O, same inputs give the same plan. The identities are the ones
/// known at render time; the action itself re-checks the viewer when clicked.
pub fn present(
    result: &ProcessedResult,
    tracklist: Option<&ProcessedTracklist>,
    view: ViewMode,
    page: PageContext,
    viewer_identity: Option<&str>,
    owner_identity: Option<&str>,
) -> PresentationPlan {
    let action_size = match view {
        ViewMode::Block => ActionSize::Small,
        ViewMode::List | ViewMode::Detail => ActionSize::Large,
    };
    let action_kind = page.action_kind();

    let visible_fields = match view {
        ViewMode::Block => Vec::new(),
        ViewMode::List => list_fields(&result.detail_info),
        ViewMode::Detail => {
            let mut fields = result.detail_info.clone();
            if let Some(tracklist) = tracklist {
                fields.push(tracklist.clone());
            }
            fields
        }
    };

    let show_action = match action_kind {
        ActionKind::Add => true,
        // Only the owner may remove from a collection
        ActionKind::Remove => match viewer_identity {
            Some(viewer) => owner_identity == Some(viewer),
            None => false,
        },
    };

    PresentationPlan {
        visible_fields,
        show_action,
        action_kind,
        action_size,
    }
}

/// First "Released" and first "Genre" row.
///
/// Rows keep their source order, so a source listing Genre before Released
/// shows them in that order. `normalize` always emits Released first.
fn list_fields(detail_info: &[DetailField]) -> Vec<DetailField> {
    let mut seen = [false; LIST_FIELD_NAMES.len()];
    let mut fields = Vec::with_capacity(LIST_FIELD_NAMES.len());
    for field in detail_info {
        if let Some(idx) = LIST_FIELD_NAMES
            .iter()
            .position(|name| *name == field.info_name)
        {
            if !seen[idx] {
                seen[idx] = true;
                fields.push(field.clone());
            }
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processed::TitleInfo;

    fn result_with(detail_info: Vec<DetailField>) -> ProcessedResult {
        ProcessedResult {
            title_info: TitleInfo {
                title: "Dummy".into(),
                artist: "Portishead".into(),
            },
            detail_info,
        }
    }

    fn sample() -> ProcessedResult {
        result_with(vec![
            DetailField::valid("Released", "1995"),
            DetailField::valid("Genre", "Rock"),
            DetailField::invalid("Label", ""),
        ])
    }

    const ALL_VIEWS: [ViewMode; 3] = [ViewMode::Block, ViewMode::List, ViewMode::Detail];

    #[test]
    fn test_list_view_on_browse_page() {
        let plan = present(&sample(), None, ViewMode::List, PageContext::All, None, None);
        assert_eq!(
            plan.visible_fields,
            vec![
                DetailField::valid("Released", "1995"),
                DetailField::valid("Genre", "Rock"),
            ]
        );
        assert_eq!(plan.action_kind, ActionKind::Add);
        assert_eq!(plan.action_size, ActionSize::Large);
        assert!(plan.show_action);
    }

    #[test]
    fn test_block_view_hides_fields() {
        let tracklist = DetailField::valid("Tracklist", "1. Mysterons");
        for page in [PageContext::All, PageContext::Collection] {
            let plan = present(&sample(), Some(&tracklist), ViewMode::Block, page, None, None);
            assert!(plan.visible_fields.is_empty());
            assert_eq!(plan.action_size, ActionSize::Small);
        }
    }

    #[test]
    fn test_list_view_keeps_first_of_each_in_source_order() {
        let result = result_with(vec![
            DetailField::valid("Format", "Vinyl"),
            DetailField::valid("Released", "1994"),
            DetailField::valid("Country", "UK"),
            DetailField::invalid("Genre", ""),
            DetailField::valid("Released", "2008"),
            DetailField::valid("Genre", "Electronic"),
        ]);
        let plan = present(&result, None, ViewMode::List, PageContext::All, None, None);
        assert_eq!(
            plan.visible_fields,
            vec![
                DetailField::valid("Released", "1994"),
                DetailField::invalid("Genre", ""),
            ]
        );
    }

    #[test]
    fn test_list_view_with_genre_before_released() {
        let result = result_with(vec![
            DetailField::valid("Genre", "Jazz"),
            DetailField::valid("Released", "1959"),
        ]);
        let plan = present(&result, None, ViewMode::List, PageContext::All, None, None);
        let names: Vec<_> = plan
            .visible_fields
            .iter()
            .map(|f| f.info_name.as_str())
            .collect();
        assert_eq!(names, vec!["Genre", "Released"]);
    }

    #[test]
    fn test_release_id_must_be_non_blank() {
        assert!(has_release_id("249504"));
        assert!(!has_release_id(""));
        assert!(!has_release_id("  "));
    }

    #[test]
    fn test_list_view_only_list_names() {
        let result = result_with(vec![
            DetailField::valid("Label", "Go! Beat"),
            DetailField::valid("Style", "Trip Hop"),
        ]);
        let plan = present(&result, None, ViewMode::List, PageContext::All, None, None);
        assert!(plan.visible_fields.is_empty());
    }

    #[test]
    fn test_detail_view_appends_tracklist() {
        let result = sample();
        let tracklist = DetailField::valid("Tracklist", "1. Mysterons\n2. Sour Times");
        let plan = present(
            &result,
            Some(&tracklist),
            ViewMode::Detail,
            PageContext::All,
            None,
            None,
        );
        assert_eq!(plan.visible_fields.len(), result.detail_info.len() + 1);
        assert_eq!(plan.visible_fields.last(), Some(&tracklist));
        assert_eq!(&plan.visible_fields[..3], &result.detail_info[..]);
    }

    #[test]
    fn test_detail_view_without_tracklist() {
        let result = sample();
        let plan = present(&result, None, ViewMode::Detail, PageContext::All, None, None);
        assert_eq!(plan.visible_fields, result.detail_info);
    }

    #[test]
    fn test_collection_owner_sees_remove() {
        for view in ALL_VIEWS {
            let plan = present(
                &sample(),
                None,
                view,
                PageContext::Collection,
                Some("u1"),
                Some("u1"),
            );
            assert_eq!(plan.action_kind, ActionKind::Remove);
            assert!(plan.show_action);
        }
    }

    #[test]
    fn test_collection_non_owner_sees_nothing() {
        let plan = present(
            &sample(),
            None,
            ViewMode::Detail,
            PageContext::Collection,
            Some("u1"),
            Some("u2"),
        );
        assert!(!plan.show_action);
    }

    #[test]
    fn test_collection_without_viewer_sees_nothing() {
        for owner in [None, Some("u2")] {
            let plan = present(
                &sample(),
                None,
                ViewMode::List,
                PageContext::Collection,
                None,
                owner,
            );
            assert!(!plan.show_action);
        }
    }

    #[test]
    fn test_add_is_always_shown() {
        for view in ALL_VIEWS {
            for (viewer, owner) in [(None, None), (Some("u1"), Some("u2")), (None, Some("u2"))] {
                let plan = present(&sample(), None, view, PageContext::All, viewer, owner);
                assert!(plan.show_action);
                assert_eq!(plan.action_kind, ActionKind::Add);
            }
        }
    }

    #[test]
    fn test_present_is_deterministic() {
        let result = sample();
        let a = present(&result, None, ViewMode::List, PageContext::All, None, None);
        let b = present(&result, None, ViewMode::List, PageContext::All, None, None);
        assert_eq!(a, b);
    }
}
