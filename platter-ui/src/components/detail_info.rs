use crate::display_types::DetailField;
use dioxus::prelude::*;

/// Placeholder for an invalid row with nothing to show
const MISSING_CONTENT: &str = "Unknown";

/// One `dt`/`dd` pair of release details.
///
/// Invalid rows keep their slot in the grid but render dimmed.
#[component]
pub fn DetailInfo(field: DetailField) -> Element {
    let content_class = if field.is_valid {
        "text-gray-200 text-sm whitespace-pre-line"
    } else {
        "text-gray-500 text-sm italic whitespace-pre-line"
    };
    let content = if field.info_content.is_empty() && !field.is_valid {
        MISSING_CONTENT.to_string()
    } else {
        field.info_content.clone()
    };
    let valid = if field.is_valid { "true" } else { "false" };

    rsx! {
        dt { class: "text-gray-400 text-sm font-medium", "{field.info_name}" }
        dd {
            class: "{content_class}",
            "data-valid": valid,
            "{content}"
        }
    }
}
