use crate::display_types::ViewMode;
use dioxus::prelude::*;

/// Title and artist heading of a result card
#[component]
pub fn TitleInfo(title: String, artist: String, view: ViewMode) -> Element {
    let (title_class, artist_class) = match view {
        ViewMode::Block => ("font-bold text-white text-sm truncate", "text-gray-400 text-xs truncate"),
        ViewMode::List => ("font-bold text-white text-lg truncate", "text-gray-400 text-sm truncate"),
        ViewMode::Detail => ("font-bold text-white text-2xl", "text-gray-300 text-lg"),
    };

    rsx! {
        h3 { class: "{title_class}", title: "{title}", "{title}" }
        p { class: "{artist_class}", title: "{artist}", "{artist}" }
    }
}
