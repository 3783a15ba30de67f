//! Search result grid/list

use crate::components::album_info::AlbumInfo;
use crate::components::icons::ImageIcon;
use crate::display_types::{ActionClick, PageContext, ResultCard, ViewMode};
use dioxus::prelude::*;

/// "N results" heading above the result list
#[component]
pub fn SearchResultText(result_count: u64) -> Element {
    let noun = if result_count == 1 { "result" } else { "results" };
    rsx! {
        p { class: "text-gray-300 text-sm", "data-testid": "result-count",
            span { class: "font-bold text-white", "{result_count}" }
            " {noun}"
        }
    }
}

/// Cards for a page of search results or a collection.
#[component]
pub fn VinylItems(
    cards: Vec<ResultCard>,
    view: ViewMode,
    page: PageContext,
    #[props(default)] viewer_id: Option<String>,
    #[props(default)] owner_id: Option<String>,
    on_action: EventHandler<ActionClick>,
) -> Element {
    let container_class = match view {
        ViewMode::Block => "grid grid-cols-5 gap-6 w-[828px] mx-auto mt-6",
        ViewMode::List | ViewMode::Detail => "flex flex-col gap-6 w-[828px] mx-auto mt-6",
    };
    let cover_class = match view {
        ViewMode::Block => "w-[150px] h-[150px] bg-gray-700 flex items-center justify-center",
        ViewMode::List | ViewMode::Detail => {
            "w-[152px] h-[152px] bg-gray-700 flex items-center justify-center shrink-0"
        }
    };
    let item_class = match view {
        ViewMode::Block => "flex flex-col",
        ViewMode::List | ViewMode::Detail => "flex flex-row gap-6",
    };

    if cards.is_empty() {
        return rsx! {
            p { class: "text-gray-400 text-center mt-12", "data-testid": "no-results",
                "No records found"
            }
        };
    }

    rsx! {
        ul { class: container_class,
            for (i, card) in cards.iter().enumerate() {
                li {
                    key: "{i}-{card.released_id}",
                    class: item_class,
                    "data-testid": "vinyl-item",
                    div { class: cover_class,
                        if let Some(url) = &card.cover_url {
                            img {
                                src: "{url}",
                                alt: "Album cover for {card.result.title_info.title}",
                                class: "w-full h-full object-cover",
                            }
                        } else {
                            ImageIcon { class: "w-12 h-12 text-gray-500" }
                        }
                    }
                    AlbumInfo {
                        released_id: card.released_id.clone(),
                        result: card.result.clone(),
                        view,
                        page,
                        viewer_id: viewer_id.clone(),
                        owner_id: owner_id.clone(),
                        on_action,
                    }
                }
            }
        }
    }
}
