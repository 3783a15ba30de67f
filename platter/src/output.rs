//! Terminal and HTML rendering of result cards

use dioxus::prelude::*;
use platter_common::{
    has_release_id, present, ActionKind, PageContext, PresentationPlan, ProcessedTracklist,
    ViewMode,
};
use platter_core::search::{SearchItem, SearchResults};
use platter_ui::{AlbumInfo, ResultCard, SearchResultText, VinylItems};

/// Who is looking, and at whose collection
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Viewer {
    pub viewer_id: Option<String>,
    pub owner_id: Option<String>,
}

pub fn to_card(item: &SearchItem) -> ResultCard {
    ResultCard {
        released_id: item.released_id.clone(),
        cover_url: item.thumb.clone().or_else(|| item.cover_image.clone()),
        result: item.result.clone(),
    }
}

/// Plain-text card: heading, visible rows, and the action marker if shown.
pub fn format_card(
    released_id: &str,
    item: &platter_common::ProcessedResult,
    plan: &PresentationPlan,
) -> String {
    let show_action = plan.show_action && has_release_id(released_id);
    let marker = match (show_action, plan.action_kind) {
        (false, _) => "",
        (true, ActionKind::Add) => "  [+]",
        (true, ActionKind::Remove) => "  [-]",
    };
    let mut out = format!(
        "[{}] {} / {}{}\n",
        released_id, item.title_info.title, item.title_info.artist, marker
    );
    for field in &plan.visible_fields {
        let content = if field.is_valid {
            field.info_content.clone()
        } else {
            format!("({})", field.info_content)
        };
        let mut lines = content.lines();
        out.push_str(&format!(
            "    {:<10} {}\n",
            format!("{}:", field.info_name),
            lines.next().unwrap_or_default()
        ));
        for line in lines {
            out.push_str(&format!("    {:<10} {}\n", "", line));
        }
    }
    out
}

pub fn format_results(results: &SearchResults, view: ViewMode, viewer: &Viewer) -> String {
    let mut out = format!("{} results\n\n", results.item_count);
    for item in &results.items {
        let plan = present(
            &item.result,
            None,
            view,
            PageContext::All,
            viewer.viewer_id.as_deref(),
            viewer.owner_id.as_deref(),
        );
        out.push_str(&format_card(&item.released_id, &item.result, &plan));
    }
    out
}

#[derive(Props, Clone, PartialEq)]
struct ResultsPageProps {
    item_count: u64,
    cards: Vec<ResultCard>,
    view: ViewMode,
    viewer: Viewer,
}

// The HTML is a static snapshot; clicks go through `ActionDispatcher::on_click`
// only in an interactive renderer.
fn results_page(props: ResultsPageProps) -> Element {
    rsx! {
        main { class: "bg-gray-900 min-h-screen py-9",
            div { class: "flex items-center gap-3 w-[828px] mx-auto",
                SearchResultText { result_count: props.item_count }
            }
            VinylItems {
                cards: props.cards,
                view: props.view,
                page: PageContext::All,
                viewer_id: props.viewer.viewer_id,
                owner_id: props.viewer.owner_id,
                on_action: move |_| {},
            }
        }
    }
}

pub fn render_results_html(results: &SearchResults, view: ViewMode, viewer: &Viewer) -> String {
    let mut dom = VirtualDom::new_with_props(
        results_page,
        ResultsPageProps {
            item_count: results.item_count,
            cards: results.items.iter().map(to_card).collect(),
            view,
            viewer: viewer.clone(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[derive(Props, Clone, PartialEq)]
struct ReleasePageProps {
    card: ResultCard,
    tracklist: Option<ProcessedTracklist>,
    page: PageContext,
    viewer: Viewer,
}

fn release_page(props: ReleasePageProps) -> Element {
    rsx! {
        main { class: "bg-gray-900 min-h-screen py-9 flex flex-col items-center",
            AlbumInfo {
                released_id: props.card.released_id,
                result: props.card.result,
                tracklist: props.tracklist,
                view: ViewMode::Detail,
                page: props.page,
                viewer_id: props.viewer.viewer_id,
                owner_id: props.viewer.owner_id,
                on_action: move |_| {},
            }
        }
    }
}

pub fn render_release_html(
    card: ResultCard,
    tracklist: Option<ProcessedTracklist>,
    page: PageContext,
    viewer: &Viewer,
) -> String {
    let mut dom = VirtualDom::new_with_props(
        release_page,
        ReleasePageProps {
            card,
            tracklist,
            page,
            viewer: viewer.clone(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
