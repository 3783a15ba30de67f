//! Album info card - pure view with an action callback

use crate::components::detail_info::DetailInfo;
use crate::components::icons::{MinusIcon, PlusIcon};
use crate::components::title_info::TitleInfo;
use crate::display_types::{
    ActionClick, ActionKind, ActionSize, PageContext, ProcessedResult, ProcessedTracklist,
    ViewMode,
};
use dioxus::prelude::*;
use platter_common::{has_release_id, present};

fn wrapper_class(view: ViewMode) -> &'static str {
    match view {
        ViewMode::Block => "relative flex flex-col justify-center w-[150px] h-[76px] py-3 px-1",
        ViewMode::List => "relative flex flex-col justify-center min-w-[470px] max-w-[618px] h-[152px]",
        ViewMode::Detail => "relative flex flex-col justify-center w-[394px] h-[160px] py-[60px] px-2 mb-3",
    }
}

fn button_class(view: ViewMode) -> &'static str {
    match view {
        ViewMode::Block => "absolute top-2 right-1",
        ViewMode::List => "absolute top-[60px] right-0",
        ViewMode::Detail => "absolute top-9 right-2",
    }
}

/// Title, detail rows and the add/remove control of one release.
///
/// What is shown comes from `present`; this component only lays it out.
/// In list view the rows sit inside the card, in detail view below it.
/// The click is reported through `on_action`; authentication and the
/// collection lookup happen in the handler, not here.
#[component]
pub fn AlbumInfo(
    released_id: String,
    result: ProcessedResult,
    #[props(default)] tracklist: Option<ProcessedTracklist>,
    view: ViewMode,
    page: PageContext,
    // Signed-in user at render time
    #[props(default)] viewer_id: Option<String>,
    // Owner of the collection being viewed
    #[props(default)] owner_id: Option<String>,
    on_action: EventHandler<ActionClick>,
) -> Element {
    let plan = present(
        &result,
        tracklist.as_ref(),
        view,
        page,
        viewer_id.as_deref(),
        owner_id.as_deref(),
    );
    let fields = plan.visible_fields.clone();
    let show_action = plan.show_action && has_release_id(&released_id);
    let wrapper = wrapper_class(view);

    rsx! {
        div {
            class: wrapper,
            "data-testid": "album-info",
            "data-releasedid": "{released_id}",
            TitleInfo {
                title: result.title_info.title.clone(),
                artist: result.title_info.artist.clone(),
                view,
            }
            if view == ViewMode::List {
                dl {
                    class: "grid grid-cols-[103px_1fr] gap-y-2 min-w-[470px] max-w-[618px] mt-4",
                    "data-testid": "list-info",
                    for (i, field) in fields.iter().enumerate() {
                        DetailInfo { key: "{i}", field: field.clone() }
                    }
                }
            }
            if show_action {
                ActionButton {
                    kind: plan.action_kind,
                    size: plan.action_size,
                    class: button_class(view),
                    released_id: released_id.clone(),
                    on_action,
                }
            }
        }
        if view == ViewMode::Detail {
            dl {
                class: "grid grid-cols-[107px_267px] gap-y-4 w-[394px] px-2",
                "data-testid": "detail-info",
                for (i, field) in fields.iter().enumerate() {
                    DetailInfo { key: "{i}", field: field.clone() }
                }
            }
        }
    }
}

#[component]
fn ActionButton(
    kind: ActionKind,
    size: ActionSize,
    class: &'static str,
    released_id: String,
    on_action: EventHandler<ActionClick>,
) -> Element {
    let label = match kind {
        ActionKind::Add => "Add to collection",
        ActionKind::Remove => "Remove from collection",
    };
    let px = size.pixels();
    let icon = kind.icon();

    rsx! {
        button {
            class: "{class} text-white hover:text-indigo-300 transition-colors",
            aria_label: label,
            title: label,
            "data-action": icon,
            onclick: move |evt| {
                evt.stop_propagation();
                on_action
                    .call(ActionClick {
                        kind,
                        released_id: released_id.clone(),
                    });
            },
            if kind == ActionKind::Add {
                PlusIcon { size: px }
            } else {
                MinusIcon { size: px }
            }
        }
    }
}
