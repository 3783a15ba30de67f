//! Pure display types and view-selection logic shared by every platter crate.
//!
//! Nothing in here does I/O.

mod presentation;
mod processed;
mod view_mode;

pub use presentation::{
    has_release_id, present, ActionClick, PresentationPlan, LIST_FIELD_NAMES,
};
pub use processed::{DetailField, ProcessedResult, ProcessedTracklist, TitleInfo};
pub use view_mode::{ActionKind, ActionSize, PageContext, ParseModeError, ViewMode};
