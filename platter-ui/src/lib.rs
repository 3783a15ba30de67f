//! platter-ui - Dioxus view components for catalog result cards
//!
//! Components are pure views: they take display types and a
//! `PresentationPlan` decision and report clicks through callbacks.

pub mod components;
pub mod display_types;

pub use components::*;
pub use display_types::*;
