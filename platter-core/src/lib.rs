pub mod actions;
pub mod collection;
pub mod config;
pub mod discogs;
pub mod normalize;
pub mod search;

pub use platter_common as common;
