//! Shared UI components

pub mod album_info;
pub mod detail_info;
pub mod icons;
pub mod title_info;
pub mod vinyl_items;

pub use album_info::AlbumInfo;
pub use detail_info::DetailInfo;
pub use icons::{ImageIcon, MinusIcon, PlusIcon};
pub use title_info::TitleInfo;
pub use vinyl_items::{SearchResultText, VinylItems};
