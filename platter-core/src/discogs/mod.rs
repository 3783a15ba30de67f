mod client;
mod models;

pub use client::{DiscogsAuth, DiscogsClient, DiscogsError};
pub use models::{DiscogsArtist, DiscogsRelease, DiscogsTrack, Pagination, RawSearchRecord};
