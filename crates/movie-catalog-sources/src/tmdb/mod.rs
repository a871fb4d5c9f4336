pub mod api;
pub mod client;
mod lenient;
mod types;

pub use api::RequestSettings;
pub use client::TmdbClient;

/// Marvel Studios, used by the studio shelf
pub const MARVEL_STUDIOS_COMPANY_ID: u64 = 420;
pub const ACTION_GENRE_ID: u32 = 28;
