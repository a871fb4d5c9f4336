pub mod details;
pub mod genre;
pub mod image;
pub mod movie;
pub mod query;

pub use details::MovieDetails;
pub use genre::{Genre, GenreCatalog};
pub use image::ImageSize;
pub use movie::{clamp_vote_average, dedupe_by_id, non_empty, Movie, MAX_VOTE_AVERAGE, MIN_VOTE_AVERAGE};
pub use query::{Category, TrendingWindow};
