pub mod error;
pub mod image;
pub mod tmdb;
pub mod traits;

pub use error::{DetailFetchError, FetchError};
pub use image::ImageUrlBuilder;
pub use tmdb::{RequestSettings, TmdbClient, ACTION_GENRE_ID, MARVEL_STUDIOS_COMPANY_ID};
pub use traits::MovieCatalog;
