use async_trait::async_trait;
use movie_catalog_models::{Category, GenreCatalog, Movie, MovieDetails, TrendingWindow};
use crate::error::{DetailFetchError, FetchError};

/// Read access to a remote movie catalog.
///
/// List operations return movies in the order the service sent them, with
/// id-less entries dropped and duplicate ids collapsed to the first one.
/// Every failure is surfaced; nothing is retried.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    fn catalog_name(&self) -> &str;

    // Fixed lists
    async fn fetch_popular(&self) -> Result<Vec<Movie>, FetchError>;
    async fn fetch_top_rated(&self) -> Result<Vec<Movie>, FetchError>;
    async fn fetch_upcoming(&self) -> Result<Vec<Movie>, FetchError>;
    async fn fetch_now_playing(&self) -> Result<Vec<Movie>, FetchError>;
    async fn fetch_trending(&self, window: TrendingWindow) -> Result<Vec<Movie>, FetchError>;

    // Discovery queries, sorted by popularity
    async fn fetch_by_company(&self, company_id: u64) -> Result<Vec<Movie>, FetchError>;

    /// Movies of one genre; `None` falls back to the unfiltered popularity query
    async fn fetch_by_genre(&self, genre_id: Option<u32>) -> Result<Vec<Movie>, FetchError>;

    async fn fetch_by_category(&self, category: Category) -> Result<Vec<Movie>, FetchError> {
        self.fetch_by_genre(category.genre_id()).await
    }

    // Single entities
    async fn fetch_details(&self, movie_id: u64) -> Result<MovieDetails, DetailFetchError>;
    async fn fetch_genre_catalog(&self) -> Result<GenreCatalog, FetchError>;
}
