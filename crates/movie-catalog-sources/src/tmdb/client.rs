use crate::error::{DetailFetchError, FetchError};
use crate::tmdb::api::{self, RequestSettings};
use crate::traits::MovieCatalog;
use async_trait::async_trait;
use movie_catalog_config::{CatalogConfig, Credentials};
use movie_catalog_models::{GenreCatalog, Movie, MovieDetails, TrendingWindow};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Client for the TMDB v3 REST API.
///
/// Cheap to clone; clones share the connection pool. Holds no mutable state.
#[derive(Clone)]
pub struct TmdbClient {
    client: Arc<Client>,
    settings: Arc<RequestSettings>,
}

pub fn create_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("movie-catalog/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
}

impl TmdbClient {
    pub fn new(client: Client, settings: RequestSettings) -> Self {
        if !settings.credentials.is_configured() {
            warn!("No catalog credentials configured; requests will likely be rejected");
        }
        Self {
            client: Arc::new(client),
            settings: Arc::new(settings),
        }
    }

    pub fn from_config(config: &CatalogConfig, credentials: Credentials) -> anyhow::Result<Self> {
        let client = create_http_client(Duration::from_secs(config.request_timeout_secs))?;
        info!("Catalog client targeting {} ({})", config.base_url, config.language);
        Ok(Self::new(client, RequestSettings::from_config(config, credentials)))
    }

    pub fn settings(&self) -> &RequestSettings {
        &self.settings
    }

    async fn list(&self, endpoint: &str, params: &[(&'static str, String)]) -> Result<Vec<Movie>, FetchError> {
        api::get_movie_list(&self.client, &self.settings, endpoint, params).await
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    fn catalog_name(&self) -> &str {
        "tmdb"
    }

    async fn fetch_popular(&self) -> Result<Vec<Movie>, FetchError> {
        self.list(api::POPULAR, &[]).await
    }

    async fn fetch_top_rated(&self) -> Result<Vec<Movie>, FetchError> {
        self.list(api::TOP_RATED, &[]).await
    }

    async fn fetch_upcoming(&self) -> Result<Vec<Movie>, FetchError> {
        self.list(api::UPCOMING, &[]).await
    }

    async fn fetch_now_playing(&self) -> Result<Vec<Movie>, FetchError> {
        self.list(api::NOW_PLAYING, &[]).await
    }

    async fn fetch_trending(&self, window: TrendingWindow) -> Result<Vec<Movie>, FetchError> {
        self.list(&api::trending_endpoint(window), &[]).await
    }

    async fn fetch_by_company(&self, company_id: u64) -> Result<Vec<Movie>, FetchError> {
        self.list(api::DISCOVER, &api::discover_params(Some(company_id), None))
            .await
    }

    async fn fetch_by_genre(&self, genre_id: Option<u32>) -> Result<Vec<Movie>, FetchError> {
        self.list(api::DISCOVER, &api::discover_params(None, genre_id))
            .await
    }

    async fn fetch_details(&self, movie_id: u64) -> Result<MovieDetails, DetailFetchError> {
        api::get_movie_details(&self.client, &self.settings, movie_id)
            .await
            .map_err(|e| DetailFetchError::new(movie_id, e))
    }

    async fn fetch_genre_catalog(&self) -> Result<GenreCatalog, FetchError> {
        api::get_genre_catalog(&self.client, &self.settings).await
    }
}
