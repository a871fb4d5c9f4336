use crate::error::FetchError;
use crate::tmdb::types::{TmdbGenreListResponse, TmdbListResponse, TmdbMovieDetails};
use movie_catalog_config::{CatalogConfig, Credentials};
use movie_catalog_models::{dedupe_by_id, GenreCatalog, Movie, MovieDetails, TrendingWindow};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub const POPULAR: &str = "/movie/popular";
pub const TOP_RATED: &str = "/movie/top_rated";
pub const UPCOMING: &str = "/movie/upcoming";
pub const NOW_PLAYING: &str = "/movie/now_playing";
pub const DISCOVER: &str = "/discover/movie";
pub const GENRE_LIST: &str = "/genre/movie/list";

const POPULARITY_DESC: &str = "popularity.desc";

// Error bodies can be whole HTML pages; keep messages readable
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Fixed configuration attached to every request
#[derive(Clone, Debug)]
pub struct RequestSettings {
    pub base_url: String,
    pub language: String,
    pub credentials: Credentials,
}

impl RequestSettings {
    pub fn new(base_url: impl Into<String>, language: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into(),
            language: language.into(),
            credentials,
        }
    }

    pub fn from_config(config: &CatalogConfig, credentials: Credentials) -> Self {
        Self::new(config.base_url.clone(), config.language.clone(), credentials)
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    /// Query parameters every request carries: language, plus the API key when configured
    fn base_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("language", self.language.clone())];
        if let Some(api_key) = &self.credentials.api_key {
            query.push(("api_key", api_key.clone()));
        }
        query
    }
}

pub fn trending_endpoint(window: TrendingWindow) -> String {
    format!("/trending/movie/{}", window.as_path_segment())
}

pub fn details_endpoint(movie_id: u64) -> String {
    format!("/movie/{}", movie_id)
}

/// Query parameters for `/discover/movie`, always sorted by popularity.
///
/// Filters that are `None` are left out, so no filter at all is the plain
/// popularity listing.
pub fn discover_params(company_id: Option<u64>, genre_id: Option<u32>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(company_id) = company_id {
        params.push(("with_companies", company_id.to_string()));
    }
    if let Some(genre_id) = genre_id {
        params.push(("with_genres", genre_id.to_string()));
    }
    params.push(("sort_by", POPULARITY_DESC.to_string()));
    params
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() > MAX_ERROR_BODY_CHARS {
        let head: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{}...", head)
    } else {
        trimmed.to_string()
    }
}

/// GET an endpoint and decode its JSON body
async fn get_json<T: DeserializeOwned>(
    client: &Client,
    settings: &RequestSettings,
    endpoint: &str,
    params: &[(&'static str, String)],
) -> Result<T, FetchError> {
    debug!("GET {} {:?}", endpoint, params);

    let mut request = client
        .get(settings.url_for(endpoint))
        .query(&settings.base_query())
        .query(params)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json;charset=utf-8");

    if let Some(token) = &settings.credentials.access_token {
        request = request.header("Authorization", format!("Bearer {}", token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(endpoint, e))?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        warn!("Catalog request {} failed: {}", endpoint, status);
        return Err(FetchError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body: truncate_body(&error_text),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::from_reqwest(endpoint, e))?;

    serde_json::from_str(&body).map_err(|e| {
        warn!("Catalog response from {} is not valid JSON: {}", endpoint, e);
        FetchError::parse(endpoint, e.to_string())
    })
}

/// Fetch one list endpoint and normalize its results
pub async fn get_movie_list(
    client: &Client,
    settings: &RequestSettings,
    endpoint: &str,
    params: &[(&'static str, String)],
) -> Result<Vec<Movie>, FetchError> {
    let response: TmdbListResponse = get_json(client, settings, endpoint, params).await?;
    let movies = response
        .into_movies()
        .ok_or_else(|| FetchError::parse(endpoint, "missing results array"))?;

    let movies = dedupe_by_id(movies);
    debug!("{} returned {} movies", endpoint, movies.len());
    Ok(movies)
}

pub async fn get_movie_details(
    client: &Client,
    settings: &RequestSettings,
    movie_id: u64,
) -> Result<MovieDetails, FetchError> {
    let endpoint = details_endpoint(movie_id);
    let response: TmdbMovieDetails = get_json(client, settings, &endpoint, &[]).await?;
    response
        .into_details()
        .ok_or_else(|| FetchError::parse(&endpoint, "missing movie id"))
}

pub async fn get_genre_catalog(
    client: &Client,
    settings: &RequestSettings,
) -> Result<GenreCatalog, FetchError> {
    let response: TmdbGenreListResponse = get_json(client, settings, GENRE_LIST, &[]).await?;
    response
        .into_catalog()
        .ok_or_else(|| FetchError::parse(GENRE_LIST, "missing genres array"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_params_without_filters() {
        let params = discover_params(None, None);
        assert_eq!(params, vec![("sort_by", "popularity.desc".to_string())]);
    }

    #[test]
    fn test_discover_params_with_genre() {
        let params = discover_params(None, Some(28));
        assert_eq!(
            params,
            vec![
                ("with_genres", "28".to_string()),
                ("sort_by", "popularity.desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_discover_params_with_company() {
        let params = discover_params(Some(420), None);
        assert_eq!(params[0], ("with_companies", "420".to_string()));
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(trending_endpoint(TrendingWindow::Day), "/trending/movie/day");
        assert_eq!(trending_endpoint(TrendingWindow::default()), "/trending/movie/week");
        assert_eq!(details_endpoint(27205), "/movie/27205");
    }

    #[test]
    fn test_base_query_includes_api_key_when_present() {
        let settings = RequestSettings::new(
            "https://api.test/3/",
            "en-US",
            Credentials::new(Some("k".to_string()), None),
        );
        assert_eq!(settings.url_for(POPULAR), "https://api.test/3/movie/popular");
        assert_eq!(
            settings.base_query(),
            vec![("language", "en-US".to_string()), ("api_key", "k".to_string())]
        );

        let anonymous = RequestSettings::new("https://api.test/3", "en-US", Credentials::default());
        assert_eq!(anonymous.base_query().len(), 1);
    }

    #[test]
    fn test_truncate_body() {
        let long = "x".repeat(500);
        assert_eq!(truncate_body(&long).len(), MAX_ERROR_BODY_CHARS + 3);
        assert_eq!(truncate_body("  short  "), "short");
    }
}
