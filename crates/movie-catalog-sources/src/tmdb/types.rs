//! TMDB response shapes.
//!
//! Every field is optional on the wire; conversion into the model types
//! fills defaults instead of rejecting the payload.
use movie_catalog_models::{clamp_vote_average, non_empty, Genre, GenreCatalog, Movie, MovieDetails};
use crate::tmdb::lenient;
use serde::Deserialize;
use tracing::debug;

/// Envelope of every list endpoint (popular, discover, trending, ...)
#[derive(Debug, Deserialize)]
pub(crate) struct TmdbListResponse {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub page: Option<u32>,
    // Kept as raw values so one malformed entry does not sink the whole page
    #[serde(default, deserialize_with = "lenient::list")]
    pub results: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TmdbMovie {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub original_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub vote_average: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub original_language: Option<String>,
    #[serde(default, deserialize_with = "lenient::vec")]
    pub genre_ids: Vec<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TmdbGenre {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TmdbMovieDetails {
    #[serde(flatten)]
    pub movie: TmdbMovie,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub runtime: Option<u32>,
    #[serde(default, deserialize_with = "lenient::vec")]
    pub genres: Vec<TmdbGenre>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub homepage: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TmdbGenreListResponse {
    #[serde(default, deserialize_with = "lenient::list")]
    pub genres: Option<Vec<TmdbGenre>>,
}

impl TmdbMovie {
    /// Convert to a `Movie`; entries without an id cannot be keyed and are dropped
    pub fn into_movie(self) -> Option<Movie> {
        let id = self.id?;
        let title = non_empty(self.title)
            .or_else(|| non_empty(self.original_title))
            .unwrap_or_default();

        Some(Movie {
            id,
            title,
            overview: self.overview.unwrap_or_default(),
            poster_path: non_empty(self.poster_path),
            backdrop_path: non_empty(self.backdrop_path),
            vote_average: clamp_vote_average(self.vote_average.unwrap_or_default()),
            release_date: non_empty(self.release_date),
            original_language: non_empty(self.original_language),
            genre_ids: self.genre_ids,
        })
    }
}

impl TmdbGenre {
    /// Genres without a usable id cannot label anything and are dropped
    fn into_genre(self) -> Option<Genre> {
        Some(Genre {
            id: self.id?,
            name: self.name.unwrap_or_default(),
        })
    }
}

impl TmdbListResponse {
    /// Convert the raw results, skipping entries that are not movie objects or lack an id
    pub fn into_movies(self) -> Option<Vec<Movie>> {
        let results = self.results?;
        let total = results.len();

        let movies: Vec<Movie> = results
            .into_iter()
            .filter_map(|value| serde_json::from_value::<TmdbMovie>(value).ok())
            .filter_map(TmdbMovie::into_movie)
            .collect();

        if movies.len() < total {
            debug!(
                "Skipped {} of {} list entries without a usable id (page {:?})",
                total - movies.len(),
                total,
                self.page
            );
        }

        Some(movies)
    }
}

impl TmdbMovieDetails {
    pub fn into_details(self) -> Option<MovieDetails> {
        let genres: Vec<Genre> = self.genres.into_iter().filter_map(TmdbGenre::into_genre).collect();
        let mut movie = self.movie.into_movie()?;
        // The detail endpoint carries full genre objects instead of genre_ids
        if movie.genre_ids.is_empty() {
            movie.genre_ids = genres.iter().map(|g| g.id).collect();
        }

        Some(MovieDetails {
            movie,
            runtime: self.runtime,
            genres,
            tagline: non_empty(self.tagline),
            status: non_empty(self.status),
            homepage: non_empty(self.homepage),
        })
    }
}

impl TmdbGenreListResponse {
    pub fn into_catalog(self) -> Option<GenreCatalog> {
        let genres = self.genres?;
        Some(GenreCatalog::new(
            genres.into_iter().filter_map(TmdbGenre::into_genre).collect(),
        ))
    }
}
