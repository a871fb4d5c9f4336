use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Lowest and highest rating the catalog reports
pub const MIN_VOTE_AVERAGE: f64 = 0.0;
pub const MAX_VOTE_AVERAGE: f64 = 10.0;

/// A movie as returned by the catalog list endpoints.
///
/// Image paths are relative to the image CDN; use an image URL builder to
/// turn them into full URLs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub overview: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    pub vote_average: f64, // 0.0 - 10.0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>, // YYYY-MM-DD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

impl Movie {
    /// Create a movie with only an id and a title, every other field empty
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            vote_average: MIN_VOTE_AVERAGE,
            release_date: None,
            original_language: None,
            genre_ids: Vec::new(),
        }
    }

    pub fn with_vote_average(mut self, vote_average: f64) -> Self {
        self.vote_average = clamp_vote_average(vote_average);
        self
    }

    pub fn with_poster_path(mut self, path: impl Into<String>) -> Self {
        self.poster_path = Some(path.into());
        self
    }

    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    /// Parsed release date, if present and well formed
    pub fn release_date_parsed(&self) -> Option<NaiveDate> {
        self.release_date
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release_date_parsed().map(|d| d.year())
    }

    /// Image path to show on a card: the poster, or the backdrop when there is no poster
    pub fn display_image_path(&self) -> Option<&str> {
        self.poster_path
            .as_deref()
            .or(self.backdrop_path.as_deref())
    }
}

/// Clamp a rating into the catalog range; NaN becomes the minimum
pub fn clamp_vote_average(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_VOTE_AVERAGE;
    }
    value.clamp(MIN_VOTE_AVERAGE, MAX_VOTE_AVERAGE)
}

/// Keep the first movie seen for each id, preserving order
pub fn dedupe_by_id(movies: Vec<Movie>) -> Vec<Movie> {
    let mut seen = HashSet::new();
    movies
        .into_iter()
        .filter(|movie| seen.insert(movie.id))
        .collect()
}

/// Treat empty strings from the wire the same as missing values
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
