use serde::{Deserialize, Serialize};
use crate::genre::Genre;
use crate::movie::Movie;

/// A single movie as returned by the detail endpoint.
///
/// Carries fields the list endpoints never include (runtime, genre names).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub movie: Movie,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>, // minutes
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl MovieDetails {
    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }

    /// Project back to the list shape, e.g. to bookmark a movie opened from a detail view
    pub fn as_movie(&self) -> Movie {
        self.movie.clone()
    }

    /// Runtime formatted as "2h 28m"
    pub fn runtime_label(&self) -> Option<String> {
        self.runtime.filter(|m| *m > 0).map(|minutes| {
            let (hours, rest) = (minutes / 60, minutes % 60);
            match (hours, rest) {
                (0, m) => format!("{}m", m),
                (h, 0) => format!("{}h", h),
                (h, m) => format!("{}h {}m", h, m),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(runtime: Option<u32>) -> MovieDetails {
        MovieDetails {
            movie: Movie::new(27205, "Inception"),
            runtime,
            genres: vec![
                Genre { id: 28, name: "Action".to_string() },
                Genre { id: 878, name: "Science Fiction".to_string() },
            ],
            tagline: None,
            status: Some("Released".to_string()),
            homepage: None,
        }
    }

    #[test]
    fn test_genre_names_in_order() {
        assert_eq!(details(None).genre_names(), vec!["Action", "Science Fiction"]);
    }

    #[test]
    fn test_runtime_label() {
        assert_eq!(details(Some(148)).runtime_label(), Some("2h 28m".to_string()));
        assert_eq!(details(Some(120)).runtime_label(), Some("2h".to_string()));
        assert_eq!(details(Some(45)).runtime_label(), Some("45m".to_string()));
        assert_eq!(details(Some(0)).runtime_label(), None);
        assert_eq!(details(None).runtime_label(), None);
    }

    #[test]
    fn test_as_movie() {
        assert_eq!(details(None).as_movie().id, 27205);
    }
}
