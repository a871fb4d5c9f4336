use serde::{Deserialize, Serialize};
use crate::movie::Movie;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// Mapping of genre id to display name, in the order the catalog lists them
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GenreCatalog {
    genres: Vec<Genre>,
}

impl GenreCatalog {
    /// Build a catalog; later duplicates of an id are ignored
    pub fn new(genres: Vec<Genre>) -> Self {
        let mut catalog = Self::default();
        for genre in genres {
            if catalog.name_of(genre.id).is_none() {
                catalog.genres.push(genre);
            }
        }
        catalog
    }

    pub fn name_of(&self, id: u32) -> Option<&str> {
        self.genres
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.name.as_str())
    }

    /// Genre names for a movie, skipping ids the catalog does not know
    pub fn label(&self, movie: &Movie) -> Vec<&str> {
        movie
            .genre_ids
            .iter()
            .filter_map(|id| self.name_of(*id))
            .collect()
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genre(id: u32, name: &str) -> Genre {
        Genre { id, name: name.to_string() }
    }

    #[test]
    fn test_label_skips_unknown_ids() {
        let catalog = GenreCatalog::new(vec![genre(28, "Action"), genre(878, "Science Fiction")]);
        let mut movie = Movie::new(27205, "Inception");
        movie.genre_ids = vec![28, 9999, 878];

        assert_eq!(catalog.label(&movie), vec!["Action", "Science Fiction"]);
    }

    #[test]
    fn test_duplicate_ids_keep_first_name() {
        let catalog = GenreCatalog::new(vec![genre(27, "Horror"), genre(27, "Scary")]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.name_of(27), Some("Horror"));
    }
}
