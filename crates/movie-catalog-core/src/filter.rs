// Presentation-side ordering and filtering of fetched results.
// The catalog order is kept by the client; these helpers are opt-in.

use movie_catalog_models::Movie;
use std::cmp::Ordering;

/// Stable sort, highest `vote_average` first
pub fn sort_by_rating(mut items: Vec<Movie>) -> Vec<Movie> {
    items.sort_by(|a, b| {
        b.vote_average
            .partial_cmp(&a.vote_average)
            .unwrap_or(Ordering::Equal)
    });
    items
}

/// The `n` best rated movies, e.g. for the featured carousel
pub fn top_rated(items: Vec<Movie>, n: usize) -> Vec<Movie> {
    let mut sorted = sort_by_rating(items);
    sorted.truncate(n);
    sorted
}

pub fn filter_by_genre(items: Vec<Movie>, genre_id: u32) -> Vec<Movie> {
    items
        .into_iter()
        .filter(|m| m.genre_ids.contains(&genre_id))
        .collect()
}
