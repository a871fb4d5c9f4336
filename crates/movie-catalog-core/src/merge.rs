// Combining query results from several catalog requests

use movie_catalog_models::{dedupe_by_id, Movie};
use tracing::debug;

/// One entry per id, first occurrence wins, order preserved
pub fn remove_duplicates_by_id(items: Vec<Movie>) -> Vec<Movie> {
    dedupe_by_id(items)
}

/// Concatenate two results, dropping movies of `second` already present in `first`
pub fn merge_results(first: Vec<Movie>, second: Vec<Movie>) -> Vec<Movie> {
    merge_all([first, second])
}

/// Merge any number of results in order, keeping the first-seen instance of each id
pub fn merge_all<I>(results: I) -> Vec<Movie>
where
    I: IntoIterator<Item = Vec<Movie>>,
{
    let combined: Vec<Movie> = results.into_iter().flatten().collect();
    let total = combined.len();
    let merged = dedupe_by_id(combined);

    debug!(
        "merge_all: {} movies in, {} unique, {} duplicates dropped",
        total,
        merged.len(),
        total - merged.len()
    );
    merged
}
