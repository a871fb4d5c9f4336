//! Concurrent loading of the shelves shown on the home view.
//!
//! Sections are fetched in parallel and handed to the caller as they
//! complete, in whatever order that is. A [`ViewScope`] marks whether the
//! view that asked for them still exists; results arriving after it is gone
//! are dropped instead of delivered.

use futures::stream::{FuturesUnordered, StreamExt};
use movie_catalog_models::{Movie, TrendingWindow};
use movie_catalog_sources::{FetchError, MovieCatalog};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedSection {
    Trending(TrendingWindow),
    Popular,
    TopRated,
    Upcoming,
    NowPlaying,
    Company(u64),
    Genre(Option<u32>),
}

impl FeedSection {
    /// The five shelves of the home view
    pub const HOME: [FeedSection; 5] = [
        FeedSection::Trending(TrendingWindow::Week),
        FeedSection::Popular,
        FeedSection::TopRated,
        FeedSection::Upcoming,
        FeedSection::NowPlaying,
    ];

    pub fn title(&self) -> String {
        match self {
            FeedSection::Trending(TrendingWindow::Day) => "Trending Today".to_string(),
            FeedSection::Trending(TrendingWindow::Week) => "Trending This Week".to_string(),
            FeedSection::Popular => "Popular".to_string(),
            FeedSection::TopRated => "Top Rated".to_string(),
            FeedSection::Upcoming => "Upcoming".to_string(),
            FeedSection::NowPlaying => "Now Playing".to_string(),
            FeedSection::Company(id) => format!("Studio {}", id),
            FeedSection::Genre(Some(id)) => format!("Genre {}", id),
            FeedSection::Genre(None) => "Discover".to_string(),
        }
    }

    pub async fn fetch(&self, catalog: &dyn MovieCatalog) -> Result<Vec<Movie>, FetchError> {
        match *self {
            FeedSection::Trending(window) => catalog.fetch_trending(window).await,
            FeedSection::Popular => catalog.fetch_popular().await,
            FeedSection::TopRated => catalog.fetch_top_rated().await,
            FeedSection::Upcoming => catalog.fetch_upcoming().await,
            FeedSection::NowPlaying => catalog.fetch_now_playing().await,
            FeedSection::Company(id) => catalog.fetch_by_company(id).await,
            FeedSection::Genre(genre_id) => catalog.fetch_by_genre(genre_id).await,
        }
    }
}

/// Lifetime marker of a view waiting on fetches.
///
/// The view owns the `ViewScope`; fetch code holds [`ScopeGuard`]s. Calling
/// [`ViewScope::dispose`] or dropping the scope makes every guard report the
/// view as gone.
#[derive(Debug)]
pub struct ViewScope {
    live: Arc<AtomicBool>,
}

#[derive(Debug, Clone)]
pub struct ScopeGuard {
    live: Arc<AtomicBool>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn guard(&self) -> ScopeGuard {
        ScopeGuard {
            live: self.live.clone(),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn dispose(&self) {
        self.live.store(false, Ordering::Release);
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl ScopeGuard {
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedSummary {
    /// Sections handed to the caller with movies
    pub loaded: usize,
    /// Sections handed to the caller with an error
    pub failed: usize,
    /// Sections that completed after the view was gone
    pub discarded: usize,
}

#[derive(Debug, Clone)]
pub struct HomeFeed {
    sections: Vec<FeedSection>,
}

impl HomeFeed {
    pub fn new() -> Self {
        Self::with_sections(FeedSection::HOME.to_vec())
    }

    pub fn with_sections(sections: Vec<FeedSection>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[FeedSection] {
        &self.sections
    }

    /// Fetch every section concurrently and deliver each result in arrival order.
    ///
    /// Errors are delivered too; the caller decides between an error message
    /// and an empty shelf. Nothing is delivered once `scope` is no longer live.
    pub async fn load<F>(&self, catalog: &dyn MovieCatalog, scope: &ScopeGuard, mut on_section: F) -> FeedSummary
    where
        F: FnMut(FeedSection, Result<Vec<Movie>, FetchError>),
    {
        let mut summary = FeedSummary::default();
        let mut pending: FuturesUnordered<_> = self
            .sections
            .iter()
            .map(|&section| async move { (section, section.fetch(catalog).await) })
            .collect();

        while let Some((section, result)) = pending.next().await {
            if !scope.is_live() {
                debug!("Discarding {:?} result, view is gone", section);
                summary.discarded += 1;
                continue;
            }

            match &result {
                Ok(movies) => {
                    debug!("Section {:?} loaded {} movies", section, movies.len());
                    summary.loaded += 1;
                }
                Err(e) => {
                    warn!("Section {:?} failed: {}", section, e);
                    summary.failed += 1;
                }
            }
            on_section(section, result);
        }

        info!(
            "{} feed: {} loaded, {} failed, {} discarded",
            catalog.catalog_name(),
            summary.loaded,
            summary.failed,
            summary.discarded
        );
        summary
    }
}

impl Default for HomeFeed {
    fn default() -> Self {
        Self::new()
    }
}
