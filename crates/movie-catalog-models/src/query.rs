use serde::{Deserialize, Serialize};
use std::fmt;

/// Time window for the trending endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrendingWindow {
    Day,
    #[default]
    Week,
}

impl TrendingWindow {
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            TrendingWindow::Day => "day",
            TrendingWindow::Week => "week",
        }
    }
}

impl fmt::Display for TrendingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path_segment())
    }
}

/// Browse categories offered as filter chips
///
/// `All` carries no genre filter and maps to the unfiltered popularity query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    Romance,
    Crime,
    Kids,
    Horror,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Romance,
        Category::Crime,
        Category::Kids,
        Category::Horror,
    ];

    pub fn genre_id(&self) -> Option<u32> {
        match self {
            Category::All => None,
            Category::Romance => Some(10749),
            Category::Crime => Some(80),
            Category::Kids => Some(10751),
            Category::Horror => Some(27),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Romance => "Romance",
            Category::Crime => "Crime",
            Category::Kids => "Kids",
            Category::Horror => "Horror",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_window_default_is_week() {
        assert_eq!(TrendingWindow::default(), TrendingWindow::Week);
        assert_eq!(TrendingWindow::Day.as_path_segment(), "day");
        assert_eq!(TrendingWindow::Week.to_string(), "week");
    }

    #[test]
    fn test_category_genre_ids() {
        assert_eq!(Category::All.genre_id(), None);
        assert_eq!(Category::Romance.genre_id(), Some(10749));
        assert_eq!(Category::Crime.genre_id(), Some(80));
        assert_eq!(Category::Kids.genre_id(), Some(10751));
        assert_eq!(Category::Horror.genre_id(), Some(27));
    }
}
