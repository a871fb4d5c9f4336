pub mod feed;
pub mod filter;
pub mod merge;
pub mod wishlist;

pub use feed::{FeedSection, FeedSummary, HomeFeed, ScopeGuard, ViewScope};
pub use filter::{filter_by_genre, sort_by_rating, top_rated};
pub use merge::{merge_all, merge_results, remove_duplicates_by_id};
pub use wishlist::{AddOutcome, SubscriptionId, WishlistEvent, WishlistStore};
