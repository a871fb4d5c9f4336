use movie_catalog_models::Movie;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Result of [`WishlistStore::add`].
///
/// A duplicate add is not an error; views use `AlreadyPresent` to show an
/// informational notice instead of "added".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

/// Effective change to the wishlist, sent to subscribers
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistEvent {
    Added(Movie),
    Removed(u64),
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&WishlistEvent) + Send + Sync>;

/// In-memory bookmark set.
///
/// Keeps movies in the order they were added with one entry per id. Lives for
/// the process lifetime and is never persisted. None of the operations fail:
/// adding a present movie or removing an absent id is a no-op.
#[derive(Default)]
pub struct WishlistStore {
    entries: Vec<Movie>,
    ids: HashSet<u64>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl WishlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, movie: Movie) -> AddOutcome {
        if !self.ids.insert(movie.id) {
            debug!("Movie {} already in wishlist", movie.id);
            return AddOutcome::AlreadyPresent;
        }

        debug!("Added movie {} ({}) to wishlist", movie.id, movie.title);
        self.entries.push(movie.clone());
        self.notify(&WishlistEvent::Added(movie));
        AddOutcome::Added
    }

    /// Returns whether an entry was removed
    pub fn remove(&mut self, id: u64) -> bool {
        if !self.ids.remove(&id) {
            return false;
        }

        self.entries.retain(|m| m.id != id);
        debug!("Removed movie {} from wishlist", id);
        self.notify(&WishlistEvent::Removed(id));
        true
    }

    /// Add when absent, remove when present; returns the new membership
    pub fn toggle(&mut self, movie: Movie) -> bool {
        if self.contains(movie.id) {
            self.remove(movie.id);
            false
        } else {
            self.add(movie);
            true
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn get(&self, id: u64) -> Option<&Movie> {
        if !self.contains(id) {
            return None;
        }
        self.entries.iter().find(|m| m.id == id)
    }

    /// Snapshot of the wishlist in insertion order
    pub fn list(&self) -> Vec<Movie> {
        self.entries.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.entries.clear();
        self.ids.clear();
        self.notify(&WishlistEvent::Cleared);
    }

    /// Register a callback run after every effective mutation
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&WishlistEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&self, event: &WishlistEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for WishlistStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WishlistStore")
            .field("entries", &self.entries)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn inception() -> Movie {
        Movie::new(27205, "Inception")
    }

    #[test]
    fn test_add_twice_keeps_one_entry() {
        let mut store = WishlistStore::new();
        assert_eq!(store.add(inception()), AddOutcome::Added);
        assert_eq!(store.add(inception()), AddOutcome::AlreadyPresent);

        let list = store.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 27205);
    }

    #[test]
    fn test_duplicate_add_keeps_first_instance() {
        let mut store = WishlistStore::new();
        store.add(inception());
        store.add(Movie::new(27205, "Inception (re-release)"));
        assert_eq!(store.get(27205).unwrap().title, "Inception");
    }

    #[test]
    fn test_remove_on_empty_store_is_noop() {
        let mut store = WishlistStore::new();
        assert!(!store.remove(27205));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_remove_absent_id_leaves_list_unchanged() {
        let mut store = WishlistStore::new();
        store.add(inception());
        store.add(Movie::new(155, "The Dark Knight"));
        let before = store.list();

        assert!(!store.remove(603));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = WishlistStore::new();
        store.add(Movie::new(3, "C"));
        store.add(Movie::new(1, "A"));
        store.add(Movie::new(2, "B"));
        store.remove(1);
        store.add(Movie::new(1, "A"));

        let ids: Vec<u64> = store.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_contains_tracks_add_remove_sequence() {
        let mut store = WishlistStore::new();
        let ops: &[(bool, u64)] = &[
            (true, 1),
            (true, 2),
            (false, 1),
            (true, 3),
            (true, 1),
            (false, 2),
            (false, 2),
            (true, 3),
        ];
        let mut expected = HashSet::new();

        for &(is_add, id) in ops {
            if is_add {
                store.add(Movie::new(id, format!("Movie {}", id)));
                expected.insert(id);
            } else {
                store.remove(id);
                expected.remove(&id);
            }
            for probe in 1..=3 {
                assert_eq!(store.contains(probe), expected.contains(&probe));
            }
            assert_eq!(store.len(), expected.len());
        }
    }

    #[test]
    fn test_toggle() {
        let mut store = WishlistStore::new();
        assert!(store.toggle(inception()));
        assert!(store.contains(27205));
        assert!(!store.toggle(inception()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_subscribers_see_effective_mutations_only() {
        let mut store = WishlistStore::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let sub = store.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

        store.add(inception());
        store.add(inception());
        store.remove(603);
        store.remove(27205);
        store.clear();

        assert_eq!(
            *events.lock().unwrap(),
            vec![WishlistEvent::Added(inception()), WishlistEvent::Removed(27205)]
        );

        assert!(store.unsubscribe(sub));
        store.add(inception());
        assert_eq!(events.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut store = WishlistStore::new();
        store.add(inception());
        store.clear();
        assert!(store.is_empty());
        assert!(!store.contains(27205));
    }
}
