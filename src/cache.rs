//! Page cache
//!
//! In-memory store of fetched pages keyed by page index. No eviction
//! policy; the caller owns invalidation.

use ahash::AHashMap;

use crate::domain::Item;

/// Cache of delivered pages
#[derive(Debug, Default)]
pub struct PageCache {
    pages: AHashMap<usize, Vec<Item>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached slice for a page
    pub fn get(&self, page: usize) -> Option<&[Item]> {
        self.pages.get(&page).map(Vec::as_slice)
    }

    /// Store a page, replacing any previous slice wholesale
    pub fn insert(&mut self, page: usize, items: Vec<Item>) {
        self.pages.insert(page, items);
    }

    /// Drop a page, returning its items if it was cached
    pub fn remove(&mut self, page: usize) -> Option<Vec<Item>> {
        self.pages.remove(&page)
    }

    /// Check if a page is cached
    pub fn contains(&self, page: usize) -> bool {
        self.pages.contains_key(&page)
    }

    /// Update the `selected` flag on the cached copy of a key, wherever it
    /// lives. Returns true if a cached item matched.
    pub fn set_selected(&mut self, key: &str, selected: bool) -> bool {
        for items in self.pages.values_mut() {
            if let Some(item) = items.iter_mut().find(|item| item.key == key) {
                item.selected = selected;
                return true;
            }
        }
        false
    }

    /// Number of cached pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if no pages are cached
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_remove() {
        let mut cache = PageCache::new();
        assert!(cache.get(0).is_none());

        cache.insert(0, vec![Item::new("a"), Item::new("b")]);
        assert_eq!(cache.get(0).map(<[Item]>::len), Some(2));
        assert!(cache.contains(0));

        let removed = cache.remove(0).expect("page was cached");
        assert_eq!(removed.len(), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_insert_replaces_wholesale() {
        let mut cache = PageCache::new();
        cache.insert(1, vec![Item::new("a")]);
        cache.insert(1, vec![Item::new("b"), Item::new("c")]);
        let items = cache.get(1).expect("page cached");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].key, "b");
    }

    #[test]
    fn test_set_selected_finds_cached_copy() {
        let mut cache = PageCache::new();
        cache.insert(0, vec![Item::new("a")]);
        cache.insert(1, vec![Item::new("b")]);

        assert!(cache.set_selected("b", true));
        let cached = cache.get(1).expect("page cached");
        assert!(cached[0].selected);

        assert!(!cache.set_selected("missing", true));
    }
}
