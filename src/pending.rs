//! Pending request registry
//!
//! One outstanding display callback per page index. A callback is created on
//! a read miss and destroyed exactly once, by fulfillment.

use std::fmt;

use ahash::AHashMap;

use crate::domain::PageData;

/// One-shot continuation invoked when a page's data becomes available or is
/// determined unavailable.
pub type PageCallback = Box<dyn FnOnce(PageData)>;

/// Registry of parked display callbacks, at most one per page
#[derive(Default)]
pub struct PendingRequestRegistry {
    callbacks: AHashMap<usize, PageCallback>,
}

impl PendingRequestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park a callback for a page. Last write wins when the display
    /// re-requests the same page.
    pub fn register(&mut self, page: usize, callback: PageCallback) {
        self.callbacks.insert(page, callback);
    }

    /// Invoke and remove the callback for a page. No-op when none is
    /// registered; returns whether a callback fired.
    pub fn resolve(&mut self, page: usize, data: PageData) -> bool {
        match self.callbacks.remove(&page) {
            Some(callback) => {
                callback(data);
                true
            }
            None => false,
        }
    }

    /// Check if a callback is parked for a page
    pub fn contains(&self, page: usize) -> bool {
        self.callbacks.contains_key(&page)
    }

    /// Page indices with a parked callback, in ascending order
    pub fn pending_pages(&self) -> Vec<usize> {
        let mut pages: Vec<usize> = self.callbacks.keys().copied().collect();
        pages.sort_unstable();
        pages
    }

    /// Number of parked callbacks
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Check if no callbacks are parked
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for PendingRequestRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingRequestRegistry")
            .field("pending", &self.pending_pages())
            .finish()
    }
}
