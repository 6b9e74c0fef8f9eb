//! Range request planner
//!
//! Translates the continuously changing viewport into a minimal, deduplicated
//! stream of fetch windows. The window comparison against the last issued
//! range happens synchronously at plan time; the actual outbound call is
//! deferred to the host's next tick, so a burst of same-window requests
//! inside one synchronous pass yields at most one outbound fetch.

use std::collections::VecDeque;

use crate::domain::{PageRange, Viewport};

/// Planner for outbound range fetches
#[derive(Debug)]
pub struct RangeRequestPlanner {
    page_size: usize,
    buffer_pages: usize,
    last_requested: PageRange,
    queued: VecDeque<PageRange>,
}

impl RangeRequestPlanner {
    pub fn new(page_size: usize, buffer_pages: usize) -> Self {
        Self {
            page_size,
            buffer_pages,
            // Matches the pre-first-fetch state of the protocol: page 0
            // counts as in-range before anything was ever requested.
            last_requested: PageRange::new(0, 0),
            queued: VecDeque::new(),
        }
    }

    /// Page index holding an item index
    pub fn page_of(&self, item_index: usize) -> usize {
        item_index / self.page_size
    }

    /// The most recent window actually sent towards the transport
    pub fn last_requested(&self) -> PageRange {
        self.last_requested
    }

    /// Compute the fetch window for a display request and queue it if it
    /// differs from the last issued one. Returns true when a new window was
    /// queued and the caller should request a scheduler tick.
    pub fn plan(&mut self, requested_page: usize, viewport: Viewport, dataset_size: usize) -> bool {
        let first_needed = requested_page.min(self.page_of(viewport.start));
        let last_needed = requested_page.max(self.page_of(viewport.end));

        let first = first_needed.saturating_sub(self.buffer_pages);
        // Clamp to the known dataset extent, always allowing at least one
        // page beyond index 0.
        let extent = dataset_size / self.page_size + 1;
        let last = (last_needed + self.buffer_pages).min(extent);
        let first = first.min(last);

        let window = PageRange::new(first, last);
        if window == self.last_requested {
            return false;
        }
        self.last_requested = window;
        tracing::debug!(first = window.first, last = window.last, "queueing range fetch");
        self.queued.push_back(window);
        true
    }

    /// Take the oldest queued window, if any. Called at tick time.
    pub fn take_queued(&mut self) -> Option<PageRange> {
        self.queued.pop_front()
    }

    /// Check if windows are awaiting dispatch
    pub fn has_queued(&self) -> bool {
        !self.queued.is_empty()
    }
}
