//! Range types - page windows and viewport bounds

/// Inclusive window of page indices requested from the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRange {
    /// First page in the window
    pub first: usize,
    /// Last page in the window, `first <= last`
    pub last: usize,
}

impl PageRange {
    pub fn new(first: usize, last: usize) -> Self {
        debug_assert!(first <= last, "inverted page range {first}..{last}");
        Self { first, last }
    }

    /// Check if a page index falls inside the window
    pub fn contains(&self, page: usize) -> bool {
        self.first <= page && page <= self.last
    }

    /// Number of pages in the window
    pub fn page_count(&self) -> usize {
        1 + self.last - self.first
    }
}

/// The contiguous item-index range currently visible/buffered by the display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First visible item index
    pub start: usize,
    /// Last visible item index
    pub end: usize,
}

impl Viewport {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}
