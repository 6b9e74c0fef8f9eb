//! Inbound batch protocol
//!
//! Everything the remote source pushes at the connector: page deliveries,
//! invalidations, size updates and the batch-complete confirm. Each batch
//! cycle runs Idle -> AwaitingConfirm -> Idle; a delivery while a confirm is
//! still outstanding is valid, and that confirm reads the registry state at
//! confirm time, not at delivery time.

use crate::domain::{Item, PageData};
use crate::error::{Error, Result};
use crate::ports::{DisplayPort, TickScheduler, TransportPort};

use super::Connector;

/// Where the connector stands in the current batch cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum BatchState {
    Idle,
    AwaitingConfirm,
}

impl<D: DisplayPort, T: TransportPort, S: TickScheduler> Connector<D, T, S> {
    /// Inbound delivery of one or more full pages starting at `start_index`.
    ///
    /// Splits the items into page-sized slices, stores each wholesale,
    /// reconciles selection per item and flushes the page to the display
    /// unless a parked callback is waiting for it (that page is flushed via
    /// the callback at confirm time instead, so one update produces exactly
    /// one display notification).
    pub fn deliver_pages(&mut self, start_index: usize, items: Vec<Item>) -> Result<()> {
        let page_size = self.config.page_size;
        if start_index % page_size != 0 {
            return Err(Error::MisalignedIndex {
                index: start_index,
                page_size,
            });
        }

        let first_page = start_index / page_size;
        tracing::debug!(
            first_page,
            count = items.len(),
            "delivering batch pages"
        );
        self.batch_state = BatchState::AwaitingConfirm;

        for (offset, slice) in items.chunks(page_size).enumerate() {
            let page = first_page + offset;
            self.cache.insert(page, slice.to_vec());
            for item in slice {
                self.selection
                    .reconcile(item, &mut self.display, &mut self.transport);
            }
            self.flush_page(page);
        }
        Ok(())
    }

    /// Inbound invalidation of `length` items starting at `start_index`.
    ///
    /// Cached items in the affected pages are programmatically deselected,
    /// the pages are dropped, and the display receives placeholders.
    pub fn invalidate(&mut self, start_index: usize, length: usize) -> Result<()> {
        let page_size = self.config.page_size;
        if start_index % page_size != 0 {
            return Err(Error::MisalignedIndex {
                index: start_index,
                page_size,
            });
        }

        let first_page = start_index / page_size;
        let page_count = length.div_ceil(page_size);
        tracing::debug!(first_page, page_count, "invalidating pages");
        self.batch_state = BatchState::AwaitingConfirm;

        for page in first_page..first_page + page_count {
            if let Some(items) = self.cache.remove(page) {
                for item in items {
                    if self.selection.is_selected(&item.key) {
                        self.selection.deselect(
                            item,
                            false,
                            &mut self.display,
                            &mut self.transport,
                        );
                    }
                }
            }
            self.flush_page(page);
        }
        Ok(())
    }

    /// The source declared a new authoritative dataset size. Takes effect on
    /// the next planning pass; no fetch is triggered here.
    pub fn update_size(&mut self, new_size: usize) {
        tracing::debug!(new_size, "dataset size updated");
        self.size = new_size;
    }

    /// The source finished sending the current batch.
    ///
    /// Sweeps the pending registry: a parked page resolves with cached data
    /// when present, or with a placeholder when it lies outside the last
    /// requested window (no data is coming for it this cycle). Pages inside
    /// the window but not yet cached stay parked. Finally acknowledges the
    /// batch to the transport.
    pub fn confirm_batch(&mut self, batch_id: u64) {
        let window = self.planner.last_requested();
        for page in self.pending.pending_pages() {
            if let Some(items) = self.cache.get(page) {
                let data = PageData::Loaded(items.to_vec());
                self.pending.resolve(page, data);
            } else if !window.contains(page) {
                self.pending
                    .resolve(page, PageData::Placeholder(self.config.page_size));
            }
        }

        tracing::debug!(batch_id, "batch reconciled");
        self.batch_state = BatchState::Idle;
        self.transport.confirm_update(batch_id);
    }

    /// Push a page's current state to the display, unless a parked callback
    /// will deliver it at confirm time.
    fn flush_page(&mut self, page: usize) {
        if self.pending.contains(page) {
            return;
        }
        let data = match self.cache.get(page) {
            Some(items) => PageData::Loaded(items.to_vec()),
            None => PageData::Placeholder(self.config.page_size),
        };
        tracing::trace!(page, placeholder = data.is_placeholder(), "flushing page");
        self.display.update_items(page, data);
    }
}
