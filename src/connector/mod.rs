//! Connector
//!
//! Composition root over the page cache, pending registry, range planner and
//! selection machine. This is the only type exposed to the display and to
//! the remote transport; one instance per display, no shared state across
//! instances. All entry points run to completion synchronously; the single
//! deferred step is the outbound range fetch drained by [`Connector::tick`].

mod reconcile;

use self::reconcile::BatchState;

use crate::cache::PageCache;
use crate::config::ConnectorConfig;
use crate::domain::{Item, PageData};
use crate::error::{Error, Result};
use crate::pending::{PageCallback, PendingRequestRegistry};
use crate::planner::RangeRequestPlanner;
use crate::ports::{DisplayPort, TickScheduler, TransportPort};
use crate::selection::{SelectionMode, SelectionStateMachine};

/// Pagination and selection bridge between one display and one transport
pub struct Connector<D: DisplayPort, T: TransportPort, S: TickScheduler> {
    config: ConnectorConfig,
    cache: PageCache,
    pending: PendingRequestRegistry,
    planner: RangeRequestPlanner,
    selection: SelectionStateMachine,
    batch_state: BatchState,
    /// Declared dataset size; 0 until the source reports one
    size: usize,
    display: D,
    transport: T,
    scheduler: S,
}

impl<D: DisplayPort, T: TransportPort, S: TickScheduler> Connector<D, T, S> {
    /// Create a connector over the given collaborators
    pub fn new(config: ConnectorConfig, display: D, transport: T, scheduler: S) -> Result<Self> {
        config.validate()?;
        let planner = RangeRequestPlanner::new(config.page_size, config.buffer_pages);
        let selection = SelectionStateMachine::new(config.selection_mode);
        Ok(Self {
            config,
            cache: PageCache::new(),
            pending: PendingRequestRegistry::new(),
            planner,
            selection,
            batch_state: BatchState::Idle,
            size: 0,
            display,
            transport,
            scheduler,
        })
    }

    // ==================== Display request path ====================

    /// Display read of one page.
    ///
    /// Serves from the cache synchronously when possible, otherwise parks
    /// the callback until a batch delivers or a confirm determines the page
    /// unavailable. Either way, replans the fetch window from the current
    /// viewport; a changed window queues exactly one deferred fetch.
    pub fn request_page(
        &mut self,
        page: usize,
        page_size: usize,
        callback: PageCallback,
    ) -> Result<()> {
        if page_size != self.config.page_size {
            tracing::warn!(requested = page_size, "rejecting page request with wrong page size");
            return Err(Error::PageSizeMismatch {
                requested: page_size,
                configured: self.config.page_size,
            });
        }

        match self.cache.get(page) {
            Some(items) => callback(PageData::Loaded(items.to_vec())),
            None => self.pending.register(page, callback),
        }

        // Plan from the scroll position, not only from what was asked for.
        let viewport = self.display.viewport();
        if self.planner.plan(page, viewport, self.size) {
            self.scheduler.request_tick();
        }
        Ok(())
    }

    /// Dispatch the deferred range fetches, in the order their windows were
    /// detected. The host calls this on the turn after `request_tick`.
    pub fn tick(&mut self) {
        while let Some(window) = self.planner.take_queued() {
            let start = window.first * self.config.page_size;
            let length = window.page_count() * self.config.page_size;
            tracing::debug!(start, length, "issuing range fetch");
            self.transport.set_requested_range(start, length);
        }
    }

    // ==================== Selection ====================

    /// Select an item, per the current mode. User-originated selects mark
    /// the cached copy and notify the transport.
    pub fn select(&mut self, item: Item, user_originated: bool) {
        let key = item.key.clone();
        self.selection
            .select(item, user_originated, &mut self.display, &mut self.transport);
        if user_originated && self.selection.is_selected(&key) {
            self.cache.set_selected(&key, true);
        }
    }

    /// Deselect an item, per the current mode
    pub fn deselect(&mut self, item: Item, user_originated: bool) {
        let key = item.key.clone();
        let applied = self.selection.mode() != SelectionMode::None;
        self.selection
            .deselect(item, user_originated, &mut self.display, &mut self.transport);
        if user_originated && applied {
            self.cache.set_selected(&key, false);
        }
    }

    /// The display's active pointer moved. In SINGLE mode a non-empty new
    /// active item toggles its selection, user-originated.
    pub fn active_item_changed(&mut self, item: Option<Item>) {
        let Some(item) = item else {
            return;
        };
        if self.selection.mode() != SelectionMode::Single {
            return;
        }
        if self.selection.is_selected(&item.key) {
            self.deselect(item, true);
        } else {
            self.select(item, true);
        }
    }

    /// Switch the selection mode; never retroactive
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.selection.set_mode(mode);
    }

    // ==================== Accessors ====================

    /// Configured page size
    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// Declared dataset size
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selection.is_selected(key)
    }

    /// Snapshots of the selected items, in selection order
    pub fn selected_items(&self) -> Vec<Item> {
        self.selection.selected_items().cloned().collect()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
