//! Port traits for the external collaborators
//!
//! The connector renders nothing and opens no connection; the display and
//! the remote transport sit behind these boundaries. `TickScheduler` is the
//! host's "run me on the next turn of the task queue" primitive, used only
//! to defer outbound range fetches.

use crate::domain::{Item, PageData, Viewport};

/// The virtualized display/viewport collaborator
pub trait DisplayPort {
    /// Current viewport bounds in item indices
    fn viewport(&self) -> Viewport;

    /// Replace or clear the rendered slice of a page
    fn update_items(&mut self, page: usize, data: PageData);

    /// An item entered the selection
    fn item_selected(&mut self, item: &Item, user_originated: bool);

    /// An item left the selection
    fn item_deselected(&mut self, item: &Item, user_originated: bool);

    /// Bulk selection reset (SINGLE-mode replacement; no per-item events)
    fn reset_selection(&mut self);
}

/// The remote transport collaborator
pub trait TransportPort {
    /// Request a row range `[start, start + length)`
    fn set_requested_range(&mut self, start: usize, length: usize);

    /// A key was selected by direct user interaction
    fn select(&mut self, key: &str);

    /// A key was deselected by direct user interaction
    fn deselect(&mut self, key: &str);

    /// A delivered batch has been fully reconciled
    fn confirm_update(&mut self, batch_id: u64);
}

/// Deferred-execution hook provided by the host
///
/// After a call to `request_tick`, the host must invoke `Connector::tick`
/// on the next turn of its task queue.
pub trait TickScheduler {
    fn request_tick(&mut self);
}
