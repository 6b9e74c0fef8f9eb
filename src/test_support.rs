//! Recording fakes for the port traits, shared by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{Item, PageData, Viewport};
use crate::pending::PageCallback;
use crate::ports::{DisplayPort, TickScheduler, TransportPort};

#[derive(Clone, Debug, PartialEq)]
pub enum DisplayCall {
    UpdateItems { page: usize, data: PageData },
    Selected { key: String, user_originated: bool },
    Deselected { key: String, user_originated: bool },
    ResetSelection,
}

/// DisplayPort fake that records every call and reports a fixed viewport
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub viewport: Viewport,
    pub calls: Vec<DisplayCall>,
}

impl RecordingDisplay {
    pub fn with_viewport(start: usize, end: usize) -> Self {
        Self {
            viewport: Viewport::new(start, end),
            calls: Vec::new(),
        }
    }

    /// The page updates received, in order
    pub fn page_updates(&self) -> Vec<(usize, PageData)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DisplayCall::UpdateItems { page, data } => Some((*page, data.clone())),
                _ => None,
            })
            .collect()
    }
}

impl DisplayPort for RecordingDisplay {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn update_items(&mut self, page: usize, data: PageData) {
        self.calls.push(DisplayCall::UpdateItems { page, data });
    }

    fn item_selected(&mut self, item: &Item, user_originated: bool) {
        self.calls.push(DisplayCall::Selected {
            key: item.key.clone(),
            user_originated,
        });
    }

    fn item_deselected(&mut self, item: &Item, user_originated: bool) {
        self.calls.push(DisplayCall::Deselected {
            key: item.key.clone(),
            user_originated,
        });
    }

    fn reset_selection(&mut self) {
        self.calls.push(DisplayCall::ResetSelection);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TransportCall {
    SetRequestedRange { start: usize, length: usize },
    Select(String),
    Deselect(String),
    ConfirmUpdate(u64),
}

/// TransportPort fake that records every outbound call
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub calls: Vec<TransportCall>,
}

impl TransportPort for RecordingTransport {
    fn set_requested_range(&mut self, start: usize, length: usize) {
        self.calls.push(TransportCall::SetRequestedRange { start, length });
    }

    fn select(&mut self, key: &str) {
        self.calls.push(TransportCall::Select(key.to_string()));
    }

    fn deselect(&mut self, key: &str) {
        self.calls.push(TransportCall::Deselect(key.to_string()));
    }

    fn confirm_update(&mut self, batch_id: u64) {
        self.calls.push(TransportCall::ConfirmUpdate(batch_id));
    }
}

/// Scheduler fake that only counts tick requests; tests drive
/// `Connector::tick` by hand.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pub tick_requests: usize,
}

impl TickScheduler for ManualScheduler {
    fn request_tick(&mut self) {
        self.tick_requests += 1;
    }
}

/// An unselected item with the given key
pub fn item(key: &str) -> Item {
    Item::new(key)
}

/// A selected item with the given key
pub fn selected_item(key: &str) -> Item {
    Item::new(key).with_selected(true)
}

/// `count` unselected items keyed `prefix0..prefixN`
pub fn items(prefix: &str, count: usize) -> Vec<Item> {
    (0..count).map(|i| Item::new(format!("{prefix}{i}"))).collect()
}

/// A callback that stores its delivery into the returned slot
pub fn capturing_callback() -> (PageCallback, Rc<RefCell<Vec<PageData>>>) {
    let deliveries = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&deliveries);
    let callback = Box::new(move |data: PageData| sink.borrow_mut().push(data));
    (callback, deliveries)
}
