//! Selection state machine
//!
//! Owns the selection mode and the selected-key set. Membership in the set,
//! not any single item's `selected` flag, is the source of truth for "is
//! this key selected". User-originated operations notify the remote
//! transport; programmatic ones (replayed from source data) do not.

use std::fmt;
use std::str::FromStr;

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

use crate::domain::Item;
use crate::error::Error;
use crate::ports::{DisplayPort, TransportPort};

/// Selection policy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// At most one selected item; selecting replaces the previous one
    #[default]
    #[serde(rename = "SINGLE")]
    Single,
    /// Selection operations are no-ops
    #[serde(rename = "NONE")]
    None,
    /// Additive selection
    #[serde(rename = "MULTI")]
    Multi,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Single => "SINGLE",
            SelectionMode::None => "NONE",
            SelectionMode::Multi => "MULTI",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "SINGLE" => Ok(SelectionMode::Single),
            "NONE" => Ok(SelectionMode::None),
            "MULTI" => Ok(SelectionMode::Multi),
            other => Err(Error::InvalidSelectionMode {
                value: other.to_string(),
            }),
        }
    }
}

/// Selection mode plus the current selected-key set
///
/// The set keeps insertion order so bulk sweeps are deterministic. Display
/// and transport ports are passed into each operation; the machine holds no
/// port handles of its own.
pub struct SelectionStateMachine {
    mode: SelectionMode,
    selected: LinkedHashMap<String, Item>,
}

impl SelectionStateMachine {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: LinkedHashMap::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Switch the mode. Not retroactive: switching to NONE keeps the
    /// selections already held and only suppresses future operations.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        tracing::debug!(mode = %mode, "selection mode changed");
        self.mode = mode;
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains_key(key)
    }

    /// Snapshots of the currently selected items, in selection order
    pub fn selected_items(&self) -> impl Iterator<Item = &Item> {
        self.selected.values()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Select an item.
    ///
    /// NONE mode: no-op. SINGLE mode: bulk-clears the existing selection
    /// first, with a single display reset and no per-item deselect events.
    /// When user-originated, the item's flag is set and the transport is
    /// notified; the display always receives a select notification.
    pub fn select(
        &mut self,
        mut item: Item,
        user_originated: bool,
        display: &mut dyn DisplayPort,
        transport: &mut dyn TransportPort,
    ) {
        if self.mode == SelectionMode::None {
            return;
        }
        if self.mode == SelectionMode::Single {
            self.selected.clear();
            display.reset_selection();
        }
        if user_originated {
            item.selected = true;
            transport.select(&item.key);
        }
        self.selected.insert(item.key.clone(), item.clone());
        display.item_selected(&item, user_originated);
    }

    /// Deselect an item. No-op in NONE mode. When user-originated, the
    /// item's flag is cleared and the transport is notified; the display
    /// always receives a deselect notification.
    pub fn deselect(
        &mut self,
        mut item: Item,
        user_originated: bool,
        display: &mut dyn DisplayPort,
        transport: &mut dyn TransportPort,
    ) {
        if self.mode == SelectionMode::None {
            return;
        }
        self.selected.remove(&item.key);
        if user_originated {
            item.selected = false;
            transport.deselect(&item.key);
        }
        display.item_deselected(&item, user_originated);
    }

    /// Align the selected-key set with a delivered item's flag.
    ///
    /// The flag reflects what the source believes; replaying it is
    /// programmatic, so there is no transport notification and no flag
    /// mutation. An item that already agrees with the set is left alone,
    /// which is what makes re-delivery idempotent.
    pub fn reconcile(
        &mut self,
        item: &Item,
        display: &mut dyn DisplayPort,
        transport: &mut dyn TransportPort,
    ) {
        if item.selected && !self.is_selected(&item.key) {
            self.select(item.clone(), false, display, transport);
        } else if !item.selected && self.is_selected(&item.key) {
            self.deselect(item.clone(), false, display, transport);
        }
    }
}

impl fmt::Debug for SelectionStateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStateMachine")
            .field("mode", &self.mode)
            .field("selected", &self.selected.keys().collect::<Vec<_>>())
            .finish()
    }
}
