//! Item - one record of the remote dataset
//!
//! Identity is by `key`, never by position or reference. The payload is
//! opaque to the connector and carried as flattened JSON fields.

use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// A single dataset record as delivered by the remote source.
///
/// The `selected` flag is present on the wire only when true; it reflects the
/// source's view at delivery time and may be stale between batches. The
/// selected-key set, not this flag, is the source of truth for membership.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable unique identity across fetches
    pub key: String,
    /// Selection flag, omitted when false
    #[serde(default, skip_serializing_if = "is_false")]
    pub selected: bool,
    /// Arbitrary payload fields, passed through untouched
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Item {
    /// Create an item with no payload
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            selected: false,
            data: serde_json::Map::new(),
        }
    }

    /// Set the selection flag
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Add a payload field
    pub fn with_field(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(name.into(), value);
        self
    }
}

/// One per-page delivery to the display: loaded data or empty slots.
#[derive(Clone, Debug, PartialEq)]
pub enum PageData {
    /// A loaded page slice (may be shorter than the page size at the
    /// dataset tail)
    Loaded(Vec<Item>),
    /// A placeholder of that many empty slots, used when no data exists or
    /// is yet available for the page
    Placeholder(usize),
}

impl PageData {
    /// Number of slots carried by this delivery
    pub fn len(&self) -> usize {
        match self {
            PageData::Loaded(items) => items.len(),
            PageData::Placeholder(slots) => *slots,
        }
    }

    /// Check if this delivery carries no slots at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if this is a placeholder delivery
    pub fn is_placeholder(&self) -> bool {
        matches!(self, PageData::Placeholder(_))
    }
}
