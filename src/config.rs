//! Connector configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::selection::SelectionMode;

fn default_buffer_pages() -> usize {
    2
}

/// Configuration for a connector instance
///
/// `page_size` is fixed for the lifetime of the connector; the selection
/// mode may be changed at runtime through the connector.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Number of items per page
    pub page_size: usize,
    /// Extra pages fetched on each side of the needed window
    #[serde(default = "default_buffer_pages")]
    pub buffer_pages: usize,
    /// Initial selection mode
    #[serde(default)]
    pub selection_mode: SelectionMode,
}

impl ConnectorConfig {
    /// Create a configuration with the given page size and default buffering
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            buffer_pages: default_buffer_pages(),
            selection_mode: SelectionMode::default(),
        }
    }

    /// Set the buffer page count
    pub fn with_buffer_pages(mut self, buffer_pages: usize) -> Self {
        self.buffer_pages = buffer_pages;
        self
    }

    /// Set the initial selection mode
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidConfig {
                message: "page_size must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self::new(50)
    }
}
