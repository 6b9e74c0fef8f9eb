//! Grid Connector Library
//!
//! This crate provides the data-pagination and selection bridge between a
//! virtualized list/grid display and a remote, page-oriented data source:
//! a lazy paging cache with request coalescing, plus a selection state
//! machine kept consistent across batch deliveries and invalidations. It
//! renders nothing and opens no connection; the display and the transport
//! sit behind the [`ports`] traits.

pub mod cache;
pub mod config;
pub mod connector;
pub mod domain;
pub mod error;
pub mod pending;
pub mod planner;
pub mod ports;
pub mod selection;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ConnectorConfig;
pub use connector::Connector;
pub use domain::{Item, PageData, PageRange, Viewport};
pub use error::{Error, Result};
pub use pending::PageCallback;
pub use ports::{DisplayPort, TickScheduler, TransportPort};
pub use selection::{SelectionMode, SelectionStateMachine};
