//! Error types for grid-connector
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! Everything here is a protocol or contract violation: fatal for the
//! triggering call, never retried internally.

use snafu::Snafu;

/// Main error type for the connector
#[derive(Debug, Snafu)]
pub enum Error {
    /// Inbound data or invalidation index not aligned to the page size
    #[snafu(display(
        "Got data for index {index} which is not aligned with the page size of {page_size}"
    ))]
    MisalignedIndex { index: usize, page_size: usize },

    /// Display asked for a page size other than the configured one
    #[snafu(display(
        "Requested page size {requested} does not match the configured page size {configured}"
    ))]
    PageSizeMismatch { requested: usize, configured: usize },

    /// Selection mode value outside SINGLE | NONE | MULTI
    #[snafu(display("Attempted to set an invalid selection mode: {value}"))]
    InvalidSelectionMode { value: String },

    /// Invalid configuration at construction time
    #[snafu(display("Invalid configuration: {message}"))]
    InvalidConfig { message: String },
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
