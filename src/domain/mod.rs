//! Domain - core data records shared across the connector

pub mod item;
pub mod range;

pub use item::{Item, PageData};
pub use range::{PageRange, Viewport};
