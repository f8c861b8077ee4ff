//! In-memory state behind each screen. Rendering is left to the caller.

pub mod catalog;
pub mod detail;

pub use catalog::{CatalogScreen, FetchTicket, LoadState};
pub use detail::ProductScreen;
