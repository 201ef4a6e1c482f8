//! # View Models
//!
//! Business logic of the listing, independent of any rendering layer:
//!
//! - `ListingViewModel`: collection, filter, favorites and page size
//! - `ItemDetail`: per-entry detail fetch state
//! - `AppViewModel`: login gate, selection and event publication

pub mod app;
pub mod item_detail;
pub mod listing;

pub use app::AppViewModel;
pub use item_detail::{DetailState, ItemDetail};
pub use listing::{ListingViewModel, LoadState};
