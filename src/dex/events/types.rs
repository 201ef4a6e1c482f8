//! # Core Event Types
//!
//! Identity types that travel between view models, fetch tasks and events.

/// Identity of one item instance
///
/// Fresh ids are minted each time a collection is applied, so results for
/// items that were torn down by a refresh can be recognised and dropped.
pub type ItemId = u64;

/// Tag attached to every collection fetch
///
/// `generation` increases with every refresh; only the latest generation is
/// accepted when a response arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTag {
    pub generation: u64,
    pub size: usize,
}

impl RequestTag {
    pub fn new(generation: u64, size: usize) -> Self {
        Self { generation, size }
    }
}

/// Which screen the gate currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Listing,
}
