//! # Model Events
//!
//! Events emitted when listing or session state changes.
//! Subscribers on the event bus see every transition in order.

use super::types::{ItemId, RequestTag};

/// Transitions of the session, the collection and its items
#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    /// A user passed the login gate
    LoggedIn { user: String },

    /// The session was cleared
    LoggedOut,

    /// A collection fetch was issued
    CollectionRequested { tag: RequestTag },

    /// The latest collection fetch succeeded
    CollectionLoaded { tag: RequestTag, count: usize },

    /// The latest collection fetch failed
    CollectionFailed { tag: RequestTag, message: String },

    /// A response for a superseded fetch arrived and was dropped
    StaleCollectionDiscarded { tag: RequestTag },

    /// Filter text changed and the filtered view was re-derived
    FilterChanged { filter: String, matches: usize },

    /// Favorite membership flipped
    FavoriteToggled { name: String, is_favorite: bool },

    /// Favorites-only view switched on or off
    FavoritesViewChanged { enabled: bool },

    /// Requested page size grew
    PageSizeIncreased { old_size: usize, new_size: usize },

    /// Detail payload for an item arrived
    DetailResolved { item_id: ItemId, name: String },

    /// Detail fetch for an item failed
    DetailFailed {
        item_id: ItemId,
        name: String,
        message: String,
    },
}
