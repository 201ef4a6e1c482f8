//! # Item Detail
//!
//! One instance per listed reference. Each item resolves its own detail
//! payload; nothing else writes its state, so items never race each other.

use crate::dex::events::ItemId;
use crate::dex::models::{DetailPayload, Reference};
use crate::dex::services::{DetailRequest, FetchError};

/// Progress of an item's detail fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Pending,
    Resolved(DetailPayload),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ItemDetail {
    id: ItemId,
    reference: Reference,
    state: DetailState,
}

impl ItemDetail {
    pub fn new(id: ItemId, reference: Reference) -> Self {
        Self {
            id,
            reference,
            state: DetailState::Pending,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    pub fn name(&self) -> &str {
        &self.reference.name
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// The fetch that resolves this item
    pub fn resolve(&self) -> DetailRequest {
        DetailRequest {
            item_id: self.id,
            url: self.reference.detail_url.clone(),
        }
    }

    /// Record the outcome of this item's fetch
    ///
    /// Returns false if the item already settled; the first outcome wins.
    pub fn apply_detail(&mut self, result: Result<DetailPayload, FetchError>) -> bool {
        if self.state != DetailState::Pending {
            return false;
        }

        self.state = match result {
            Ok(payload) => DetailState::Resolved(payload),
            Err(e) => {
                tracing::warn!("Detail fetch for '{}' failed: {e}", self.reference.name);
                DetailState::Failed(e.to_string())
            }
        };
        true
    }

    /// Sprite URL, once resolved
    pub fn image_url(&self) -> Option<&str> {
        match &self.state {
            DetailState::Resolved(payload) => payload.image_url.as_deref(),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == DetailState::Pending
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, DetailState::Failed(_))
    }

    /// Label for the favorite toggle given the parent-held membership
    pub fn favorite_label(is_favorite: bool) -> &'static str {
        if is_favorite {
            "Unfavorite"
        } else {
            "Favorite"
        }
    }
}
