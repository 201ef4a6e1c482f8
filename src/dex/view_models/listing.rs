//! # Listing View Model
//!
//! Owns the fetched collection, the filter, the favorite set and the
//! requested page size, and derives the filtered view from them.
//!
//! Network work is never performed here. Operations that need a fetch return
//! a request describing it; the controller dispatches it and later feeds the
//! outcome back through `apply_collection` / `apply_detail`. Every state
//! change queues a `ModelEvent`, drained with `take_events`.

use crate::dex::events::{ItemId, ModelEvent, RequestTag};
use crate::dex::models::{DetailPayload, FavoriteSet, Reference};
use crate::dex::services::{CollectionRequest, DetailRequest, FetchError};
use crate::dex::view_models::item_detail::ItemDetail;

/// Progress of the collection fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet
    Idle,
    /// Waiting for the response to `request`
    Loading { request: RequestTag },
    /// The latest request succeeded
    Loaded,
    /// The latest request failed; `retry` re-issues it
    Failed { request: RequestTag, message: String },
}

#[derive(Debug)]
pub struct ListingViewModel {
    references: Vec<Reference>,
    /// Indices into `references`, in collection order
    filtered: Vec<usize>,
    filter: String,
    favorites: FavoriteSet,
    favorites_only: bool,
    page_size: usize,
    page_increment: usize,
    load_state: LoadState,
    /// Parallel to `references`
    items: Vec<ItemDetail>,
    generation: u64,
    next_item_id: ItemId,
    pending_events: Vec<ModelEvent>,
}

impl ListingViewModel {
    pub fn new(page_size: usize, page_increment: usize) -> Self {
        Self {
            references: Vec::new(),
            filtered: Vec::new(),
            filter: String::new(),
            favorites: FavoriteSet::new(),
            favorites_only: false,
            page_size: page_size.max(1),
            page_increment: page_increment.max(1),
            load_state: LoadState::Idle,
            items: Vec::new(),
            generation: 0,
            next_item_id: 0,
            pending_events: Vec::new(),
        }
    }

    // =================================================================
    // Collection loading
    // =================================================================

    /// First fetch at the configured page size
    pub fn initialize(&mut self) -> CollectionRequest {
        self.refresh(self.page_size)
    }

    /// Issue a collection fetch for `size` entries
    ///
    /// Any response to an earlier request becomes stale from this point on.
    pub fn refresh(&mut self, size: usize) -> CollectionRequest {
        self.generation += 1;
        self.page_size = size.max(1);
        let tag = RequestTag::new(self.generation, self.page_size);
        self.load_state = LoadState::Loading { request: tag };
        tracing::debug!("Collection refresh issued: {:?}", tag);
        self.pending_events
            .push(ModelEvent::CollectionRequested { tag });
        CollectionRequest { tag }
    }

    /// Grow the page size by the fixed increment and re-fetch everything
    pub fn request_more(&mut self) -> CollectionRequest {
        let old_size = self.page_size;
        let new_size = old_size.saturating_add(self.page_increment);
        self.pending_events
            .push(ModelEvent::PageSizeIncreased { old_size, new_size });
        self.refresh(new_size)
    }

    /// Re-issue the failed request; no-op unless the last load failed
    pub fn retry(&mut self) -> Option<CollectionRequest> {
        match &self.load_state {
            LoadState::Failed { request, .. } => {
                let size = request.size;
                Some(self.refresh(size))
            }
            _ => None,
        }
    }

    /// Apply the outcome of a collection fetch
    ///
    /// Returns the detail fetches for the newly built items. Responses whose
    /// tag is not the one currently loading are dropped.
    pub fn apply_collection(
        &mut self,
        tag: RequestTag,
        result: Result<Vec<Reference>, FetchError>,
    ) -> Vec<DetailRequest> {
        if !self.is_awaiting(tag) {
            tracing::debug!("Discarding stale collection response {:?}", tag);
            self.pending_events
                .push(ModelEvent::StaleCollectionDiscarded { tag });
            return Vec::new();
        }

        match result {
            Ok(references) => {
                tracing::info!(
                    "Collection loaded: {} entries for size {}",
                    references.len(),
                    tag.size
                );
                self.replace_references(references);
                self.load_state = LoadState::Loaded;
                self.pending_events.push(ModelEvent::CollectionLoaded {
                    tag,
                    count: self.references.len(),
                });
                self.items.iter().map(ItemDetail::resolve).collect()
            }
            Err(e) => {
                tracing::warn!("Collection fetch {:?} failed: {e}", tag);
                let message = e.to_string();
                self.load_state = LoadState::Failed {
                    request: tag,
                    message: message.clone(),
                };
                self.pending_events
                    .push(ModelEvent::CollectionFailed { tag, message });
                Vec::new()
            }
        }
    }

    fn is_awaiting(&self, tag: RequestTag) -> bool {
        matches!(self.load_state, LoadState::Loading { request } if request == tag)
    }

    fn replace_references(&mut self, references: Vec<Reference>) {
        self.items = references
            .iter()
            .cloned()
            .map(|reference| {
                let id = self.next_item_id;
                self.next_item_id += 1;
                ItemDetail::new(id, reference)
            })
            .collect();
        self.references = references;
        self.rederive();
    }

    // =================================================================
    // Detail loading
    // =================================================================

    /// Apply the outcome of an item's detail fetch
    ///
    /// Results for items torn down by a refresh are dropped. Returns whether
    /// an item changed.
    pub fn apply_detail(
        &mut self,
        item_id: ItemId,
        result: Result<DetailPayload, FetchError>,
    ) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == item_id) else {
            tracing::debug!("Discarding detail for torn-down item {item_id}");
            return false;
        };

        let failure = result.as_ref().err().map(ToString::to_string);
        if !item.apply_detail(result) {
            return false;
        }

        let name = item.name().to_string();
        let event = match failure {
            None => ModelEvent::DetailResolved { item_id, name },
            Some(message) => ModelEvent::DetailFailed {
                item_id,
                name,
                message,
            },
        };
        self.pending_events.push(event);
        true
    }

    // =================================================================
    // Filtering and favorites
    // =================================================================

    /// Store the lower-cased filter and re-derive the filtered view
    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.to_lowercase();
        self.rederive();
        self.pending_events.push(ModelEvent::FilterChanged {
            filter: self.filter.clone(),
            matches: self.filtered.len(),
        });
    }

    fn rederive(&mut self) {
        let filter = &self.filter;
        self.filtered = self
            .references
            .iter()
            .enumerate()
            .filter(|(_, reference)| reference.matches_filter(filter))
            .map(|(index, _)| index)
            .collect();
    }

    /// Flip favorite membership of `name`; returns the new membership
    pub fn toggle_favorite(&mut self, name: &str) -> bool {
        let is_favorite = self.favorites.toggle(name);
        self.pending_events.push(ModelEvent::FavoriteToggled {
            name: name.to_string(),
            is_favorite,
        });

        if self.favorites.is_empty() && self.favorites_only {
            self.set_favorites_only(false);
        }
        is_favorite
    }

    /// Restrict the displayed rows to favorites
    ///
    /// Enabling is refused while there are no favorites. Returns the
    /// resulting flag.
    pub fn set_favorites_only(&mut self, enabled: bool) -> bool {
        let enabled = enabled && !self.favorites.is_empty();
        if enabled != self.favorites_only {
            self.favorites_only = enabled;
            self.pending_events
                .push(ModelEvent::FavoritesViewChanged { enabled });
        }
        self.favorites_only
    }

    pub fn toggle_favorites_only(&mut self) -> bool {
        self.set_favorites_only(!self.favorites_only)
    }

    // =================================================================
    // Accessors
    // =================================================================

    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// References matching the filter, in collection order
    pub fn filtered_view(&self) -> Vec<&Reference> {
        self.filtered
            .iter()
            .map(|&index| &self.references[index])
            .collect()
    }

    /// Items actually displayed: the filtered view, narrowed to favorites
    /// when the favorites-only view is on
    pub fn visible_items(&self) -> Vec<&ItemDetail> {
        self.filtered
            .iter()
            .map(|&index| &self.items[index])
            .filter(|item| !self.favorites_only || self.favorites.contains(item.name()))
            .collect()
    }

    pub fn items(&self) -> &[ItemDetail] {
        &self.items
    }

    pub fn item(&self, item_id: ItemId) -> Option<&ItemDetail> {
        self.items.iter().find(|item| item.id() == item_id)
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.contains(name)
    }

    pub fn favorites_only(&self) -> bool {
        self.favorites_only
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading { .. })
    }

    /// False until the first collection arrives
    pub fn has_loaded_once(&self) -> bool {
        !self.references.is_empty() || self.load_state == LoadState::Loaded
    }

    /// Drain queued model events
    pub fn take_events(&mut self) -> Vec<ModelEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

impl Default for ListingViewModel {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_PAGE_SIZE,
            crate::config::PAGE_SIZE_INCREMENT,
        )
    }
}
