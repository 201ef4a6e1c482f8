//! # App View Model
//!
//! Composes the login gate, the listing and the cursor selection. Commands
//! delegate here; every mutation publishes the listing's model events on the
//! event bus and queues a view event telling the controller what to redraw.

use crate::dex::events::{
    EventBus, ItemId, ModelEvent, RequestTag, Screen, ViewEvent,
};
use crate::dex::models::{DetailPayload, Reference, SessionModel};
use crate::dex::services::{CollectionRequest, DetailRequest, FetchError};
use crate::dex::view_models::item_detail::ItemDetail;
use crate::dex::view_models::listing::{ListingViewModel, LoadState};

/// Optional sink for published model events
type EventBusOption = Option<Box<dyn EventBus>>;

pub struct AppViewModel {
    session: SessionModel,
    login_input: String,
    listing: ListingViewModel,
    /// Index into the visible rows
    selected: usize,
    status_message: Option<String>,
    terminal_size: (u16, u16),
    event_bus: EventBusOption,
    pending_view_events: Vec<ViewEvent>,
}

impl AppViewModel {
    pub fn new(page_size: usize, page_increment: usize) -> Self {
        Self {
            session: SessionModel::new(),
            login_input: String::new(),
            listing: ListingViewModel::new(page_size, page_increment),
            selected: 0,
            status_message: None,
            terminal_size: (80, 24),
            event_bus: None,
            pending_view_events: Vec::new(),
        }
    }

    /// Publish model events to `event_bus` from now on
    pub fn set_event_bus(&mut self, event_bus: Box<dyn EventBus>) {
        self.event_bus = Some(event_bus);
    }

    pub fn screen(&self) -> Screen {
        if self.session.is_logged_in() {
            Screen::Listing
        } else {
            Screen::Login
        }
    }

    // =================================================================
    // Login gate
    // =================================================================

    pub fn login_input(&self) -> &str {
        &self.login_input
    }

    pub fn append_login_char(&mut self, ch: char) {
        self.login_input.push(ch);
        self.emit_view_event(ViewEvent::ContentRedrawRequired);
    }

    pub fn backspace_login(&mut self) {
        if self.login_input.pop().is_some() {
            self.emit_view_event(ViewEvent::ContentRedrawRequired);
        }
    }

    /// Log in with the typed name
    ///
    /// Returns the first collection fetch when this opens the gate and
    /// nothing was loaded before.
    pub fn submit_login(&mut self) -> Option<CollectionRequest> {
        let name = std::mem::take(&mut self.login_input);
        let request = self.login_as(&name);
        if !self.session.is_logged_in() {
            self.set_status_message("Enter a name to continue");
        }
        request
    }

    /// Log in directly, e.g. from the command line
    pub fn login_as(&mut self, name: &str) -> Option<CollectionRequest> {
        if !self.session.login(name) {
            return None;
        }

        let user = self.session.current_user().unwrap_or_default().to_string();
        tracing::info!("User '{user}' logged in");
        self.publish_model_event(ModelEvent::LoggedIn { user });
        self.status_message = None;
        self.emit_view_event(ViewEvent::FullRedrawRequired);

        if *self.listing.load_state() == LoadState::Idle {
            let request = self.listing.initialize();
            self.flush_listing_events();
            Some(request)
        } else {
            None
        }
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.login_input.clear();
        tracing::info!("Logged out");
        self.publish_model_event(ModelEvent::LoggedOut);
        self.emit_view_event(ViewEvent::FullRedrawRequired);
    }

    pub fn session(&self) -> &SessionModel {
        &self.session
    }

    // =================================================================
    // Listing operations
    // =================================================================

    pub fn listing(&self) -> &ListingViewModel {
        &self.listing
    }

    pub fn set_filter(&mut self, text: &str) {
        self.listing.set_filter(text);
        self.selected = 0;
        self.flush_listing_events();
    }

    pub fn append_filter_char(&mut self, ch: char) {
        let mut filter = self.listing.filter().to_string();
        filter.push(ch);
        self.set_filter(&filter);
    }

    pub fn backspace_filter(&mut self) {
        let mut filter = self.listing.filter().to_string();
        if filter.pop().is_some() {
            self.set_filter(&filter);
        }
    }

    pub fn clear_filter(&mut self) {
        if !self.listing.filter().is_empty() {
            self.set_filter("");
        }
    }

    pub fn toggle_favorite(&mut self, name: &str) -> bool {
        let is_favorite = self.listing.toggle_favorite(name);
        let verb = if is_favorite { "Added" } else { "Removed" };
        let preposition = if is_favorite { "to" } else { "from" };
        self.set_status_message(format!("{verb} {name} {preposition} favorites"));
        self.clamp_selection();
        self.flush_listing_events();
        is_favorite
    }

    /// Toggle the favorite flag of the selected row
    pub fn toggle_selected_favorite(&mut self) -> Option<bool> {
        let name = self.selected_item()?.name().to_string();
        Some(self.toggle_favorite(&name))
    }

    pub fn toggle_favorites_only(&mut self) -> bool {
        let enabled = self.listing.toggle_favorites_only();
        if !enabled && self.listing.favorites().is_empty() {
            self.set_status_message("No favorites yet");
        }
        self.selected = 0;
        self.flush_listing_events();
        enabled
    }

    pub fn request_more(&mut self) -> CollectionRequest {
        let request = self.listing.request_more();
        self.flush_listing_events();
        request
    }

    pub fn retry(&mut self) -> Option<CollectionRequest> {
        let request = self.listing.retry();
        self.flush_listing_events();
        request
    }

    pub fn apply_collection(
        &mut self,
        tag: RequestTag,
        result: Result<Vec<Reference>, FetchError>,
    ) -> Vec<DetailRequest> {
        let details = self.listing.apply_collection(tag, result);
        self.clamp_selection();
        self.flush_listing_events();
        details
    }

    pub fn apply_detail(&mut self, item_id: ItemId, result: Result<DetailPayload, FetchError>) {
        if self.listing.apply_detail(item_id, result) {
            self.flush_listing_events();
        }
    }

    // =================================================================
    // Selection
    // =================================================================

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&ItemDetail> {
        self.listing.visible_items().get(self.selected).copied()
    }

    /// Move the selection by `delta` rows, clamped to the visible rows
    pub fn move_selection(&mut self, delta: isize) {
        let old = self.selected;
        self.selected = self.selected.saturating_add_signed(delta);
        self.clamp_selection();
        if self.selected != old {
            self.emit_view_event(ViewEvent::ContentRedrawRequired);
        }
    }

    fn clamp_selection(&mut self) {
        let visible = self.listing.visible_items().len();
        self.selected = self.selected.min(visible.saturating_sub(1));
    }

    // =================================================================
    // Display state
    // =================================================================

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message<S: Into<String>>(&mut self, message: S) {
        self.status_message = Some(message.into());
        self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.emit_view_event(ViewEvent::FullRedrawRequired);
    }

    /// Take the repaints queued since the last frame
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }

    fn emit_view_event(&mut self, event: ViewEvent) {
        self.pending_view_events.push(event);
    }

    fn publish_model_event(&mut self, event: ModelEvent) {
        tracing::debug!("Model event: {:?}", event);
        if let Some(bus) = self.event_bus.as_mut() {
            bus.publish_model_event(event);
        }
    }

    /// Publish whatever the listing queued and schedule a content redraw
    fn flush_listing_events(&mut self) {
        let events = self.listing.take_events();
        if events.is_empty() {
            return;
        }
        for event in events {
            self.publish_model_event(event);
        }
        self.emit_view_event(ViewEvent::ContentRedrawRequired);
    }
}

impl Default for AppViewModel {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_PAGE_SIZE,
            crate::config::PAGE_SIZE_INCREMENT,
        )
    }
}

impl std::fmt::Debug for AppViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppViewModel")
            .field("screen", &self.screen())
            .field("listing", &self.listing)
            .field("selected", &self.selected)
            .field("status_message", &self.status_message)
            .finish_non_exhaustive()
    }
}
