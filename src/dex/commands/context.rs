//! # Command Context
//!
//! Read-only view of the state commands need to decide relevancy.

use crate::dex::events::Screen;
use crate::dex::view_models::{AppViewModel, LoadState};

/// Read-only snapshot of AppViewModel state for commands
#[derive(Debug, Clone)]
pub struct ViewModelSnapshot {
    pub screen: Screen,
    pub visible_rows: usize,
    pub load_failed: bool,
    pub filter_empty: bool,
}

impl ViewModelSnapshot {
    /// Create snapshot from current AppViewModel state
    pub fn from_view_model(view_model: &AppViewModel) -> Self {
        let listing = view_model.listing();
        Self {
            screen: view_model.screen(),
            visible_rows: listing.visible_items().len(),
            load_failed: matches!(listing.load_state(), LoadState::Failed { .. }),
            filter_empty: listing.filter().is_empty(),
        }
    }
}

/// What a command may look at when deciding whether a key applies
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub state: ViewModelSnapshot,
}

impl CommandContext {
    pub fn new(state: ViewModelSnapshot) -> Self {
        Self { state }
    }

    pub fn on_listing(&self) -> bool {
        self.state.screen == Screen::Listing
    }

    pub fn on_login(&self) -> bool {
        self.state.screen == Screen::Login
    }
}
