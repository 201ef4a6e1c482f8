//! # Screen Layout
//!
//! Pure state-to-lines rendering. `render_screen` turns the view model into
//! exactly `height` lines, none wider than `width` characters, so layout can
//! be checked in tests without a terminal.
//!
//! ```text
//! row 0        title / signed-in user
//! row 1        filter input, favorites control
//! row 2        separator
//! rows 3..h-1  list area
//! row h-1      status bar
//! ```

use crate::dex::events::Screen;
use crate::dex::view_models::{AppViewModel, DetailState, ItemDetail, LoadState};

const TITLE: &str = "pokeline";
const FILTER_PROMPT: &str = "Filter: ";
const LOGIN_PROMPT: &str = "Name: ";
const LOGIN_PROMPT_ROW: usize = 4;
const FILTER_ROW: usize = 1;
const LIST_TOP: usize = 3;
const NAME_COLUMN_WIDTH: usize = 16;

pub const LOADING_PLACEHOLDER: &str = "Loading...";
pub const LOADING_SPRITE: &str = "loading sprite";
pub const SPRITE_UNAVAILABLE: &str = "sprite unavailable";
pub const NO_SPRITE: &str = "no sprite";
pub const RETRY_HINT: &str = "Ctrl+R to retry";

/// Render the whole screen as `height` lines
pub fn render_screen(view_model: &AppViewModel, width: u16, height: u16) -> Vec<String> {
    let mut lines = vec![String::new(); usize::from(height)];
    match view_model.screen() {
        Screen::Login => layout_login(view_model, &mut lines),
        Screen::Listing => layout_listing(view_model, &mut lines, width),
    }
    if let Some(last) = lines.last_mut() {
        *last = status_bar(view_model, width);
    }
    lines
        .into_iter()
        .map(|line| truncate(&line, usize::from(width)))
        .collect()
}

/// Only the status bar row
pub fn render_status_bar(view_model: &AppViewModel, width: u16) -> String {
    truncate(&status_bar(view_model, width), usize::from(width))
}

/// Screen row of the selected list entry, when one is on screen
pub fn selected_row(view_model: &AppViewModel, height: u16) -> Option<u16> {
    if view_model.screen() != Screen::Listing {
        return None;
    }
    let visible = view_model.listing().visible_items().len();
    if visible == 0 {
        return None;
    }
    let offset = scroll_offset(view_model.selected_index(), list_height(height));
    let row = LIST_TOP + view_model.selected_index() - offset;
    (row + 1 < usize::from(height)).then(|| row as u16)
}

/// Where the text cursor sits for the active input field
pub fn input_cursor(view_model: &AppViewModel, width: u16, height: u16) -> Option<(u16, u16)> {
    let (row, column) = match view_model.screen() {
        Screen::Login => (
            LOGIN_PROMPT_ROW,
            LOGIN_PROMPT.len() + view_model.login_input().chars().count(),
        ),
        Screen::Listing => (
            FILTER_ROW,
            FILTER_PROMPT.len() + view_model.listing().filter().chars().count(),
        ),
    };
    if row + 1 >= usize::from(height) {
        return None;
    }
    let column = column.min(usize::from(width).saturating_sub(1));
    Some((column as u16, row as u16))
}

/// Text shown for an item's sprite column
pub fn sprite_text(item: &ItemDetail) -> &str {
    match item.state() {
        DetailState::Pending => LOADING_SPRITE,
        DetailState::Failed(_) => SPRITE_UNAVAILABLE,
        DetailState::Resolved(payload) => payload.image_url.as_deref().unwrap_or(NO_SPRITE),
    }
}

fn layout_login(view_model: &AppViewModel, lines: &mut [String]) {
    put(lines, 0, TITLE.to_string());
    put(lines, 2, "Sign in to browse the Pokedex".to_string());
    put(
        lines,
        LOGIN_PROMPT_ROW,
        format!("{LOGIN_PROMPT}{}", view_model.login_input()),
    );
    put(lines, 6, "Enter to continue, Ctrl+C to quit".to_string());
}

fn layout_listing(view_model: &AppViewModel, lines: &mut [String], width: u16) {
    let listing = view_model.listing();

    let title = match view_model.session().current_user() {
        Some(user) => format!("{TITLE}  signed in as {user}  (Ctrl+L to sign out)"),
        None => TITLE.to_string(),
    };
    put(lines, 0, title);

    let mut filter_line = format!("{FILTER_PROMPT}{}", listing.filter());
    if !listing.favorites().is_empty() {
        let mode = if listing.favorites_only() { "on" } else { "off" };
        filter_line.push_str(&format!(
            "    [Tab] favorites only: {mode} ({})",
            listing.favorites().len()
        ));
    }
    put(lines, FILTER_ROW, filter_line);
    put(lines, 2, "-".repeat(usize::from(width)));

    let height = lines.len();
    let rows = list_height(height as u16);

    if !listing.has_loaded_once() {
        let placeholder = match listing.load_state() {
            LoadState::Failed { .. } => "Could not load the list",
            _ => LOADING_PLACEHOLDER,
        };
        put(lines, LIST_TOP, placeholder.to_string());
        return;
    }

    let visible = listing.visible_items();
    if visible.is_empty() {
        let empty = if listing.favorites_only() {
            "No favorites match the filter"
        } else {
            "No matches"
        };
        put(lines, LIST_TOP, empty.to_string());
        return;
    }

    let offset = scroll_offset(view_model.selected_index(), rows);
    for (index, item) in visible.iter().enumerate().skip(offset).take(rows) {
        let row = LIST_TOP + index - offset;
        let is_favorite = listing.is_favorite(item.name());
        put(
            lines,
            row,
            list_row(item, is_favorite, index == view_model.selected_index()),
        );
    }
}

fn list_row(item: &ItemDetail, is_favorite: bool, selected: bool) -> String {
    let cursor = if selected { '>' } else { ' ' };
    let star = if is_favorite { '*' } else { ' ' };
    format!(
        "{cursor}{star} {name:<width$} [{label}] {sprite}",
        name = item.name(),
        width = NAME_COLUMN_WIDTH,
        label = ItemDetail::favorite_label(is_favorite),
        sprite = sprite_text(item),
    )
}

fn status_bar(view_model: &AppViewModel, width: u16) -> String {
    let mut left = String::new();
    if let Some(message) = view_model.status_message() {
        left.push_str(message);
    }

    if view_model.screen() == Screen::Login {
        return left;
    }

    let listing = view_model.listing();
    let state = match listing.load_state() {
        LoadState::Idle => String::new(),
        LoadState::Loading { request } => format!("Loading {} entries...", request.size),
        LoadState::Loaded => String::new(),
        LoadState::Failed { message, .. } => format!("Load failed: {message} ({RETRY_HINT})"),
    };
    if !state.is_empty() {
        if !left.is_empty() {
            left.push_str(" | ");
        }
        left.push_str(&state);
    }

    let right = format!(
        "{}/{} shown | page size {}",
        listing.visible_items().len(),
        listing.references().len(),
        listing.page_size()
    );

    let width = usize::from(width);
    let used = left.chars().count() + right.chars().count();
    if used + 1 > width {
        return format!("{left} {right}");
    }
    format!("{left}{}{right}", " ".repeat(width - used))
}

fn list_height(height: u16) -> usize {
    usize::from(height).saturating_sub(LIST_TOP + 1)
}

/// First visible index so that `selected` stays on screen
fn scroll_offset(selected: usize, rows: usize) -> usize {
    if rows == 0 {
        return selected;
    }
    selected.saturating_sub(rows - 1)
}

/// Write `text` into `row`, leaving the status row alone
fn put(lines: &mut [String], row: usize, text: String) {
    if row + 1 < lines.len() {
        lines[row] = text;
    }
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
