//! # Listing Commands
//!
//! Filter typing, row navigation, favorites and pagination.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{is_ctrl, typed_char, Command, CommandContext, CommandEvent};

/// Type a character into the filter
pub struct FilterInputCommand;

impl Command for FilterInputCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.on_listing() && typed_char(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(typed_char(&event)
            .map(|ch| CommandEvent::FilterInputRequested { ch })
            .into_iter()
            .collect())
    }

    fn name(&self) -> &'static str {
        "FilterInput"
    }
}

/// Delete the last filter character (Backspace)
pub struct FilterBackspaceCommand;

impl Command for FilterBackspaceCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.on_listing() && event.code == KeyCode::Backspace && !context.state.filter_empty
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FilterBackspaceRequested])
    }

    fn name(&self) -> &'static str {
        "FilterBackspace"
    }
}

/// Clear the filter (Esc)
pub struct ClearFilterCommand;

impl Command for ClearFilterCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.on_listing() && event.code == KeyCode::Esc && !context.state.filter_empty
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FilterClearRequested])
    }

    fn name(&self) -> &'static str {
        "ClearFilter"
    }
}

/// Move the selection (Up/Down)
pub struct MoveSelectionCommand;

impl Command for MoveSelectionCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.on_listing()
            && context.state.visible_rows > 0
            && matches!(event.code, KeyCode::Up | KeyCode::Down)
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let delta = if event.code == KeyCode::Up { -1 } else { 1 };
        Ok(vec![CommandEvent::SelectionMoveRequested { delta }])
    }

    fn name(&self) -> &'static str {
        "MoveSelection"
    }
}

/// Favorite/unfavorite the selected row (Enter)
pub struct ToggleFavoriteCommand;

impl Command for ToggleFavoriteCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.on_listing() && context.state.visible_rows > 0 && event.code == KeyCode::Enter
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FavoriteToggleRequested])
    }

    fn name(&self) -> &'static str {
        "ToggleFavorite"
    }
}

/// Switch the favorites-only view (Tab)
pub struct ToggleFavoritesViewCommand;

impl Command for ToggleFavoritesViewCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.on_listing() && event.code == KeyCode::Tab
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FavoritesViewToggleRequested])
    }

    fn name(&self) -> &'static str {
        "ToggleFavoritesView"
    }
}

/// Load more entries (Ctrl+N or PageDown)
pub struct ShowMoreCommand;

impl Command for ShowMoreCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.on_listing()
            && (is_ctrl(event, 'n')
                || (event.code == KeyCode::PageDown && event.modifiers == KeyModifiers::NONE))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::MoreRequested])
    }

    fn name(&self) -> &'static str {
        "ShowMore"
    }
}

/// Retry a failed load (Ctrl+R)
pub struct RetryCommand;

impl Command for RetryCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.on_listing() && context.state.load_failed && is_ctrl(event, 'r')
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::RetryRequested])
    }

    fn name(&self) -> &'static str {
        "Retry"
    }
}
