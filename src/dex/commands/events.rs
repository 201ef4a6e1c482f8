//! # Command Events
//!
//! Intents a key press resolves to, applied later by the controller.
//! Commands produce these events, and the controller applies them to the view model.

/// What a matched key asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEvent {
    /// Request application quit
    QuitRequested,

    /// Append a character to the login input
    LoginInputRequested { ch: char },

    /// Delete the last login input character
    LoginBackspaceRequested,

    /// Log in with the typed name
    LoginSubmitRequested,

    /// Return to the login form
    LogoutRequested,

    /// Append a character to the filter
    FilterInputRequested { ch: char },

    /// Delete the last filter character
    FilterBackspaceRequested,

    /// Clear the filter
    FilterClearRequested,

    /// Move the row selection
    SelectionMoveRequested { delta: isize },

    /// Toggle favorite on the selected row
    FavoriteToggleRequested,

    /// Switch the favorites-only view
    FavoritesViewToggleRequested,

    /// Grow the page size and re-fetch
    MoreRequested,

    /// Re-issue a failed collection fetch
    RetryRequested,
}
