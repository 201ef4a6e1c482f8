//! # Commands
//!
//! Commands map key events to `CommandEvent`s. They only read a snapshot of
//! the view model; the controller decides how to apply the events.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub mod app;
pub mod context;
pub mod events;
pub mod listing;
pub mod session;

pub use app::AppTerminateCommand;
pub use context::{CommandContext, ViewModelSnapshot};
pub use events::CommandEvent;
pub use listing::{
    ClearFilterCommand, FilterBackspaceCommand, FilterInputCommand, MoveSelectionCommand,
    RetryCommand, ShowMoreCommand, ToggleFavoriteCommand, ToggleFavoritesViewCommand,
};
pub use session::{LoginBackspaceCommand, LoginInputCommand, LoginSubmitCommand, LogoutCommand};

/// Command trait
///
/// Commands check relevancy against a snapshot and produce events.
pub trait Command: Send {
    /// Whether this command claims `event` on the current screen
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events this key press stands for
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Short name for trace output
    fn name(&self) -> &'static str;
}

/// Printable character typed without control modifiers
pub(crate) fn typed_char(event: &KeyEvent) -> Option<char> {
    match event.code {
        KeyCode::Char(ch)
            if (event.modifiers == KeyModifiers::NONE || event.modifiers == KeyModifiers::SHIFT)
                && !ch.is_control() =>
        {
            Some(ch)
        }
        _ => None,
    }
}

/// Ctrl+`ch`
pub(crate) fn is_ctrl(event: &KeyEvent, ch: char) -> bool {
    event.code == KeyCode::Char(ch) && event.modifiers.contains(KeyModifiers::CONTROL)
}

/// Type alias for command collection
pub type CommandCollection = Vec<Box<dyn Command>>;

/// Ordered set of commands; the first relevant command handles a key
pub struct CommandRegistry {
    commands: CommandCollection,
}

impl CommandRegistry {
    /// Registry holding every listing and login command
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };

        registry.register_default_commands();
        registry
    }

    fn register_default_commands(&mut self) {
        // Control keys first so they never reach text input
        self.add_command(Box::new(AppTerminateCommand));
        self.add_command(Box::new(LogoutCommand));
        self.add_command(Box::new(ShowMoreCommand));
        self.add_command(Box::new(RetryCommand));

        // Login form
        self.add_command(Box::new(LoginSubmitCommand));
        self.add_command(Box::new(LoginBackspaceCommand));
        self.add_command(Box::new(LoginInputCommand));

        // Listing
        self.add_command(Box::new(MoveSelectionCommand));
        self.add_command(Box::new(ToggleFavoriteCommand));
        self.add_command(Box::new(ToggleFavoritesViewCommand));
        self.add_command(Box::new(ClearFilterCommand));
        self.add_command(Box::new(FilterBackspaceCommand));
        self.add_command(Box::new(FilterInputCommand));
    }

    /// Append `command`; earlier commands win ties
    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Resolve `event` with the first command that claims it
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!("Key {:?} handled by {}", event.code, command.name());
                return command.execute(event, context);
            }
        }
        Ok(Vec::new())
    }

    /// Registered commands in match order
    pub fn commands(&self) -> &CommandCollection {
        &self.commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
