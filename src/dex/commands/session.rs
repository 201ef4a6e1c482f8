//! # Login Gate Commands
//!
//! Typing on the login form and leaving the listing.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{is_ctrl, typed_char, Command, CommandContext, CommandEvent};

/// Type a character into the login form
pub struct LoginInputCommand;

impl Command for LoginInputCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.on_login() && typed_char(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(typed_char(&event)
            .map(|ch| CommandEvent::LoginInputRequested { ch })
            .into_iter()
            .collect())
    }

    fn name(&self) -> &'static str {
        "LoginInput"
    }
}

/// Delete the last login character (Backspace)
pub struct LoginBackspaceCommand;

impl Command for LoginBackspaceCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.on_login() && event.code == KeyCode::Backspace
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::LoginBackspaceRequested])
    }

    fn name(&self) -> &'static str {
        "LoginBackspace"
    }
}

/// Submit the login form (Enter)
pub struct LoginSubmitCommand;

impl Command for LoginSubmitCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.on_login() && event.code == KeyCode::Enter
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::LoginSubmitRequested])
    }

    fn name(&self) -> &'static str {
        "LoginSubmit"
    }
}

/// Go back to the login form (Ctrl+L)
pub struct LogoutCommand;

impl Command for LogoutCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.on_listing() && is_ctrl(event, 'l')
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::LogoutRequested])
    }

    fn name(&self) -> &'static str {
        "Logout"
    }
}
