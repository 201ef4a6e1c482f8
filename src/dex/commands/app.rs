//! # Session and Lifetime Commands
//!
//! Commands for controlling the application lifecycle.

use anyhow::Result;
use crossterm::event::KeyEvent;

use super::{is_ctrl, Command, CommandContext, CommandEvent};

/// Quit from any screen (Ctrl+C)
pub struct AppTerminateCommand;

impl Command for AppTerminateCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        is_ctrl(event, 'c')
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::QuitRequested])
    }

    fn name(&self) -> &'static str {
        "AppTerminate"
    }
}
