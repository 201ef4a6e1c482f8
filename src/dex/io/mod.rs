//! # Terminal Seams
//!
//! Trait abstractions for input events and terminal output, so the
//! controller runs against a real terminal in production and against
//! in-memory streams in tests.
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream ──▶ crossterm::event::read()
//!                            ──▶ TerminalRenderStream ──▶ crossterm::execute!()
//!
//! Testing:     AppController ──▶ MockEventStream     ──▶ VecDeque<Event>
//!                            ──▶ MockRenderStream    ──▶ simulated screen
//! ```

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderStream, RenderCommand};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// Columns and rows
pub type TerminalSize = (u16, u16);

/// Source of key and resize events
pub trait EventStream: Send {
    /// Check if events are available without blocking past `timeout`
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Take the next queued event
    ///
    /// Call only after `poll` reported one ready.
    fn read(&mut self) -> Result<Event>;
}

/// Output render stream abstraction
pub trait RenderStream: Write + Send {
    /// Blank every cell
    fn clear_screen(&mut self) -> Result<()>;

    /// Place the cursor at zero-based (column, row)
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    /// Hide the cursor
    fn hide_cursor(&mut self) -> Result<()>;

    /// Show the cursor
    fn show_cursor(&mut self) -> Result<()>;

    /// Switch reverse-video highlighting on or off for subsequent writes
    fn set_highlight(&mut self, on: bool) -> Result<()>;

    /// Current (width, height)
    fn get_size(&self) -> Result<TerminalSize>;

    /// Switch away from the shell scrollback
    fn enter_alternate_screen(&mut self) -> Result<()>;

    /// Leave alternate screen buffer
    fn leave_alternate_screen(&mut self) -> Result<()>;

    /// Deliver keys unbuffered and unechoed
    fn enable_raw_mode(&mut self) -> Result<()>;

    /// Restore line-buffered input
    fn disable_raw_mode(&mut self) -> Result<()>;
}
