//! # Crossterm Streams
//!
//! Keyboard input and screen output for a real terminal. Nothing else in
//! the crate talks to crossterm directly.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use std::io::{self, Write};
use std::time::Duration;

/// Key and resize events read from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalEventStream;

impl TerminalEventStream {
    pub fn new() -> Self {
        Self
    }
}

impl EventStream for TerminalEventStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        event::poll(timeout).map_err(anyhow::Error::from)
    }

    fn read(&mut self) -> Result<Event> {
        event::read().map_err(anyhow::Error::from)
    }
}

/// Escape-sequence output for the listing screen
#[derive(Debug)]
pub struct TerminalRenderStream<W: Write> {
    writer: W,
}

impl TerminalRenderStream<io::Stdout> {
    /// Render to stdout
    pub fn new() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl Default for TerminalRenderStream<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderStream<W> {
    /// Render into any writer, e.g. a buffer in tests
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Write for TerminalRenderStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write + Send> RenderStream for TerminalRenderStream<W> {
    fn clear_screen(&mut self) -> Result<()> {
        execute!(self.writer, terminal::Clear(terminal::ClearType::All)).map_err(anyhow::Error::from)
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        execute!(self.writer, cursor::MoveTo(x, y)).map_err(anyhow::Error::from)
    }

    fn hide_cursor(&mut self) -> Result<()> {
        execute!(self.writer, cursor::Hide).map_err(anyhow::Error::from)
    }

    fn show_cursor(&mut self) -> Result<()> {
        execute!(self.writer, cursor::Show).map_err(anyhow::Error::from)
    }

    fn set_highlight(&mut self, on: bool) -> Result<()> {
        let attribute = if on {
            Attribute::Reverse
        } else {
            Attribute::Reset
        };
        execute!(self.writer, SetAttribute(attribute)).map_err(anyhow::Error::from)
    }

    fn get_size(&self) -> Result<TerminalSize> {
        terminal::size().map_err(anyhow::Error::from)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        execute!(self.writer, EnterAlternateScreen).map_err(anyhow::Error::from)
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        execute!(self.writer, LeaveAlternateScreen).map_err(anyhow::Error::from)
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        terminal::enable_raw_mode().map_err(anyhow::Error::from)
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        terminal::disable_raw_mode().map_err(anyhow::Error::from)
    }
}
