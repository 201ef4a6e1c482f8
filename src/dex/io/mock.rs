//! # Scripted Input and Recorded Output
//!
//! In-memory implementations of EventStream and RenderStream. Both are
//! cheap handles over shared state: a test keeps one clone while the
//! controller owns the other, so events can be queued and the simulated
//! screen inspected at any point.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Input queue that tests fill with key presses
///
/// Provides pre-programmed events that can be consumed by the controller.
#[derive(Debug, Clone, Default)]
pub struct MockEventStream {
    events: Arc<Mutex<VecDeque<Event>>>,
}

impl MockEventStream {
    /// Start with `events` already queued
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: Arc::new(Mutex::new(events.into_iter().collect())),
        }
    }

    /// Start with nothing queued
    pub fn empty() -> Self {
        Self::default()
    }

    /// Queue `event` behind anything already pending
    pub fn push_event(&self, event: Event) {
        self.queue().push_back(event);
    }

    /// Queue a key press with no modifiers
    pub fn push_key(&self, code: KeyCode) {
        self.push_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    /// Queue a key press with modifiers
    pub fn push_key_with(&self, code: KeyCode, modifiers: KeyModifiers) {
        self.push_event(Event::Key(KeyEvent::new(code, modifiers)));
    }

    /// Queue one key press per character of `text`
    pub fn push_text(&self, text: &str) {
        for ch in text.chars() {
            self.push_key(KeyCode::Char(ch));
        }
    }

    pub fn pending(&self) -> usize {
        self.queue().len()
    }

    fn queue(&self) -> MutexGuard<'_, VecDeque<Event>> {
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.queue().is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.queue()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }
}

/// One call made on a `MockRenderStream`
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    Highlight(bool),
    GetSize,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Write(Vec<u8>),
    Flush,
}

#[derive(Debug)]
struct MockTerminal {
    commands: Vec<RenderCommand>,
    size: TerminalSize,
    cells: Vec<Vec<char>>,
    cursor: (u16, u16),
    cursor_visible: bool,
    raw_mode: bool,
    alternate_screen: bool,
}

impl MockTerminal {
    fn new(size: TerminalSize) -> Self {
        Self {
            commands: Vec::new(),
            size,
            cells: blank_cells(size),
            cursor: (0, 0),
            cursor_visible: true,
            raw_mode: false,
            alternate_screen: false,
        }
    }

    fn put_text(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '\n' => self.cursor = (0, self.cursor.1.saturating_add(1)),
                '\r' => self.cursor.0 = 0,
                _ => {
                    let (x, y) = (usize::from(self.cursor.0), usize::from(self.cursor.1));
                    if let Some(cell) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
                        *cell = ch;
                    }
                    self.cursor.0 = self.cursor.0.saturating_add(1);
                }
            }
        }
    }
}

fn blank_cells((width, height): TerminalSize) -> Vec<Vec<char>> {
    vec![vec![' '; usize::from(width)]; usize::from(height)]
}

/// Render target that records calls and keeps a character grid
///
/// Records all rendering commands and keeps a simulated screen grid that
/// written text lands on, so tests can assert on what the user would see.
#[derive(Debug, Clone)]
pub struct MockRenderStream {
    terminal: Arc<Mutex<MockTerminal>>,
}

impl MockRenderStream {
    /// 80x24 screen
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    /// Screen of `width` x `height` cells
    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            terminal: Arc::new(Mutex::new(MockTerminal::new(size))),
        }
    }

    /// Every call since creation or the last `clear_commands`
    pub fn get_commands(&self) -> Vec<RenderCommand> {
        self.terminal().commands.clone()
    }

    /// Forget recorded calls, keeping the grid
    pub fn clear_commands(&self) {
        self.terminal().commands.clear();
    }

    /// True if `command` was recorded
    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.terminal().commands.contains(command)
    }

    /// Simulate a terminal resize; the screen contents are dropped
    pub fn resize(&self, size: TerminalSize) {
        let mut terminal = self.terminal();
        terminal.size = size;
        terminal.cells = blank_cells(size);
    }

    /// Visible screen rows with trailing blanks trimmed
    pub fn screen_lines(&self) -> Vec<String> {
        self.terminal()
            .cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    /// Whole screen as one newline-joined string
    pub fn screen_text(&self) -> String {
        self.screen_lines().join("\n")
    }

    pub fn screen_contains(&self, needle: &str) -> bool {
        self.screen_lines().iter().any(|line| line.contains(needle))
    }

    pub fn cursor_visible(&self) -> bool {
        self.terminal().cursor_visible
    }

    pub fn raw_mode(&self) -> bool {
        self.terminal().raw_mode
    }

    pub fn alternate_screen(&self) -> bool {
        self.terminal().alternate_screen
    }

    fn terminal(&self) -> MutexGuard<'_, MockTerminal> {
        self.terminal.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, command: RenderCommand) {
        self.terminal().commands.push(command);
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut terminal = self.terminal();
        terminal.put_text(&String::from_utf8_lossy(buf));
        terminal.commands.push(RenderCommand::Write(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        let mut terminal = self.terminal();
        terminal.commands.push(RenderCommand::ClearScreen);
        terminal.cells = blank_cells(terminal.size);
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        let mut terminal = self.terminal();
        terminal.commands.push(RenderCommand::MoveCursor(x, y));
        terminal.cursor = (x, y);
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        let mut terminal = self.terminal();
        terminal.commands.push(RenderCommand::HideCursor);
        terminal.cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        let mut terminal = self.terminal();
        terminal.commands.push(RenderCommand::ShowCursor);
        terminal.cursor_visible = true;
        Ok(())
    }

    fn set_highlight(&mut self, on: bool) -> Result<()> {
        self.record(RenderCommand::Highlight(on));
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        let mut terminal = self.terminal();
        terminal.commands.push(RenderCommand::GetSize);
        Ok(terminal.size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        let mut terminal = self.terminal();
        terminal.commands.push(RenderCommand::EnterAlternateScreen);
        terminal.alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        let mut terminal = self.terminal();
        terminal.commands.push(RenderCommand::LeaveAlternateScreen);
        terminal.alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        let mut terminal = self.terminal();
        terminal.commands.push(RenderCommand::EnableRawMode);
        terminal.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        let mut terminal = self.terminal();
        terminal.commands.push(RenderCommand::DisableRawMode);
        terminal.raw_mode = false;
        Ok(())
    }
}
