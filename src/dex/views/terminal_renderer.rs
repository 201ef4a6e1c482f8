//! # Terminal Renderer
//!
//! Writes the lines produced by `render_screen` through a `RenderStream`.
//! Every row is padded to the full terminal width so a content redraw can
//! overwrite the previous frame without clearing the screen first.

use crate::dex::events::ViewEvent;
use crate::dex::io::RenderStream;
use crate::dex::view_models::AppViewModel;
use crate::dex::views::screen;
use anyhow::Result;
use std::io::Write;

/// Draws the login gate and the listing onto a `RenderStream`
pub trait ViewRenderer {
    /// Prepare the terminal for drawing
    fn initialize(&mut self) -> Result<()>;

    /// Clear and draw everything
    fn render_full(&mut self, view_model: &AppViewModel) -> Result<()>;

    /// Redraw every row in place
    fn render_content(&mut self, view_model: &AppViewModel) -> Result<()>;

    fn render_status_bar(&mut self, view_model: &AppViewModel) -> Result<()>;

    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &AppViewModel) -> Result<()>;

    /// Restore the terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Renderer over any `RenderStream`
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create a renderer sized to the stream's terminal
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    fn draw_rows(&mut self, view_model: &AppViewModel) -> Result<()> {
        let (width, height) = self.terminal_size;
        let lines = screen::render_screen(view_model, width, height);
        let highlighted = screen::selected_row(view_model, height);

        for (row, line) in lines.iter().enumerate() {
            let row = row as u16;
            self.draw_row(row, line, highlighted == Some(row))?;
        }
        Ok(())
    }

    fn draw_row(&mut self, row: u16, text: &str, highlighted: bool) -> Result<()> {
        let width = usize::from(self.terminal_size.0);
        let padding = width.saturating_sub(text.chars().count());

        self.render_stream.move_cursor(0, row)?;
        if highlighted {
            self.render_stream.set_highlight(true)?;
        }
        write!(self.render_stream, "{text}{}", " ".repeat(padding))?;
        if highlighted {
            self.render_stream.set_highlight(false)?;
        }
        Ok(())
    }

    /// Park the cursor in the active input field
    fn place_cursor(&mut self, view_model: &AppViewModel) -> Result<()> {
        let (width, height) = self.terminal_size;
        match screen::input_cursor(view_model, width, height) {
            Some((x, y)) => {
                self.render_stream.move_cursor(x, y)?;
                self.render_stream.show_cursor()
            }
            None => self.render_stream.hide_cursor(),
        }
    }

    fn finish_frame(&mut self, view_model: &AppViewModel) -> Result<()> {
        self.place_cursor(view_model)?;
        self.render_stream.flush().map_err(anyhow::Error::from)
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()
    }

    fn render_full(&mut self, view_model: &AppViewModel) -> Result<()> {
        // Hide cursor during the redraw to avoid flicker
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;
        self.draw_rows(view_model)?;
        self.finish_frame(view_model)
    }

    fn render_content(&mut self, view_model: &AppViewModel) -> Result<()> {
        self.render_stream.hide_cursor()?;
        self.draw_rows(view_model)?;
        self.finish_frame(view_model)
    }

    fn render_status_bar(&mut self, view_model: &AppViewModel) -> Result<()> {
        let (width, height) = self.terminal_size;
        if height == 0 {
            return Ok(());
        }
        let status = screen::render_status_bar(view_model, width);
        self.draw_row(height - 1, &status, false)?;
        self.finish_frame(view_model)
    }

    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &AppViewModel) -> Result<()> {
        match event {
            ViewEvent::FullRedrawRequired => self.render_full(view_model),
            ViewEvent::ContentRedrawRequired => self.render_content(view_model),
            ViewEvent::StatusBarUpdateRequired => self.render_status_bar(view_model),
        }
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.show_cursor()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()
    }
}
