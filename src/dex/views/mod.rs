//! # Views Module
//!
//! Rendering of the view model: a pure line layout and the renderer that
//! writes it to a terminal.

pub mod screen;
pub mod terminal_renderer;

pub use screen::render_screen;
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
