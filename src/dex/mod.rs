//! # Pokédex Listing
//!
//! The listing application, split the same way at every layer:
//!
//! - **models**: plain data (references, favorites, session)
//! - **view_models**: listing and item state machines, no I/O
//! - **services**: the PokeAPI client and the fetch dispatcher
//! - **commands**: key events to `CommandEvent`s
//! - **controllers**: event loop tying everything together
//! - **views** / **io**: rendering over abstract terminal streams

pub mod commands;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod testing;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::AppController;
pub use events::*;
pub use models::{DetailPayload, FavoriteSet, Reference, SessionModel};
pub use services::{
    CollectionRequest, DetailRequest, FetchDispatcher, FetchError, FetchMessage, HttpPokeApi,
    PokeApi,
};
pub use view_models::*;
pub use views::{render_screen, TerminalRenderer, ViewRenderer};

// Re-export specific items from commands to avoid conflicts
pub use commands::{Command, CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot};
