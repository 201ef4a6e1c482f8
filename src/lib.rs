//! # pokeline - Terminal Pokédex Browser
//!
//! Lists creatures from the public PokeAPI, filters them by name as you type,
//! and keeps a set of favorites for the session. A stub login form gates the
//! list.
//!
//! ## Architecture
//!
//! This application follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Updates   ┌─────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│ Models  │
//! │             │              │              │              │         │
//! │ - Terminal  │              │ - Listing    │              │ - Refs  │
//! │ - Rendering │              │ - Items      │              │ - Favs  │
//! │ - Input     │              │ - Session    │              │         │
//! └─────────────┘              └──────────────┘              └─────────┘
//!                                      ▲
//!                                      │ Commands / FetchMessages
//!                                      ▼
//!                               ┌──────────────┐    spawn    ┌──────────┐
//!                               │  Controller  │────────────▶│ PokeApi  │
//!                               │              │◄────────────│ (tokio)  │
//!                               │ - Event Loop │   channel   └──────────┘
//!                               └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod dex;
pub mod logging;

// Re-export main types for easy access
pub use dex::*;
