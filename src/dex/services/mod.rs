//! # Services
//!
//! Network access for the listing: the `PokeApi` seam with its reqwest
//! implementation, and the dispatcher that runs fetches as background tasks
//! and reports completions over a channel.

pub mod dispatcher;
pub mod pokeapi;

pub use dispatcher::{CollectionRequest, DetailRequest, FetchDispatcher, FetchMessage};
pub use pokeapi::{FetchError, HttpPokeApi, PokeApi};
