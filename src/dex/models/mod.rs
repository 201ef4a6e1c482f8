//! # Data Models
//!
//! Plain data types behind the listing. Models hold state only; the view
//! models decide when they change and which events to publish.

pub mod favorites;
pub mod reference;
pub mod session;

pub use favorites::FavoriteSet;
pub use reference::{DetailPayload, Reference};
pub use session::SessionModel;
