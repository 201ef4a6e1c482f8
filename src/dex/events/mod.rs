//! # Events Module
//!
//! Re-exports the event system: identity types shared by requests and events,
//! model events describing state changes, view events describing redraws, and
//! the bus that fans model events out to subscribers.

pub mod event_bus;
pub mod model_events;
pub mod types;
pub mod view_events;

pub use event_bus::{EventBus, ModelEventHandler, SimpleEventBus};
pub use model_events::ModelEvent;
pub use types::{ItemId, RequestTag, Screen};
pub use view_events::ViewEvent;
