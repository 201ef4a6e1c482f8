//! # Event Bus
//!
//! Delivers listing and session transitions to whoever subscribed, in the
//! order the view model produced them. Tests subscribe here to check the
//! sequence of transitions a key press causes.

use super::model_events::ModelEvent;

/// Callback invoked once per published `ModelEvent`
pub type ModelEventHandler = Box<dyn Fn(&ModelEvent) + Send + Sync>;

/// Sink for the `ModelEvent`s an `AppViewModel` publishes
pub trait EventBus: Send + Sync {
    /// Hand `event` to every subscriber
    fn publish_model_event(&mut self, event: ModelEvent);

    /// Register `handler` for all later events
    fn subscribe_to_model_events(&mut self, handler: ModelEventHandler);
}

/// Calls every subscriber synchronously, in subscription order
pub struct SimpleEventBus {
    model_handlers: Vec<ModelEventHandler>,
}

impl SimpleEventBus {
    pub fn new() -> Self {
        Self {
            model_handlers: Vec::new(),
        }
    }
}

impl Default for SimpleEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SimpleEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleEventBus")
            .field("model_handlers", &self.model_handlers.len())
            .finish()
    }
}

impl EventBus for SimpleEventBus {
    fn publish_model_event(&mut self, event: ModelEvent) {
        for handler in &self.model_handlers {
            handler(&event);
        }
    }

    fn subscribe_to_model_events(&mut self, handler: ModelEventHandler) {
        self.model_handlers.push(handler);
    }
}
