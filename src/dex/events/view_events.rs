//! # View Events
//!
//! Redraw requests queued by the view model and drained by the controller.

/// Which part of the screen needs repainting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Clear and redraw everything (screen switch, resize)
    FullRedrawRequired,

    /// Header, list and status need redrawing but the screen layout is unchanged
    ContentRedrawRequired,

    /// Only the status bar changed
    StatusBarUpdateRequired,
}

impl ViewEvent {
    /// Collapse a batch of events into the single most expensive redraw
    pub fn coalesce(events: &[ViewEvent]) -> Option<ViewEvent> {
        if events.contains(&ViewEvent::FullRedrawRequired) {
            Some(ViewEvent::FullRedrawRequired)
        } else if events.contains(&ViewEvent::ContentRedrawRequired) {
            Some(ViewEvent::ContentRedrawRequired)
        } else if events.is_empty() {
            None
        } else {
            Some(ViewEvent::StatusBarUpdateRequired)
        }
    }
}
