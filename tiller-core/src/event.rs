//! Navigation events
//!
//! Unified input representation. Input sources (buttons, encoders,
//! touch) reduce their hardware events to these and feed them to
//! [`Controller::handle_event`](crate::Controller::handle_event).

/// One navigation input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavigationEvent {
    /// Move the selection up
    Up,
    /// Move the selection down
    Down,
    /// Activate the selected row
    Click,
}
