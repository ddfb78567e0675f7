//! Abstraction traits
//!
//! Seams between the menu core and its collaborators: the display
//! hardware and the views the controller multiplexes over.

pub mod display;
pub mod view;

pub use display::{DisplayBackend, DisplayError};
pub use view::{ClickOutcome, View};
