//! View capability set
//!
//! Everything the controller can host responds to the same four
//! commands. Menus implement this; hosts can register their own view
//! types (value editors, info screens) through
//! [`Controller::add_view`](crate::Controller::add_view).

use crate::error::Error;
use crate::item::{ActionId, ViewId};
use crate::traits::display::DisplayBackend;

/// What a view wants done after a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClickOutcome {
    /// Nothing further
    None,
    /// Invoke the bound host action
    Invoke(ActionId),
    /// Switch to another registered view
    Navigate(ViewId),
}

/// Capability set shared by everything the controller can host
pub trait View {
    /// Full redraw of this view
    fn show(&mut self, display: &mut dyn DisplayBackend) -> Result<(), Error>;

    /// Move the selection up
    fn up(&mut self, display: &mut dyn DisplayBackend) -> Result<(), Error>;

    /// Move the selection down
    fn down(&mut self, display: &mut dyn DisplayBackend) -> Result<(), Error>;

    /// Activate the selected element
    ///
    /// The returned outcome is resolved by the controller; views never
    /// reach into the registry or the action table themselves.
    fn click(&mut self, display: &mut dyn DisplayBackend) -> Result<ClickOutcome, Error>;
}
