//! Board-agnostic menu navigation core for small monochrome displays
//!
//! This crate contains all menu logic that does not depend on specific
//! display hardware:
//!
//! - Item model (leaf and link rows)
//! - Paginated menu view with selection state
//! - Controller multiplexing navigation across named views
//! - Host action binding and dispatch
//! - Rendering contract for display collaborators
//!
//! The controller owns the display backend and routes every navigation
//! command to the active view, which draws itself through the
//! [`DisplayBackend`](traits::DisplayBackend) trait. Hierarchical menus
//! are plain link rows resolved through the same registry.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod action;
pub mod controller;
pub mod error;
pub mod event;
pub mod item;
pub mod menu;
pub mod traits;

#[cfg(test)]
pub(crate) mod testutil;

pub use action::{ActionTable, Handler, HandlerError};
pub use controller::Controller;
pub use error::Error;
pub use event::NavigationEvent;
pub use item::{ActionId, Item, ViewId};
pub use menu::MenuView;
pub use traits::{ClickOutcome, DisplayBackend, DisplayError, View};
