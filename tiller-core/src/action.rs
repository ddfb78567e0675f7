//! Host action binding and dispatch
//!
//! Leaf rows carry an [`ActionId`]; the host binds each id to a plain
//! function at startup. Handlers needing shared state reach it through
//! the host's own statics, which is how embassy firmware shares state
//! between tasks anyway.

use heapless::Vec;

use crate::error::Error;
use crate::item::ActionId;

/// Maximum number of bound actions
pub const MAX_ACTIONS: usize = 16;

/// Failure reported by an action handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandlerError;

/// Handler invoked when a row bound to its [`ActionId`] is clicked
pub type Handler = fn() -> Result<(), HandlerError>;

/// Action table: id to handler, populated once at startup
pub struct ActionTable {
    entries: Vec<(ActionId, Handler), MAX_ACTIONS>,
}

impl ActionTable {
    /// Create an empty table
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Bind `id` to `handler`
    pub fn bind(&mut self, id: ActionId, handler: Handler) -> Result<(), Error> {
        if self.entries.iter().any(|(bound, _)| *bound == id) {
            return Err(Error::DuplicateAction(id));
        }
        self.entries
            .push((id, handler))
            .map_err(|_| Error::ActionTableFull)
    }

    /// Resolve `id` and invoke its handler
    pub fn invoke(&self, id: ActionId) -> Result<(), Error> {
        let (_, handler) = self
            .entries
            .iter()
            .find(|(bound, _)| *bound == id)
            .ok_or(Error::UnboundAction(id))?;
        handler().map_err(|_| Error::ActionFailed(id))
    }

    /// Whether `id` has a handler bound
    pub fn is_bound(&self, id: ActionId) -> bool {
        self.entries.iter().any(|(bound, _)| *bound == id)
    }
}

impl Default for ActionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::{AtomicUsize, Ordering};

    static CALLS: AtomicUsize = AtomicUsize::new(0);

    fn count_call() -> Result<(), HandlerError> {
        CALLS.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn always_fail() -> Result<(), HandlerError> {
        Err(HandlerError)
    }

    #[test]
    fn bound_handler_is_invoked() {
        let mut table = ActionTable::new();
        table.bind("count", count_call).unwrap();

        let before = CALLS.load(Ordering::SeqCst);
        table.invoke("count").unwrap();
        assert_eq!(CALLS.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn unbound_id_is_an_error() {
        let table = ActionTable::new();
        assert_eq!(table.invoke("nope"), Err(Error::UnboundAction("nope")));
    }

    #[test]
    fn duplicate_binding_is_rejected() {
        let mut table = ActionTable::new();
        table.bind("count", count_call).unwrap();
        assert_eq!(
            table.bind("count", count_call),
            Err(Error::DuplicateAction("count"))
        );
    }

    #[test]
    fn handler_failure_is_reported() {
        let mut table = ActionTable::new();
        table.bind("boom", always_fail).unwrap();
        assert_eq!(table.invoke("boom"), Err(Error::ActionFailed("boom")));
    }

    #[test]
    fn table_capacity_is_bounded() {
        const IDS: [&str; MAX_ACTIONS] = [
            "a0", "a1", "a2", "a3", "a4", "a5", "a6", "a7", "a8", "a9", "a10", "a11", "a12",
            "a13", "a14", "a15",
        ];

        let mut table = ActionTable::new();
        for id in IDS {
            table.bind(id, count_call).unwrap();
        }
        assert_eq!(table.bind("overflow", count_call), Err(Error::ActionTableFull));
    }
}
