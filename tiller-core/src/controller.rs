//! View registry and navigation routing
//!
//! The controller owns the display backend and a set of named views,
//! exactly one of which is active at a time. Navigation commands are
//! routed to the active view; a click on a menu's link row is
//! intercepted here and switches the active view instead, which is all
//! the hierarchy machinery there is. "back" rows are ordinary links
//! appended by [`MenuView`] at construction.

use heapless::Vec;

use crate::action::{ActionTable, Handler};
use crate::error::Error;
use crate::event::NavigationEvent;
use crate::item::{ActionId, Item, ViewId};
use crate::menu::MenuView;
use crate::traits::display::DisplayBackend;
use crate::traits::view::{ClickOutcome, View};

/// Maximum number of registered views
pub const MAX_VIEWS: usize = 8;

enum Slot {
    Menu(MenuView),
    Custom(&'static mut dyn View),
}

impl Slot {
    fn as_view(&mut self) -> &mut dyn View {
        match self {
            Slot::Menu(menu) => menu,
            Slot::Custom(view) => &mut **view,
        }
    }
}

/// Registry of named views plus the single active-view pointer
///
/// Created once at startup and owned by the host's UI loop. The display
/// is owned here and lent to exactly one view per command, so no two
/// views can ever draw concurrently.
pub struct Controller<D: DisplayBackend> {
    display: D,
    views: Vec<(ViewId, Slot), MAX_VIEWS>,
    active: Option<usize>,
    actions: ActionTable,
}

impl<D: DisplayBackend> Controller<D> {
    /// Take ownership of the display and start with an empty registry
    pub fn new(display: D) -> Self {
        Self {
            display,
            views: Vec::new(),
            active: None,
            actions: ActionTable::new(),
        }
    }

    /// Construct a [`MenuView`] and register it under `id`
    ///
    /// `parent` gives the menu an auto-appended "back" link to that
    /// view. Re-registering an id is rejected rather than silently
    /// overwriting the earlier view.
    pub fn add_menu(
        &mut self,
        id: ViewId,
        items: &[Item],
        headline: Option<&str>,
        parent: Option<ViewId>,
    ) -> Result<(), Error> {
        if self.index_of(id).is_some() {
            return Err(Error::DuplicateView(id));
        }
        let menu = MenuView::new(&self.display, items, headline, parent)?;
        self.views
            .push((id, Slot::Menu(menu)))
            .map_err(|_| Error::RegistryFull)
    }

    /// Register a host-built view under `id`
    ///
    /// The view is statically allocated by the host (`static_cell` or
    /// equivalent); the registry keeps the exclusive reference.
    pub fn add_view(&mut self, id: ViewId, view: &'static mut dyn View) -> Result<(), Error> {
        if self.index_of(id).is_some() {
            return Err(Error::DuplicateView(id));
        }
        self.views
            .push((id, Slot::Custom(view)))
            .map_err(|_| Error::RegistryFull)
    }

    /// Bind a host action handler
    pub fn bind_action(&mut self, id: ActionId, handler: Handler) -> Result<(), Error> {
        self.actions.bind(id, handler)
    }

    /// Activate the view registered under `id` and fully redraw it
    ///
    /// On an unknown id the previously active view stays active.
    pub fn show(&mut self, id: ViewId) -> Result<(), Error> {
        let index = self.index_of(id).ok_or(Error::UnknownView(id))?;
        self.active = Some(index);
        self.views[index].1.as_view().show(&mut self.display)
    }

    /// Move the active view's selection up
    pub fn up(&mut self) -> Result<(), Error> {
        let index = self.active.ok_or(Error::NoActiveView)?;
        self.views[index].1.as_view().up(&mut self.display)
    }

    /// Move the active view's selection down
    pub fn down(&mut self) -> Result<(), Error> {
        let index = self.active.ok_or(Error::NoActiveView)?;
        self.views[index].1.as_view().down(&mut self.display)
    }

    /// Activate the selected element of the active view
    pub fn click(&mut self) -> Result<(), Error> {
        let index = self.active.ok_or(Error::NoActiveView)?;

        // A selected link row switches views; the menu's own click is
        // not involved.
        if let (_, Slot::Menu(menu)) = &self.views[index] {
            if let Some(Item::Link { target, .. }) = menu.selected_item() {
                let target = *target;
                return self.show(target);
            }
        }

        match self.views[index].1.as_view().click(&mut self.display)? {
            ClickOutcome::None => Ok(()),
            ClickOutcome::Invoke(action) => self.actions.invoke(action),
            ClickOutcome::Navigate(target) => self.show(target),
        }
    }

    /// Route a navigation event to the matching command
    pub fn handle_event(&mut self, event: NavigationEvent) -> Result<(), Error> {
        match event {
            NavigationEvent::Up => self.up(),
            NavigationEvent::Down => self.down(),
            NavigationEvent::Click => self.click(),
        }
    }

    /// Id of the active view
    pub fn active(&self) -> Option<ViewId> {
        self.active.map(|index| self.views[index].0)
    }

    /// Registered menu under `id`, if it is one
    pub fn menu(&self, id: ViewId) -> Option<&MenuView> {
        self.views.iter().find_map(|(vid, slot)| match slot {
            Slot::Menu(menu) if *vid == id => Some(menu),
            _ => None,
        })
    }

    /// Mutable access to a registered menu, e.g. to adjust its headline
    pub fn menu_mut(&mut self, id: ViewId) -> Option<&mut MenuView> {
        self.views.iter_mut().find_map(|(vid, slot)| match slot {
            Slot::Menu(menu) if *vid == id => Some(menu),
            _ => None,
        })
    }

    /// The owned display backend
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable access to the display backend
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    fn index_of(&self, id: ViewId) -> Option<usize> {
        self.views.iter().position(|(vid, _)| *vid == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::HandlerError;
    use crate::testutil::TestPanel;
    use core::sync::atomic::{AtomicUsize, Ordering};
    use std::boxed::Box;

    static INVOCATIONS: AtomicUsize = AtomicUsize::new(0);

    fn record_invocation() -> Result<(), HandlerError> {
        INVOCATIONS.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn failing_handler() -> Result<(), HandlerError> {
        Err(HandlerError)
    }

    fn two_level_controller() -> Controller<TestPanel> {
        let mut ui = Controller::new(TestPanel::new(128, 64));
        ui.add_menu(
            "main",
            &[Item::leaf("A"), Item::link("Go", "sub")],
            Some("Main"),
            None,
        )
        .unwrap();
        ui.add_menu("sub", &[Item::leaf("B")], Some("Sub"), Some("main"))
            .unwrap();
        ui
    }

    #[test]
    fn link_click_switches_the_active_view() {
        let mut ui = two_level_controller();
        ui.show("main").unwrap();
        ui.down().unwrap();
        ui.click().unwrap();

        assert_eq!(ui.active(), Some("sub"));
        let sub = ui.menu("sub").unwrap();
        assert_eq!(
            sub.items(),
            &[Item::leaf("B"), Item::link("back", "main")]
        );
    }

    #[test]
    fn back_link_returns_to_parent() {
        let mut ui = two_level_controller();
        ui.show("sub").unwrap();
        ui.down().unwrap();
        ui.click().unwrap();
        assert_eq!(ui.active(), Some("main"));
    }

    #[test]
    fn selection_persists_across_reactivation() {
        let mut ui = two_level_controller();
        ui.show("main").unwrap();
        ui.down().unwrap();
        ui.show("sub").unwrap();
        ui.show("main").unwrap();
        assert_eq!(ui.menu("main").unwrap().selected(), 1);
    }

    #[test]
    fn unknown_view_keeps_previous_active() {
        let mut ui = two_level_controller();
        ui.show("main").unwrap();
        assert_eq!(ui.show("missing"), Err(Error::UnknownView("missing")));
        assert_eq!(ui.active(), Some("main"));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut ui = two_level_controller();
        assert_eq!(
            ui.add_menu("main", &[Item::leaf("X")], None, None),
            Err(Error::DuplicateView("main"))
        );
    }

    #[test]
    fn navigation_before_show_is_an_error() {
        let mut ui: Controller<TestPanel> = Controller::new(TestPanel::new(128, 64));
        assert_eq!(ui.up(), Err(Error::NoActiveView));
        assert_eq!(ui.down(), Err(Error::NoActiveView));
        assert_eq!(ui.click(), Err(Error::NoActiveView));
    }

    #[test]
    fn leaf_click_invokes_bound_action() {
        let mut ui = Controller::new(TestPanel::new(128, 64));
        ui.bind_action("ping", record_invocation).unwrap();
        ui.add_menu("main", &[Item::action("Ping", "ping")], None, None)
            .unwrap();
        ui.show("main").unwrap();

        let before = INVOCATIONS.load(Ordering::SeqCst);
        ui.click().unwrap();
        assert_eq!(INVOCATIONS.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn actionless_leaf_click_is_a_no_op() {
        let mut ui = Controller::new(TestPanel::new(128, 64));
        ui.add_menu("main", &[Item::leaf("Plain")], None, None)
            .unwrap();
        ui.show("main").unwrap();

        ui.display_mut().reset();
        ui.click().unwrap();
        assert_eq!(ui.menu("main").unwrap().selected(), 0);
        assert!(ui.display().ops.is_empty());
    }

    #[test]
    fn unbound_action_fails_without_corrupting_state() {
        let mut ui = Controller::new(TestPanel::new(128, 64));
        ui.add_menu("main", &[Item::action("Ghost", "ghost")], None, None)
            .unwrap();
        ui.show("main").unwrap();

        assert_eq!(ui.click(), Err(Error::UnboundAction("ghost")));
        assert_eq!(ui.menu("main").unwrap().selected(), 0);
        assert_eq!(ui.active(), Some("main"));
    }

    #[test]
    fn failed_handler_leaves_state_untouched() {
        let mut ui = Controller::new(TestPanel::new(128, 64));
        ui.bind_action("boom", failing_handler).unwrap();
        ui.add_menu("main", &[Item::action("Boom", "boom")], None, None)
            .unwrap();
        ui.show("main").unwrap();

        ui.display_mut().reset();
        assert_eq!(ui.click(), Err(Error::ActionFailed("boom")));
        assert_eq!(ui.menu("main").unwrap().selected(), 0);
        // Nothing was redrawn on the failure path.
        assert_eq!(ui.display().flushes(), 0);
    }

    #[test]
    fn events_route_to_commands() {
        let mut ui = two_level_controller();
        ui.show("main").unwrap();

        ui.handle_event(NavigationEvent::Down).unwrap();
        assert_eq!(ui.menu("main").unwrap().selected(), 1);
        ui.handle_event(NavigationEvent::Up).unwrap();
        assert_eq!(ui.menu("main").unwrap().selected(), 0);
        ui.handle_event(NavigationEvent::Down).unwrap();
        ui.handle_event(NavigationEvent::Click).unwrap();
        assert_eq!(ui.active(), Some("sub"));
    }

    #[test]
    fn registry_capacity_is_bounded() {
        const IDS: [&str; MAX_VIEWS] = ["v0", "v1", "v2", "v3", "v4", "v5", "v6", "v7"];

        let mut ui = Controller::new(TestPanel::new(128, 64));
        for id in IDS {
            ui.add_menu(id, &[Item::leaf("X")], None, None).unwrap();
        }
        assert_eq!(
            ui.add_menu("v8", &[Item::leaf("X")], None, None),
            Err(Error::RegistryFull)
        );
    }

    struct CountingView {
        shows: usize,
        moves: usize,
        outcome: ClickOutcome,
    }

    impl View for CountingView {
        fn show(&mut self, display: &mut dyn DisplayBackend) -> Result<(), Error> {
            self.shows += 1;
            display.clear()?;
            display.flush()?;
            Ok(())
        }

        fn up(&mut self, _display: &mut dyn DisplayBackend) -> Result<(), Error> {
            self.moves += 1;
            Ok(())
        }

        fn down(&mut self, _display: &mut dyn DisplayBackend) -> Result<(), Error> {
            self.moves += 1;
            Ok(())
        }

        fn click(&mut self, _display: &mut dyn DisplayBackend) -> Result<ClickOutcome, Error> {
            Ok(self.outcome)
        }
    }

    #[test]
    fn custom_view_commands_are_delegated() {
        let view = Box::leak(Box::new(CountingView {
            shows: 0,
            moves: 0,
            outcome: ClickOutcome::None,
        }));

        let mut ui = two_level_controller();
        ui.add_view("editor", view).unwrap();
        ui.show("editor").unwrap();
        ui.up().unwrap();
        ui.down().unwrap();
        ui.click().unwrap();
        assert_eq!(ui.active(), Some("editor"));
    }

    #[test]
    fn custom_view_can_navigate_on_click() {
        let view = Box::leak(Box::new(CountingView {
            shows: 0,
            moves: 0,
            outcome: ClickOutcome::Navigate("main"),
        }));

        let mut ui = two_level_controller();
        ui.add_view("about", view).unwrap();
        ui.show("about").unwrap();
        ui.click().unwrap();
        assert_eq!(ui.active(), Some("main"));
    }

    #[test]
    fn custom_view_can_invoke_actions() {
        let view = Box::leak(Box::new(CountingView {
            shows: 0,
            moves: 0,
            outcome: ClickOutcome::Invoke("ping"),
        }));

        let mut ui = Controller::new(TestPanel::new(128, 64));
        ui.bind_action("ping", record_invocation).unwrap();
        ui.add_view("custom", view).unwrap();
        ui.show("custom").unwrap();

        let before = INVOCATIONS.load(Ordering::SeqCst);
        ui.click().unwrap();
        assert_eq!(INVOCATIONS.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn menu_registered_as_custom_view_still_navigates() {
        // A MenuView is itself a View; hosts may register one through
        // add_view when they build it by hand.
        let panel = TestPanel::new(128, 64);
        let menu = MenuView::new(&panel, &[Item::leaf("A"), Item::leaf("B")], None, None).unwrap();
        let menu: &'static mut MenuView = Box::leak(Box::new(menu));

        let mut ui = Controller::new(TestPanel::new(128, 64));
        ui.add_view("standalone", menu).unwrap();
        ui.show("standalone").unwrap();
        ui.down().unwrap();
        ui.click().unwrap();
        assert_eq!(ui.active(), Some("standalone"));
    }
}
