//! Paginated menu view
//!
//! One scrollable list of items with selection and page state. The view
//! owns all rendering of itself through the [`DisplayBackend`] contract;
//! same-page moves toggle the highlight band only, page changes and
//! wraparounds redraw the full screen. The distinction matters on slow
//! panels where a clear on every step flickers visibly.

use heapless::{String, Vec};

use crate::error::Error;
use crate::item::{ActionId, Item, ViewId, MAX_LABEL_LEN};
use crate::traits::display::DisplayBackend;
use crate::traits::view::{ClickOutcome, View};

/// Pixel height of one item row
pub const ROW_HEIGHT: u16 = 10;

/// Vertical space reserved above the list when a headline is shown
pub const HEADLINE_MARGIN: u16 = 16;

/// Maximum items per menu, auto-appended back link included
pub const MAX_ITEMS: usize = 16;

/// One paginated, selectable menu screen
pub struct MenuView {
    items: Vec<Item, MAX_ITEMS>,
    headline: Option<String<MAX_LABEL_LEN>>,
    parent: Option<ViewId>,
    next_page_hint: Option<String<MAX_LABEL_LEN>>,
    width: u16,
    top_margin: u16,
    page_size: usize,
    selected: usize,
    page: usize,
}

impl MenuView {
    /// Build a menu for the given display
    ///
    /// The item slice is copied; the caller's storage is never aliased.
    /// When `parent` is given, a trailing "back" link to it is appended
    /// exactly once, here and never again. Fails when the display is too
    /// short to fit a single row below the headline, when `items` is
    /// empty, or when it exceeds [`MAX_ITEMS`].
    pub fn new(
        display: &dyn DisplayBackend,
        items: &[Item],
        headline: Option<&str>,
        parent: Option<ViewId>,
    ) -> Result<Self, Error> {
        if items.is_empty() {
            return Err(Error::EmptyMenu);
        }

        let mut owned: Vec<Item, MAX_ITEMS> = Vec::new();
        for item in items {
            owned.push(item.clone()).map_err(|_| Error::TooManyItems)?;
        }
        if let Some(parent_id) = parent {
            owned
                .push(Item::link("back", parent_id))
                .map_err(|_| Error::TooManyItems)?;
        }

        // Dimensions are queried once; the controller lends the same
        // display for every later command.
        let top_margin = if headline.is_some() { HEADLINE_MARGIN } else { 0 };
        let page_size = (display.height().saturating_sub(top_margin) / ROW_HEIGHT) as usize;
        if page_size == 0 {
            return Err(Error::DisplayTooSmall);
        }

        Ok(Self {
            items: owned,
            headline: headline.map(copy_label),
            parent,
            next_page_hint: None,
            width: display.width(),
            top_margin,
            page_size,
            selected: 0,
            page: 0,
        })
    }

    /// Full redraw of the current page
    ///
    /// The only operation that clears the whole screen.
    pub fn show(&mut self, display: &mut dyn DisplayBackend) -> Result<(), Error> {
        display.clear()?;

        // Margin tracks the headline even when it was toggled after
        // construction; the page size does not.
        self.top_margin = if self.headline.is_some() {
            HEADLINE_MARGIN
        } else {
            0
        };
        if let Some(headline) = &self.headline {
            display.draw_text(0, 0, headline, false)?;
        }

        let first = self.page * self.page_size;
        for (offset, item) in self
            .items
            .iter()
            .skip(first)
            .take(self.page_size)
            .enumerate()
        {
            let y = self.top_margin + offset as u16 * ROW_HEIGHT + 1;
            display.draw_text(1, y, item.label(), false)?;
        }

        // More items follow below this page; hint at them one row band
        // under the last item (backends clip on tight panels).
        if first + self.page_size < self.items.len() {
            if let Some(hint) = &self.next_page_hint {
                let y = self.top_margin + self.page_size as u16 * ROW_HEIGHT + 1;
                display.draw_text(1, y, hint, false)?;
            }
        }

        self.select_row(display)?;
        display.flush()?;
        Ok(())
    }

    /// Move the selection down one row
    pub fn down(&mut self, display: &mut dyn DisplayBackend) -> Result<(), Error> {
        self.deselect_row(display)?;

        if self.selected + 1 == self.items.len() {
            // Wrap to the first item on the first page.
            self.selected = 0;
            self.page = 0;
            return self.show(display);
        }

        self.selected += 1;
        if self.selected == (self.page + 1) * self.page_size {
            // Fell onto the first row of the next page.
            self.page += 1;
            return self.show(display);
        }

        self.select_row(display)?;
        display.flush()?;
        Ok(())
    }

    /// Move the selection up one row
    pub fn up(&mut self, display: &mut dyn DisplayBackend) -> Result<(), Error> {
        self.deselect_row(display)?;

        if self.selected == 0 {
            // Wrap to the last item on the last page.
            self.page = (self.items.len() - 1) / self.page_size;
            self.selected = self.items.len() - 1;
            return self.show(display);
        }

        if self.selected == self.page * self.page_size {
            // Leaving the top row of this page.
            self.page -= 1;
            self.selected -= 1;
            return self.show(display);
        }

        self.selected -= 1;
        self.select_row(display)?;
        display.flush()?;
        Ok(())
    }

    /// Action bound to the selected row, if any
    ///
    /// Link rows are the controller's business and report nothing here.
    pub fn click(&self) -> Option<ActionId> {
        self.items
            .get(self.selected)
            .and_then(|item| item.bound_action())
    }

    /// Invert-highlight the selected row
    fn select_row(&self, display: &mut dyn DisplayBackend) -> Result<(), Error> {
        let Some(item) = self.items.get(self.selected) else {
            return Ok(());
        };
        let y = self.row_y(self.selected);
        display.fill_rect(0, y, self.width, ROW_HEIGHT - 1, true)?;
        display.draw_text(1, y + 1, item.label(), true)?;
        Ok(())
    }

    /// Restore the selected row to normal colors
    fn deselect_row(&self, display: &mut dyn DisplayBackend) -> Result<(), Error> {
        let Some(item) = self.items.get(self.selected) else {
            return Ok(());
        };
        let y = self.row_y(self.selected);
        display.fill_rect(0, y, self.width, ROW_HEIGHT - 1, false)?;
        display.draw_text(1, y + 1, item.label(), false)?;
        Ok(())
    }

    /// Top pixel row of an item's on-page band
    fn row_y(&self, index: usize) -> u16 {
        self.top_margin + (index - self.page * self.page_size) as u16 * ROW_HEIGHT
    }

    /// Currently selected item
    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected)
    }

    /// Index of the selected item
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Current page
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page, fixed at construction
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// All items in display order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Parent view id, when this menu was built as a submenu
    pub fn parent(&self) -> Option<ViewId> {
        self.parent
    }

    /// Replace or remove the headline; takes effect on the next full redraw
    pub fn set_headline(&mut self, headline: Option<&str>) {
        self.headline = headline.map(copy_label);
    }

    /// Text hinting at further items, drawn below a full page
    pub fn set_next_page_hint(&mut self, hint: &str) {
        self.next_page_hint = Some(copy_label(hint));
    }
}

impl View for MenuView {
    fn show(&mut self, display: &mut dyn DisplayBackend) -> Result<(), Error> {
        MenuView::show(self, display)
    }

    fn up(&mut self, display: &mut dyn DisplayBackend) -> Result<(), Error> {
        MenuView::up(self, display)
    }

    fn down(&mut self, display: &mut dyn DisplayBackend) -> Result<(), Error> {
        MenuView::down(self, display)
    }

    fn click(&mut self, _display: &mut dyn DisplayBackend) -> Result<ClickOutcome, Error> {
        Ok(match MenuView::click(self) {
            Some(action) => ClickOutcome::Invoke(action),
            None => ClickOutcome::None,
        })
    }
}

fn copy_label(text: &str) -> String<MAX_LABEL_LEN> {
    let mut out = String::new();
    let _ = out.push_str(&text[..text.len().min(MAX_LABEL_LEN)]);
    out
}
