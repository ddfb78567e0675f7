//! Menu item model
//!
//! A menu row is either a leaf (optionally bound to a host action) or a
//! link to another registered view. Rendering code only ever needs the
//! label, so the accessor is uniform across variants.

use heapless::String;

/// Maximum label length in characters (one full row on a 128 px panel
/// at 6 px per glyph)
pub const MAX_LABEL_LEN: usize = 21;

/// Identifier of a registered view
pub type ViewId = &'static str;

/// Identifier of a host action handler
pub type ActionId = &'static str;

/// One menu row
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Item {
    /// Plain row; clicking invokes the bound action, if any
    Leaf {
        label: String<MAX_LABEL_LEN>,
        action: Option<ActionId>,
    },
    /// Row that switches to another registered view on click
    Link {
        label: String<MAX_LABEL_LEN>,
        target: ViewId,
    },
}

impl Item {
    /// Create a leaf row with no bound action
    pub fn leaf(label: &str) -> Self {
        Self::Leaf {
            label: clipped(label),
            action: None,
        }
    }

    /// Create a leaf row bound to a host action
    pub fn action(label: &str, action: ActionId) -> Self {
        Self::Leaf {
            label: clipped(label),
            action: Some(action),
        }
    }

    /// Create a link row jumping to `target`
    pub fn link(label: &str, target: ViewId) -> Self {
        Self::Link {
            label: clipped(label),
            target,
        }
    }

    /// Text shown for this row, independent of variant
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf { label, .. } | Self::Link { label, .. } => label.as_str(),
        }
    }

    /// Target view id if this row is a link
    pub fn target(&self) -> Option<ViewId> {
        match self {
            Self::Link { target, .. } => Some(target),
            Self::Leaf { .. } => None,
        }
    }

    /// Bound action id if this row is a leaf with an action
    pub fn bound_action(&self) -> Option<ActionId> {
        match self {
            Self::Leaf { action, .. } => *action,
            Self::Link { .. } => None,
        }
    }
}

/// Copy a label into bounded storage, truncating past `MAX_LABEL_LEN`
fn clipped(label: &str) -> String<MAX_LABEL_LEN> {
    debug_assert!(!label.is_empty());
    let mut out = String::new();
    let _ = out.push_str(&label[..label.len().min(MAX_LABEL_LEN)]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_uniform_across_variants() {
        assert_eq!(Item::leaf("Status").label(), "Status");
        assert_eq!(Item::action("Beep", "beep").label(), "Beep");
        assert_eq!(Item::link("Settings", "settings").label(), "Settings");
    }

    #[test]
    fn long_labels_are_truncated() {
        let item = Item::leaf("a very long label that cannot fit");
        assert_eq!(item.label().len(), MAX_LABEL_LEN);
    }

    #[test]
    fn tag_accessors() {
        let leaf = Item::leaf("A");
        assert_eq!(leaf.target(), None);
        assert_eq!(leaf.bound_action(), None);

        let bound = Item::action("B", "do-b");
        assert_eq!(bound.bound_action(), Some("do-b"));
        assert_eq!(bound.target(), None);

        let link = Item::link("C", "sub");
        assert_eq!(link.target(), Some("sub"));
        assert_eq!(link.bound_action(), None);
    }
}
