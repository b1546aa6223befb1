//! Per-section interaction state
//!
//! This module manages the click-toggled and pointer-hover selection
//! slots of the presentation. Each item-space (participants, business
//! models, services) carries at most one active id and at most one
//! hovered id; operations on one space never affect another.
//!
//! The board stores only item ids, never item data; items are opaque
//! keys owned by the content catalog.

use std::collections::HashMap;
use std::fmt;

/// Named category of selectable sub-elements local to one section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemSpace {
    /// Ecosystem participants (bank, middleware, fintech, ...)
    Participant,
    /// BaaS business models (direct, middleware, api-native)
    BusinessModel,
    /// Services in the regulatory scope (accounts, Pix, cards, ...)
    Service,
}

impl ItemSpace {
    /// Stable name used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            ItemSpace::Participant => "participant",
            ItemSpace::BusinessModel => "business-model",
            ItemSpace::Service => "service",
        }
    }
}

impl fmt::Display for ItemSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Active and hovered selection slots, one of each per item-space
///
/// Active selections are click-toggle memory: they persist until
/// re-toggled, including across section changes. Hover is transient
/// pointer state, overwritten on pointer-enter and cleared on
/// pointer-leave.
///
/// # Example
/// ```
/// use baas_deck::domain::selection::{ItemSpace, SelectionBoard};
///
/// let mut board = SelectionBoard::new();
/// board.toggle_active(ItemSpace::Participant, "bank");
/// assert!(board.is_active(ItemSpace::Participant, "bank"));
///
/// // Toggling the same id again deselects it
/// board.toggle_active(ItemSpace::Participant, "bank");
/// assert!(board.active(ItemSpace::Participant).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionBoard {
    active: HashMap<ItemSpace, String>,
    hovered: HashMap<ItemSpace, String>,
}

impl SelectionBoard {
    /// Creates a board with every slot empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Click-toggles the active item of `space`
    ///
    /// If `id` is already the active item it is cleared (toggle-off);
    /// otherwise it becomes the active item, replacing any previous one.
    /// Two consecutive identical calls always restore the prior state.
    pub fn toggle_active(&mut self, space: ItemSpace, id: &str) {
        if self.active.get(&space).is_some_and(|current| current == id) {
            self.active.remove(&space);
        } else {
            self.active.insert(space, id.to_owned());
        }
    }

    /// Overwrites the hovered item of `space`
    ///
    /// `Some(id)` corresponds to pointer-enter, `None` to pointer-leave.
    /// Not a toggle: repeating the same value is a no-op beyond
    /// reaffirming it.
    pub fn set_hover(&mut self, space: ItemSpace, id: Option<&str>) {
        match id {
            Some(id) => {
                self.hovered.insert(space, id.to_owned());
            }
            None => {
                self.hovered.remove(&space);
            }
        }
    }

    /// Clears the hovered item of `space` (pointer-leave)
    pub fn clear_hover(&mut self, space: ItemSpace) {
        self.set_hover(space, None);
    }

    /// Returns the active item id of `space`, if any
    pub fn active(&self, space: ItemSpace) -> Option<&str> {
        self.active.get(&space).map(String::as_str)
    }

    /// Returns the hovered item id of `space`, if any
    pub fn hovered(&self, space: ItemSpace) -> Option<&str> {
        self.hovered.get(&space).map(String::as_str)
    }

    /// Checks whether `id` is the active item of `space`
    pub fn is_active(&self, space: ItemSpace, id: &str) -> bool {
        self.active(space) == Some(id)
    }

    /// Checks whether `id` is the hovered item of `space`
    pub fn is_hovered(&self, space: ItemSpace, id: &str) -> bool {
        self.hovered(space) == Some(id)
    }
}
