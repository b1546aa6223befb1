//! Input intents
//!
//! The hosting input layer translates user gestures into these intents
//! and feeds them to `Session::apply`: a click on a navigation button
//! becomes `SelectSection`, a click on an item `ToggleItem`, pointer
//! enter/leave become `HoverItem`/`UnhoverItem`, the playback button
//! `TogglePlay`. Every intent is total: there is no invalid input to
//! reject, only values to clamp or toggles to apply.

use crate::domain::selection::ItemSpace;

/// One discrete user intention against the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Jump to a section by index (clamped into the deck's range)
    SelectSection(usize),
    /// Step to the following section (clamped at the last)
    NextSection,
    /// Step to the preceding section (clamped at the first)
    PreviousSection,
    /// Click-toggle an item's active selection
    ToggleItem { space: ItemSpace, id: String },
    /// Pointer entered an item
    HoverItem { space: ItemSpace, id: String },
    /// Pointer left whatever was hovered in the space
    UnhoverItem { space: ItemSpace },
    /// Flip the play/pause switch
    TogglePlay,
}
