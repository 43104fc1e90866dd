#![forbid(unsafe_code)]

//! Canonical input events for menu navigation.
//!
//! Menu-driven devices expose a small fixed key set: a five-way pad plus a
//! cancel button, or six discrete buttons, or a rotary encoder mapped onto
//! up/down/ok. Input sources translate whatever hardware they read into
//! these events before handing them to the application loop; the model
//! itself never polls hardware.

/// A discrete navigation key event.
///
/// `Left` and `Right` are part of the vocabulary for the sake of editors
/// layered on top of the model (decrement/increment, cursor movement); the
/// page model itself only reacts to the vertical pair, `Ok`, and `Cancel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move the selection up.
    Up,
    /// Move the selection down.
    Down,
    /// Decrement, or move an edit cursor left.
    Left,
    /// Increment, or move an edit cursor right.
    Right,
    /// Activate the focused item.
    Ok,
    /// Cancel, or navigate back to the parent page.
    Cancel,
}

impl Key {
    /// Whether this key moves the selection within a page.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}
