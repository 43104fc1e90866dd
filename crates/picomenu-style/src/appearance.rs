#![forbid(unsafe_code)]

//! Per-page layout settings.
//!
//! `Appearance` is a plain bundle of numbers a drawing backend reads when it
//! lays a page out: how the focused row is marked, how many rows fit on one
//! screen, and where the value column starts. The model stores it and hands
//! it back without interpreting any field.
//!
//! # Example
//! ```
//! use picomenu_style::{Appearance, PointerKind};
//!
//! let appearance = Appearance::new()
//!     .with_pointer_kind(PointerKind::Dash)
//!     .with_items_per_screen(4);
//! assert_eq!(appearance.items_per_screen, Some(4));
//! ```

/// How the focused item is marked on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerKind {
    /// Highlight the whole focused row.
    #[default]
    Row,
    /// Draw a dash marker in the left gutter of the focused row.
    Dash,
}

/// Layout settings consumed by the drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    /// Focused-row marker style.
    pub pointer_kind: PointerKind,
    /// Rows drawn per screen; `None` derives the count from display height.
    pub items_per_screen: Option<u8>,
    /// Row height in pixels.
    pub item_height: u8,
    /// Vertical offset of the first row, leaving room for the title.
    pub top_offset: u8,
    /// Column, in pixels, where item values start.
    pub values_left_offset: u8,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            pointer_kind: PointerKind::Row,
            items_per_screen: None,
            item_height: 10,
            top_offset: 10,
            values_left_offset: 86,
        }
    }
}

impl Appearance {
    /// Default layout for a 128x64 display.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the focused-row marker style.
    #[inline]
    #[must_use]
    pub const fn with_pointer_kind(mut self, kind: PointerKind) -> Self {
        self.pointer_kind = kind;
        self
    }

    /// Fix the number of rows per screen instead of deriving it.
    #[inline]
    #[must_use]
    pub const fn with_items_per_screen(mut self, count: u8) -> Self {
        self.items_per_screen = Some(count);
        self
    }

    /// Set the row height in pixels.
    #[inline]
    #[must_use]
    pub const fn with_item_height(mut self, height: u8) -> Self {
        self.item_height = height;
        self
    }

    /// Set the vertical offset of the first row.
    #[inline]
    #[must_use]
    pub const fn with_top_offset(mut self, offset: u8) -> Self {
        self.top_offset = offset;
        self
    }

    /// Set the column where item values start.
    #[inline]
    #[must_use]
    pub const fn with_values_left_offset(mut self, offset: u8) -> Self {
        self.values_left_offset = offset;
        self
    }
}
