#![forbid(unsafe_code)]

//! Item capability tags and packed per-item state.

use bitflags::bitflags;

/// Capability tag for a menu item.
///
/// Drawing backends switch on the kind to decide how a row is rendered and
/// input loops switch on it to decide what activation does. The page model
/// treats all kinds alike except [`Back`](ItemKind::Back), which is owned
/// by its page and pinned to the head of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// An editable value bound by the application.
    Value,
    /// A pick-one-of-a-list item.
    Option,
    /// Navigates to another page on activation.
    PageLink,
    /// Invokes an application action on activation.
    Button,
    /// Navigates to the parent page; injected by the page itself.
    Back,
}

impl ItemKind {
    /// Whether activating an item of this kind changes the current page.
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(self, Self::PageLink | Self::Back)
    }

    /// Whether this is a page-owned back item.
    #[must_use]
    pub const fn is_back(self) -> bool {
        matches!(self, Self::Back)
    }
}

bitflags! {
    /// Packed per-item state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Excluded from visible numbering and from rendering.
        const HIDDEN = 0b0001;
        /// Shown and focusable, but the input loop skips edit mode.
        const READONLY = 0b0010;
    }
}
