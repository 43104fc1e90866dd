#![forbid(unsafe_code)]

//! Slot storage for pages and items.
//!
//! The `Menu` owns every page and item of a hierarchy as a slot in an
//! append-only arena and hands out compact ids:
//!
//! - Compact `PageId`/`ItemId` references (4 bytes) instead of pointers
//! - Slots are registered once and stay valid for the life of the `Menu`
//! - Removal unlinks an item from its page but never frees the slot
//!
//! The no-free rule mirrors the deployment this models: menu-driven
//! firmware allocates its pages and items statically for the life of the
//! program, and "removing" an item only takes it out of the display chain
//! so it can be linked somewhere else later.
//!
//! # Usage
//!
//! ```
//! use picomenu_model::{CountMode, Menu, MenuItem};
//!
//! let mut menu = Menu::new();
//! let main = menu.add_page("Main");
//! let settings = menu.add_sub_page("Settings", main);
//!
//! let contrast = menu.add_item(MenuItem::value("Contrast"));
//! menu.page_mut(settings).add_menu_item(contrast);
//!
//! // The sub page counts its back item plus the linked item.
//! assert_eq!(menu.page(settings).items_count(CountMode::Total), 2);
//! assert_eq!(menu.page(settings).parent(), Some(main));
//! ```

use crate::item::{ItemMut, ItemRef, MenuItem};
use crate::page::{MenuPage, PageMut, PageRef};

/// Identifies a page slot. Stays valid for the life of its [`Menu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(u32);

impl PageId {
    pub(crate) fn new(index: usize) -> Self {
        assert!(index <= u32::MAX as usize, "page arena capacity exceeded");
        Self(index as u32)
    }

    /// Slot index, in page registration order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identifies an item slot. Stays valid for the life of its [`Menu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(u32);

impl ItemId {
    pub(crate) fn new(index: usize) -> Self {
        assert!(index <= u32::MAX as usize, "item arena capacity exceeded");
        Self(index as u32)
    }

    /// Slot index, in item registration order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Slot storage for a whole menu hierarchy.
///
/// Ids issued by one `Menu` are meaningless to another; handing a foreign
/// id to the accessors below may panic or resolve to an unrelated slot.
#[derive(Debug, Default)]
pub struct Menu {
    /// Page slots, in registration order.
    pub(crate) pages: Vec<MenuPage>,
    /// Item slots, in registration order. Back items live here too.
    pub(crate) items: Vec<MenuItem>,
}

impl Menu {
    /// Create an empty menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a menu with pre-allocated arenas.
    ///
    /// Every page owns a back item slot, so `items` should budget one extra
    /// slot per page on top of the application's own items.
    #[must_use]
    pub fn with_capacity(pages: usize, items: usize) -> Self {
        Self {
            pages: Vec::with_capacity(pages),
            items: Vec::with_capacity(items),
        }
    }

    /// Number of registered pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of registered item slots, back items included.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Register a new page and return its id.
    ///
    /// The page allocates its own back item eagerly; the back item stays
    /// unlinked until a parent page is declared.
    pub fn add_page(&mut self, title: impl Into<String>) -> PageId {
        let id = PageId::new(self.pages.len());
        let back = self.add_item(MenuItem::back());
        self.pages.push(MenuPage::new(title.into(), back));
        #[cfg(feature = "tracing")]
        tracing::debug!(page = id.index(), "page registered");
        id
    }

    /// Register a new page and declare `parent` in one step.
    ///
    /// The new page immediately carries its back item at the head of its
    /// chain, targeting `parent`.
    pub fn add_sub_page(&mut self, title: impl Into<String>, parent: PageId) -> PageId {
        let id = self.add_page(title);
        self.page_mut(id).set_parent(parent);
        id
    }

    /// Register an item slot and return its id.
    ///
    /// The item starts detached; link it with
    /// [`PageMut::add_menu_item`](crate::page::PageMut::add_menu_item) or
    /// [`PageMut::insert_menu_item`](crate::page::PageMut::insert_menu_item).
    pub fn add_item(&mut self, item: MenuItem) -> ItemId {
        let id = ItemId::new(self.items.len());
        self.items.push(item);
        id
    }

    /// Shared view of a page.
    #[must_use]
    pub fn page(&self, id: PageId) -> PageRef<'_> {
        PageRef { menu: self, id }
    }

    /// Exclusive handle to a page.
    #[must_use]
    pub fn page_mut(&mut self, id: PageId) -> PageMut<'_> {
        PageMut { menu: self, id }
    }

    /// Shared view of an item.
    #[must_use]
    pub fn item(&self, id: ItemId) -> ItemRef<'_> {
        ItemRef { menu: self, id }
    }

    /// Exclusive handle to an item.
    #[must_use]
    pub fn item_mut(&mut self, id: ItemId) -> ItemMut<'_> {
        ItemMut { menu: self, id }
    }
}
