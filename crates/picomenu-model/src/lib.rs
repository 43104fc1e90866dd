#![forbid(unsafe_code)]

//! Page and item containers: the navigable structure of a menu.
//!
//! A [`Menu`] owns every page and item as a slot in an append-only arena
//! and hands out compact copyable ids. Pages keep their items in a
//! singly-linked chain of ids in display order, and two coordinate systems
//! index the same chain: *total* (every linked item) and *visible* (items
//! without the hidden flag). Each page also owns a back item that is
//! spliced in at the head of the chain once a parent page is declared.
//!
//! The model is purely structural. It orders, counts, finds, and focuses
//! items; drawing and value editing live in backends layered on top.
//!
//! # Example
//! ```
//! use picomenu_model::{CountMode, Menu, MenuItem};
//!
//! let mut menu = Menu::new();
//! let main = menu.add_page("Main");
//! let brightness = menu.add_item(MenuItem::value("Brightness"));
//! let reboot = menu.add_item(MenuItem::button("Reboot"));
//! menu.page_mut(main).add_menu_item(brightness).add_menu_item(reboot);
//!
//! assert_eq!(menu.page(main).items_count(CountMode::Total), 2);
//! assert_eq!(menu.page(main).current_item(), Some(brightness));
//! ```

pub mod item;
pub mod menu;
pub mod page;

pub use item::{ItemMut, ItemRef, MenuItem};
pub use menu::{ItemId, Menu, PageId};
pub use page::{Items, PageMut, PageRef};

/// Which items an index or count refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountMode {
    /// Every linked item, hidden ones included.
    Total,
    /// Only items without the hidden flag.
    Visible,
}

/// Position sentinel: link at the end of the chain.
///
/// Any position at or past the current count behaves the same way; this
/// constant just names the intent.
pub const LAST_POS: usize = usize::MAX;
