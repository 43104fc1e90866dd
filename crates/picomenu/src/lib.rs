#![forbid(unsafe_code)]

//! Picomenu public facade crate.
//!
//! This crate provides the stable surface area for users. It re-exports
//! the menu model, the input vocabulary, and the appearance types from the
//! internal crates, and offers a lightweight prelude for day-to-day usage.
//!
//! There is no error type anywhere in the workspace: lookups that can miss
//! return [`Option`], mutations that can be refused report a `bool`, and
//! out-of-range indices clamp. Nothing here panics on expected absence.
//!
//! # Example
//! ```
//! use picomenu::prelude::*;
//!
//! let mut menu = Menu::new();
//! let main = menu.add_page("Main");
//! let settings = menu.add_sub_page("Settings", main);
//!
//! let contrast = menu.add_item(MenuItem::value("Contrast"));
//! let open = menu.add_item(MenuItem::page_link("Settings", settings));
//! menu.page_mut(main).add_menu_item(contrast).add_menu_item(open);
//!
//! assert_eq!(menu.page(main).items_count(CountMode::Total), 2);
//!
//! // Sub pages carry their back item at the head of the chain.
//! let back = menu.page(settings).item_at(0, CountMode::Total).unwrap();
//! assert_eq!(menu.item(back).kind(), ItemKind::Back);
//! assert_eq!(menu.item(back).target_page(), Some(main));
//! ```

// --- Core re-exports -------------------------------------------------------

pub use picomenu_core::event::Key;
pub use picomenu_core::kind::{ItemFlags, ItemKind};

// --- Model re-exports ------------------------------------------------------

pub use picomenu_model::{
    CountMode, ItemId, ItemMut, ItemRef, Items, LAST_POS, Menu, MenuItem, PageId, PageMut, PageRef,
};

// --- Style re-exports ------------------------------------------------------

pub use picomenu_style::{Appearance, PointerKind};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Appearance, CountMode, ItemId, ItemKind, Key, LAST_POS, Menu, MenuItem, PageId,
        PointerKind,
    };

    pub use crate::{core, model, style};
}

pub use picomenu_core as core;
pub use picomenu_model as model;
pub use picomenu_style as style;
