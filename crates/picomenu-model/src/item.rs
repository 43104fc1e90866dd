#![forbid(unsafe_code)]

//! Menu items: the slots a page chains together.
//!
//! Items are built with the kind constructors, registered with
//! [`Menu::add_item`], and linked onto a page by id. The model attaches no
//! editing semantics to a kind: a `Value` item is whatever the application
//! renders and edits for it, the model only orders, counts, and finds it.

use picomenu_core::{ItemFlags, ItemKind};

use crate::CountMode;
use crate::menu::{ItemId, Menu, PageId};
use crate::page::PageMut;

/// One menu item slot.
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Label shown on the item's row.
    pub(crate) title: String,
    /// Capability tag.
    pub(crate) kind: ItemKind,
    /// Packed hidden/read-only state.
    pub(crate) flags: ItemFlags,
    /// Next item in the owning page's chain.
    pub(crate) next: Option<ItemId>,
    /// Page currently holding this item, if any.
    pub(crate) owner: Option<PageId>,
    /// Destination page for `PageLink` and `Back` items.
    pub(crate) target: Option<PageId>,
}

impl MenuItem {
    fn new(title: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            title: title.into(),
            kind,
            flags: ItemFlags::empty(),
            next: None,
            owner: None,
            target: None,
        }
    }

    /// An editable value bound by the application.
    pub fn value(title: impl Into<String>) -> Self {
        Self::new(title, ItemKind::Value)
    }

    /// A pick-one-of-a-list item.
    pub fn option(title: impl Into<String>) -> Self {
        Self::new(title, ItemKind::Option)
    }

    /// An action item.
    pub fn button(title: impl Into<String>) -> Self {
        Self::new(title, ItemKind::Button)
    }

    /// A link that navigates to `target` on activation.
    pub fn page_link(title: impl Into<String>, target: PageId) -> Self {
        let mut item = Self::new(title, ItemKind::PageLink);
        item.target = Some(target);
        item
    }

    /// The page-owned back item. Pages build their own on registration;
    /// there is no public constructor for this kind.
    pub(crate) fn back() -> Self {
        Self::new("", ItemKind::Back)
    }

    /// Start hidden (or not). Honored when the item is first linked.
    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.flags.set(ItemFlags::HIDDEN, hidden);
        self
    }

    /// Mark read-only: focusable, but the input loop skips edit mode.
    #[must_use]
    pub fn readonly(mut self, readonly: bool) -> Self {
        self.flags.set(ItemFlags::READONLY, readonly);
        self
    }

    pub(crate) fn is_hidden(&self) -> bool {
        self.flags.contains(ItemFlags::HIDDEN)
    }
}

/// Shared view of an item slot.
#[derive(Debug, Clone, Copy)]
pub struct ItemRef<'m> {
    pub(crate) menu: &'m Menu,
    pub(crate) id: ItemId,
}

impl<'m> ItemRef<'m> {
    fn slot(self) -> &'m MenuItem {
        &self.menu.items[self.id.index()]
    }

    /// The item this handle points at.
    #[must_use]
    pub fn id(self) -> ItemId {
        self.id
    }

    /// Label shown on the item's row.
    #[must_use]
    pub fn title(self) -> &'m str {
        &self.slot().title
    }

    /// Capability tag.
    #[must_use]
    pub fn kind(self) -> ItemKind {
        self.slot().kind
    }

    /// Packed hidden/read-only state.
    #[must_use]
    pub fn flags(self) -> ItemFlags {
        self.slot().flags
    }

    /// Whether the item is excluded from visible numbering.
    #[must_use]
    pub fn is_hidden(self) -> bool {
        self.slot().is_hidden()
    }

    /// Whether the input loop should skip edit mode for this item.
    #[must_use]
    pub fn is_readonly(self) -> bool {
        self.slot().flags.contains(ItemFlags::READONLY)
    }

    /// Page currently holding this item.
    #[must_use]
    pub fn page(self) -> Option<PageId> {
        self.slot().owner
    }

    /// Destination page for `PageLink` and `Back` items.
    #[must_use]
    pub fn target_page(self) -> Option<PageId> {
        self.slot().target
    }

    /// Next sibling in display order, or `None` at the end of the chain.
    ///
    /// Visible mode skips hidden successors.
    #[must_use]
    pub fn next(self, mode: CountMode) -> Option<ItemId> {
        let mut cursor = self.slot().next;
        while let Some(id) = cursor {
            let slot = &self.menu.items[id.index()];
            if mode == CountMode::Total || !slot.is_hidden() {
                return Some(id);
            }
            cursor = slot.next;
        }
        None
    }
}

/// Exclusive handle to an item slot.
///
/// Visibility changes route through the owning page so its counters and
/// selection stay coherent; on a detached item they just flip the flag.
#[derive(Debug)]
pub struct ItemMut<'m> {
    pub(crate) menu: &'m mut Menu,
    pub(crate) id: ItemId,
}

impl<'m> ItemMut<'m> {
    /// Reborrow as a shared view.
    #[must_use]
    pub fn as_ref(&self) -> ItemRef<'_> {
        ItemRef { menu: self.menu, id: self.id }
    }

    /// The item this handle points at.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Label shown on the item's row.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.menu.items[self.id.index()].title
    }

    /// Whether the item is excluded from visible numbering.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.menu.items[self.id.index()].is_hidden()
    }

    /// Replace the item's label.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.menu.items[self.id.index()].title = title.into();
        self
    }

    /// Set or clear the read-only flag.
    pub fn set_readonly(&mut self, readonly: bool) -> &mut Self {
        self.menu.items[self.id.index()]
            .flags
            .set(ItemFlags::READONLY, readonly);
        self
    }

    /// Hide this item, dropping it from visible numbering.
    ///
    /// `false` when it is hidden already or is a page-owned back item.
    pub fn hide(&mut self) -> bool {
        match self.menu.items[self.id.index()].owner {
            Some(page) => PageMut { menu: &mut *self.menu, id: page }.hide_menu_item(self.id),
            None => {
                let slot = &mut self.menu.items[self.id.index()];
                if slot.is_hidden() {
                    false
                } else {
                    slot.flags.insert(ItemFlags::HIDDEN);
                    true
                }
            }
        }
    }

    /// Return this item to visible numbering.
    ///
    /// `false` when it is not hidden.
    pub fn show(&mut self) -> bool {
        match self.menu.items[self.id.index()].owner {
            Some(page) => PageMut { menu: &mut *self.menu, id: page }.show_menu_item(self.id),
            None => {
                let slot = &mut self.menu.items[self.id.index()];
                if slot.is_hidden() {
                    slot.flags.remove(ItemFlags::HIDDEN);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Unlink this item from its page. The slot survives and can be linked
    /// onto another page later.
    ///
    /// `false` when the item is detached already or is a page-owned back
    /// item.
    pub fn remove(self) -> bool {
        match self.menu.items[self.id.index()].owner {
            Some(page) => PageMut { menu: self.menu, id: page }.remove_menu_item(self.id),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Menu;

    #[test]
    fn constructors_tag_their_kind() {
        let mut menu = Menu::new();
        let target = menu.add_page("Target");

        assert_eq!(MenuItem::value("Contrast").kind, ItemKind::Value);
        assert_eq!(MenuItem::option("Units").kind, ItemKind::Option);
        assert_eq!(MenuItem::button("Reboot").kind, ItemKind::Button);

        let link = MenuItem::page_link("Settings", target);
        assert_eq!(link.kind, ItemKind::PageLink);
        assert_eq!(link.target, Some(target));

        let back = MenuItem::back();
        assert_eq!(back.kind, ItemKind::Back);
        assert_eq!(back.title, "");
    }

    #[test]
    fn builder_flags() {
        let item = MenuItem::value("Debug level").hidden(true).readonly(true);
        assert!(item.flags.contains(ItemFlags::HIDDEN));
        assert!(item.flags.contains(ItemFlags::READONLY));

        let plain = MenuItem::value("Contrast").hidden(false);
        assert!(plain.flags.is_empty());
    }

    #[test]
    fn item_ref_reads_the_slot() {
        let mut menu = Menu::new();
        let page = menu.add_page("Main");
        let id = menu.add_item(MenuItem::value("Contrast").readonly(true));
        menu.page_mut(page).add_menu_item(id);

        let item = menu.item(id);
        assert_eq!(item.title(), "Contrast");
        assert_eq!(item.kind(), ItemKind::Value);
        assert!(item.is_readonly());
        assert!(!item.is_hidden());
        assert_eq!(item.page(), Some(page));
        assert_eq!(item.target_page(), None);
    }

    #[test]
    fn next_skips_hidden_siblings_in_visible_mode() {
        let mut menu = Menu::new();
        let page = menu.add_page("Main");
        let a = menu.add_item(MenuItem::value("A"));
        let b = menu.add_item(MenuItem::value("B").hidden(true));
        let c = menu.add_item(MenuItem::value("C"));
        menu.page_mut(page)
            .add_menu_item(a)
            .add_menu_item(b)
            .add_menu_item(c);

        assert_eq!(menu.item(a).next(CountMode::Total), Some(b));
        assert_eq!(menu.item(a).next(CountMode::Visible), Some(c));
        assert_eq!(menu.item(c).next(CountMode::Total), None);
        assert_eq!(menu.item(c).next(CountMode::Visible), None);
    }

    #[test]
    fn set_title_and_readonly_are_fluent() {
        let mut menu = Menu::new();
        let id = menu.add_item(MenuItem::value("Contrast"));
        menu.item_mut(id).set_title("Brightness").set_readonly(true);
        assert_eq!(menu.item(id).title(), "Brightness");
        assert!(menu.item(id).is_readonly());
    }

    #[test]
    fn detached_items_toggle_their_flag_directly() {
        let mut menu = Menu::new();
        let id = menu.add_item(MenuItem::value("Contrast"));

        assert!(menu.item_mut(id).hide());
        assert!(menu.item(id).is_hidden());
        assert!(!menu.item_mut(id).hide());

        assert!(menu.item_mut(id).show());
        assert!(!menu.item(id).is_hidden());
        assert!(!menu.item_mut(id).show());
    }

    #[test]
    fn removing_a_detached_item_is_refused() {
        let mut menu = Menu::new();
        let id = menu.add_item(MenuItem::value("Contrast"));
        assert!(!menu.item_mut(id).remove());
    }
}
