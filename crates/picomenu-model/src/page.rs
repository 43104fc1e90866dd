#![forbid(unsafe_code)]

//! Menu pages: ordered containers of item slots.
//!
//! A page chains its items in a singly-linked list of slot ids in display
//! order. Two coordinate systems index the same chain: *total* counts every
//! linked item, *visible* skips items carrying the hidden flag. Counters
//! for both are maintained eagerly, so counting is O(1) while positional
//! lookups walk the chain.
//!
//! Every page owns a back item. It stays unlinked until a parent page is
//! declared, at which point it is spliced in at the head of the chain and
//! pinned there: it counts in both coordinate systems, cannot be hidden,
//! and cannot be removed. Positional inserts that aim at the head of such
//! a page land directly after it.
//!
//! Pages are reached through [`PageRef`] and [`PageMut`], which pair the
//! owning [`Menu`] with a [`PageId`].

use picomenu_core::ItemFlags;
use picomenu_style::Appearance;

use crate::CountMode;
use crate::menu::{ItemId, Menu, PageId};

/// A page slot: one navigable level of the menu hierarchy.
pub(crate) struct MenuPage {
    /// Title shown above the item rows.
    pub(crate) title: String,
    /// First item in the chain.
    pub(crate) head: Option<ItemId>,
    /// Last item in the chain, kept for O(1) appends.
    pub(crate) tail: Option<ItemId>,
    /// The page-owned back item slot, allocated at registration.
    pub(crate) back_item: ItemId,
    /// Whether the back item has been spliced into the chain.
    pub(crate) back_linked: bool,
    /// Parent page, once declared.
    pub(crate) parent: Option<PageId>,
    /// Focused position among visible items. Held at 0 when none are.
    pub(crate) current_index: usize,
    /// Number of linked items without the hidden flag.
    pub(crate) visible_count: usize,
    /// Number of linked items.
    pub(crate) total_count: usize,
    /// Callback run when the menu is exited from this page.
    pub(crate) exit_action: Option<Box<dyn FnMut()>>,
    /// Per-page appearance override.
    pub(crate) appearance: Option<Appearance>,
}

impl MenuPage {
    pub(crate) fn new(title: String, back_item: ItemId) -> Self {
        Self {
            title,
            head: None,
            tail: None,
            back_item,
            back_linked: false,
            parent: None,
            current_index: 0,
            visible_count: 0,
            total_count: 0,
            exit_action: None,
            appearance: None,
        }
    }
}

impl std::fmt::Debug for MenuPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuPage")
            .field("title", &self.title)
            .field("total_count", &self.total_count)
            .field("visible_count", &self.visible_count)
            .field("current_index", &self.current_index)
            .field("parent", &self.parent)
            .field("back_linked", &self.back_linked)
            .field("has_exit_action", &self.exit_action.is_some())
            .finish_non_exhaustive()
    }
}

/// Shared view of a page.
///
/// Copyable; methods take the handle by value and return data borrowed
/// from the underlying [`Menu`].
#[derive(Debug, Clone, Copy)]
pub struct PageRef<'m> {
    pub(crate) menu: &'m Menu,
    pub(crate) id: PageId,
}

impl<'m> PageRef<'m> {
    fn slot(self) -> &'m MenuPage {
        &self.menu.pages[self.id.index()]
    }

    /// The page this handle points at.
    #[must_use]
    pub fn id(self) -> PageId {
        self.id
    }

    /// Title shown above the item rows.
    #[must_use]
    pub fn title(self) -> &'m str {
        &self.slot().title
    }

    /// Parent page, once declared.
    #[must_use]
    pub fn parent(self) -> Option<PageId> {
        self.slot().parent
    }

    /// Per-page appearance override, if one was set.
    #[must_use]
    pub fn appearance(self) -> Option<Appearance> {
        self.slot().appearance
    }

    /// Whether an exit action is installed on this page.
    #[must_use]
    pub fn has_exit_action(self) -> bool {
        self.slot().exit_action.is_some()
    }

    /// The page-owned back item, once a parent has spliced it in.
    #[must_use]
    pub fn back_item(self) -> Option<ItemId> {
        let page = self.slot();
        page.back_linked.then_some(page.back_item)
    }

    /// Number of linked items in the requested counting mode. O(1).
    #[must_use]
    pub fn items_count(self, mode: CountMode) -> usize {
        let page = self.slot();
        match mode {
            CountMode::Total => page.total_count,
            CountMode::Visible => page.visible_count,
        }
    }

    /// Whether the chain holds no items at all.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.slot().total_count == 0
    }

    /// Iterate item ids in display order, filtered by `mode`.
    pub fn items(self, mode: CountMode) -> Items<'m> {
        Items {
            menu: self.menu,
            next: self.slot().head,
            mode,
        }
    }

    /// Item at `index` in the requested numbering, or `None` out of range.
    #[must_use]
    pub fn item_at(self, index: usize, mode: CountMode) -> Option<ItemId> {
        self.items(mode).nth(index)
    }

    /// Position of `item` on this page in the requested numbering.
    ///
    /// `None` when the item is not linked here, or, in visible mode, when
    /// it is hidden.
    #[must_use]
    pub fn index_of(self, item: ItemId, mode: CountMode) -> Option<usize> {
        let slot = self.menu.items.get(item.index())?;
        if slot.owner != Some(self.id) {
            return None;
        }
        self.items(mode).position(|id| id == item)
    }

    /// The focused item, or `None` when the page has no visible items.
    #[must_use]
    pub fn current_item(self) -> Option<ItemId> {
        self.item_at(self.slot().current_index, CountMode::Visible)
    }

    /// Focused position among visible items.
    ///
    /// Held at 0 while the page has no visible items; pair with
    /// [`current_item`](Self::current_item) to tell that case apart from a
    /// focused first item.
    #[must_use]
    pub fn current_index(self) -> usize {
        self.slot().current_index
    }
}

/// Iterator over a page's item ids in display order.
///
/// This is the one traversal primitive: total mode follows every link,
/// visible mode skips hidden slots. Positional lookups are defined in
/// terms of it.
#[derive(Debug, Clone)]
pub struct Items<'m> {
    menu: &'m Menu,
    next: Option<ItemId>,
    mode: CountMode,
}

impl Iterator for Items<'_> {
    type Item = ItemId;

    fn next(&mut self) -> Option<ItemId> {
        while let Some(id) = self.next {
            let slot = &self.menu.items[id.index()];
            self.next = slot.next;
            if self.mode == CountMode::Total || !slot.is_hidden() {
                return Some(id);
            }
        }
        None
    }
}

/// Exclusive handle to a page, for linking items and moving the focus.
///
/// Configuration methods return `&mut Self` so setup reads as a chain.
/// Linking methods that can be refused keep the chain shape and report
/// nothing; the read side tells the caller what actually happened.
#[derive(Debug)]
pub struct PageMut<'m> {
    pub(crate) menu: &'m mut Menu,
    pub(crate) id: PageId,
}

impl<'m> PageMut<'m> {
    fn slot(&self) -> &MenuPage {
        &self.menu.pages[self.id.index()]
    }

    fn slot_mut(&mut self) -> &mut MenuPage {
        &mut self.menu.pages[self.id.index()]
    }

    /// Reborrow as a shared view.
    #[must_use]
    pub fn as_ref(&self) -> PageRef<'_> {
        PageRef { menu: self.menu, id: self.id }
    }

    /// The page this handle points at.
    #[must_use]
    pub fn id(&self) -> PageId {
        self.id
    }

    /// Title shown above the item rows.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.slot().title
    }

    /// Parent page, once declared.
    #[must_use]
    pub fn parent(&self) -> Option<PageId> {
        self.slot().parent
    }

    /// Number of linked items in the requested counting mode. O(1).
    #[must_use]
    pub fn items_count(&self, mode: CountMode) -> usize {
        self.as_ref().items_count(mode)
    }

    /// Item at `index` in the requested numbering, or `None` out of range.
    #[must_use]
    pub fn item_at(&self, index: usize, mode: CountMode) -> Option<ItemId> {
        self.as_ref().item_at(index, mode)
    }

    /// Position of `item` on this page in the requested numbering.
    #[must_use]
    pub fn index_of(&self, item: ItemId, mode: CountMode) -> Option<usize> {
        self.as_ref().index_of(item, mode)
    }

    /// The focused item, or `None` when the page has no visible items.
    #[must_use]
    pub fn current_item(&self) -> Option<ItemId> {
        self.as_ref().current_item()
    }

    /// Focused position among visible items.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.slot().current_index
    }

    /// The page-owned back item, once a parent has spliced it in.
    #[must_use]
    pub fn back_item(&self) -> Option<ItemId> {
        self.as_ref().back_item()
    }

    /// Replace the page title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.slot_mut().title = title.into();
        self
    }

    /// Install a per-page appearance override.
    pub fn set_appearance(&mut self, appearance: Appearance) -> &mut Self {
        self.slot_mut().appearance = Some(appearance);
        self
    }

    /// Install a callback to run when the menu is exited from this page.
    pub fn set_exit_action(&mut self, action: impl FnMut() + 'static) -> &mut Self {
        self.slot_mut().exit_action = Some(Box::new(action));
        self
    }

    /// Run the page's exit action, if one is installed.
    pub fn trigger_exit(&mut self) -> bool {
        match self.slot_mut().exit_action.as_mut() {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }

    /// Declare `parent` as the page to go back to.
    ///
    /// The first declaration splices the page-owned back item in at the
    /// head of the chain, where it counts in both coordinate systems.
    /// Later declarations only retarget it; the chain shape is unchanged.
    pub fn set_parent(&mut self, parent: PageId) -> &mut Self {
        let back = self.slot().back_item;
        self.slot_mut().parent = Some(parent);
        self.menu.items[back.index()].target = Some(parent);
        if !self.slot().back_linked {
            let head = self.slot().head;
            self.menu.items[back.index()].next = head;
            self.menu.items[back.index()].owner = Some(self.id);
            let page = self.slot_mut();
            page.head = Some(back);
            if page.tail.is_none() {
                page.tail = Some(back);
            }
            page.back_linked = true;
            page.total_count += 1;
            page.visible_count += 1;
            #[cfg(feature = "tracing")]
            tracing::debug!(page = self.id.index(), "back item linked");
        }
        self
    }

    /// Link `item` at the end of the chain. O(1).
    ///
    /// Refused without effect when the item is already linked to a page
    /// (remove it there first) or the id is unknown to this menu.
    pub fn add_menu_item(&mut self, item: ItemId) -> &mut Self {
        let Some(slot) = self.menu.items.get(item.index()) else {
            return self;
        };
        if slot.owner.is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!(item = item.index(), "link refused: already on a page");
            return self;
        }
        self.menu.items[item.index()].next = None;
        match self.slot().tail {
            None => {
                let page = self.slot_mut();
                page.head = Some(item);
                page.tail = Some(item);
            }
            Some(tail) => {
                self.menu.items[tail.index()].next = Some(item);
                self.slot_mut().tail = Some(item);
            }
        }
        self.attach(item);
        self
    }

    /// Link `item` at position `pos` in the numbering given by `mode`.
    ///
    /// `pos` counts existing items only; any position at or past the count
    /// (including [`LAST_POS`](crate::LAST_POS)) appends. In visible mode the item lands
    /// directly before the item currently holding visible position `pos`,
    /// so hidden items between stay ahead of it. When the back item is
    /// linked, position 0 is pinned and the insert lands after it.
    ///
    /// Refused without effect when the item is already linked to a page or
    /// the id is unknown to this menu. The focused index is left alone;
    /// an insert at or before it shifts the focus to a new item rather
    /// than following the old one.
    pub fn insert_menu_item(&mut self, item: ItemId, pos: usize, mode: CountMode) -> &mut Self {
        let Some(slot) = self.menu.items.get(item.index()) else {
            return self;
        };
        if slot.owner.is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!(item = item.index(), "link refused: already on a page");
            return self;
        }
        let mut absolute = self.absolute_pos(pos, mode);
        if absolute == 0 && self.slot().back_linked {
            absolute = 1;
        }
        self.splice(item, absolute);
        self.attach(item);
        self
    }

    /// Translate `pos` in `mode` numbering into an absolute chain index.
    ///
    /// Out-of-range positions translate to the chain length, which makes
    /// the splice append.
    fn absolute_pos(&self, pos: usize, mode: CountMode) -> usize {
        match mode {
            CountMode::Total => pos,
            CountMode::Visible => {
                let mut absolute = 0;
                let mut seen = 0;
                let mut cursor = self.slot().head;
                while let Some(id) = cursor {
                    let slot = &self.menu.items[id.index()];
                    if !slot.is_hidden() {
                        if seen == pos {
                            return absolute;
                        }
                        seen += 1;
                    }
                    absolute += 1;
                    cursor = slot.next;
                }
                absolute
            }
        }
    }

    /// Splice a detached item into the chain at absolute index `absolute`,
    /// clamping to the end.
    fn splice(&mut self, item: ItemId, absolute: usize) {
        match self.slot().head {
            None => {
                self.menu.items[item.index()].next = None;
                let page = self.slot_mut();
                page.head = Some(item);
                page.tail = Some(item);
            }
            Some(head) if absolute == 0 => {
                self.menu.items[item.index()].next = Some(head);
                self.slot_mut().head = Some(item);
            }
            Some(head) => {
                let mut prev = head;
                let mut steps = absolute - 1;
                while steps > 0 {
                    match self.menu.items[prev.index()].next {
                        Some(next) => {
                            prev = next;
                            steps -= 1;
                        }
                        None => break,
                    }
                }
                let after = self.menu.items[prev.index()].next;
                self.menu.items[item.index()].next = after;
                self.menu.items[prev.index()].next = Some(item);
                if after.is_none() {
                    self.slot_mut().tail = Some(item);
                }
            }
        }
    }

    /// Bookkeeping shared by every link path: claim the item and bump the
    /// counters.
    fn attach(&mut self, item: ItemId) {
        let page_id = self.id;
        let slot = &mut self.menu.items[item.index()];
        slot.owner = Some(page_id);
        let hidden = slot.is_hidden();
        let page = self.slot_mut();
        page.total_count += 1;
        if !hidden {
            page.visible_count += 1;
        }
        debug_assert!(page.visible_count <= page.total_count);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            page = page_id.index(),
            item = item.index(),
            total = self.slot().total_count,
            "item linked"
        );
    }

    /// Move the focus to `index`, clamping into the visible range.
    pub fn set_current_index(&mut self, index: usize) -> &mut Self {
        let page = self.slot_mut();
        page.current_index = if page.visible_count == 0 {
            0
        } else {
            index.min(page.visible_count - 1)
        };
        self
    }

    /// Move the focus down one visible item, wrapping at the end.
    pub fn select_next(&mut self) -> &mut Self {
        let page = self.slot_mut();
        if page.visible_count > 0 {
            page.current_index = (page.current_index + 1) % page.visible_count;
        }
        self
    }

    /// Move the focus up one visible item, wrapping at the start.
    pub fn select_previous(&mut self) -> &mut Self {
        let page = self.slot_mut();
        if page.visible_count > 0 {
            page.current_index =
                (page.current_index + page.visible_count - 1) % page.visible_count;
        }
        self
    }

    /// Drop `item` from visible numbering.
    ///
    /// `false` when the item is not on this page, is hidden already, or is
    /// the page-owned back item.
    pub(crate) fn hide_menu_item(&mut self, item: ItemId) -> bool {
        let page_id = self.id;
        let Some(slot) = self.menu.items.get(item.index()) else {
            return false;
        };
        if slot.owner != Some(page_id) || slot.is_hidden() {
            return false;
        }
        if item == self.slot().back_item {
            return false;
        }
        self.menu.items[item.index()].flags.insert(ItemFlags::HIDDEN);
        self.slot_mut().visible_count -= 1;
        self.clamp_current();
        #[cfg(feature = "tracing")]
        tracing::trace!(page = page_id.index(), item = item.index(), "item hidden");
        true
    }

    /// Return `item` to visible numbering at its chain position.
    ///
    /// `false` when the item is not on this page or is not hidden.
    pub(crate) fn show_menu_item(&mut self, item: ItemId) -> bool {
        let page_id = self.id;
        let Some(slot) = self.menu.items.get(item.index()) else {
            return false;
        };
        if slot.owner != Some(page_id) || !slot.is_hidden() {
            return false;
        }
        self.menu.items[item.index()].flags.remove(ItemFlags::HIDDEN);
        self.slot_mut().visible_count += 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(page = page_id.index(), item = item.index(), "item shown");
        true
    }

    /// Unlink `item` from the chain. The slot survives detached and can be
    /// linked onto any page later.
    ///
    /// `false` when the item is not on this page or is the page-owned back
    /// item.
    pub(crate) fn remove_menu_item(&mut self, item: ItemId) -> bool {
        let page_id = self.id;
        let Some(slot) = self.menu.items.get(item.index()) else {
            return false;
        };
        if slot.owner != Some(page_id) {
            return false;
        }
        if item == self.slot().back_item {
            return false;
        }
        let was_hidden = slot.is_hidden();
        let next = slot.next;

        if self.slot().head == Some(item) {
            let page = self.slot_mut();
            page.head = next;
            if page.tail == Some(item) {
                page.tail = None;
            }
        } else {
            let Some(head) = self.slot().head else {
                debug_assert!(false, "linked item on a page with no chain");
                return false;
            };
            let mut prev = head;
            loop {
                match self.menu.items[prev.index()].next {
                    Some(id) if id == item => break,
                    Some(id) => prev = id,
                    None => {
                        debug_assert!(false, "linked item missing from its page chain");
                        return false;
                    }
                }
            }
            self.menu.items[prev.index()].next = next;
            if self.slot().tail == Some(item) {
                self.slot_mut().tail = Some(prev);
            }
        }

        let slot = &mut self.menu.items[item.index()];
        slot.next = None;
        slot.owner = None;

        let page = self.slot_mut();
        page.total_count -= 1;
        if !was_hidden {
            page.visible_count -= 1;
        }
        debug_assert!(page.visible_count <= page.total_count);
        self.clamp_current();
        #[cfg(feature = "tracing")]
        tracing::trace!(page = page_id.index(), item = item.index(), "item unlinked");
        true
    }

    /// Pull the focused index back into the visible range after a shrink.
    fn clamp_current(&mut self) {
        let page = self.slot_mut();
        if page.visible_count == 0 {
            page.current_index = 0;
        } else if page.current_index >= page.visible_count {
            page.current_index = page.visible_count - 1;
        }
    }
}
