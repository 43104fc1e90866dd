//! End-to-end navigation over a small settings hierarchy.
//!
//! These tests drive the model the way a device input loop would: a page
//! pointer, a stream of key events, and activation decided by the focused
//! item's kind. The model never sees the keys; the loop translates them
//! into selection moves and page switches.

use picomenu_core::Key;
use picomenu_model::{CountMode, Menu, MenuItem, PageId};
use std::cell::Cell;
use std::rc::Rc;

/// One step of a device input loop. Returns `true` when the menu was
/// exited from a root page.
fn step(menu: &mut Menu, current: &mut PageId, key: Key) -> bool {
    match key {
        Key::Up => {
            menu.page_mut(*current).select_previous();
        }
        Key::Down => {
            menu.page_mut(*current).select_next();
        }
        Key::Ok => {
            if let Some(item) = menu.page(*current).current_item() {
                let view = menu.item(item);
                if view.kind().is_navigation()
                    && let Some(target) = view.target_page()
                {
                    *current = target;
                }
            }
        }
        Key::Cancel => match menu.page(*current).parent() {
            Some(parent) => *current = parent,
            None => return menu.page_mut(*current).trigger_exit(),
        },
        Key::Left | Key::Right => {}
    }
    false
}

struct Fixture {
    menu: Menu,
    main: PageId,
    settings: PageId,
}

fn fixture() -> Fixture {
    let mut menu = Menu::new();
    let main = menu.add_page("Main");
    let settings = menu.add_sub_page("Settings", main);

    let open = menu.add_item(MenuItem::page_link("Settings", settings));
    let reboot = menu.add_item(MenuItem::button("Reboot"));
    menu.page_mut(main).add_menu_item(open).add_menu_item(reboot);

    let contrast = menu.add_item(MenuItem::value("Contrast"));
    let units = menu.add_item(MenuItem::option("Units"));
    menu.page_mut(settings)
        .add_menu_item(contrast)
        .add_menu_item(units);

    Fixture { menu, main, settings }
}

fn focused_title(menu: &Menu, page: PageId) -> String {
    let item = menu.page(page).current_item().unwrap();
    menu.item(item).title().to_string()
}

#[test]
fn ok_descends_and_the_back_item_ascends() {
    let Fixture { mut menu, main, settings } = fixture();
    let mut current = main;

    // Main opens focused on the page link.
    assert_eq!(focused_title(&menu, current), "Settings");
    step(&mut menu, &mut current, Key::Ok);
    assert_eq!(current, settings);

    // The sub page opens on its back item at visible position 0.
    let focused = menu.page(current).current_item().unwrap();
    assert_eq!(menu.page(current).back_item(), Some(focused));
    assert_eq!(menu.page(current).current_index(), 0);

    // Activating the back item returns to the parent.
    step(&mut menu, &mut current, Key::Ok);
    assert_eq!(current, main);
}

#[test]
fn vertical_keys_walk_the_visible_ring() {
    let Fixture { mut menu, main: _, settings } = fixture();
    let mut current = settings;

    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(focused_title(&menu, current));
        step(&mut menu, &mut current, Key::Down);
    }
    // Back item first (empty title), then the two items, then wrap.
    assert_eq!(seen, ["", "Contrast", "Units", ""]);

    step(&mut menu, &mut current, Key::Up);
    assert_eq!(focused_title(&menu, current), "Units");
}

#[test]
fn cancel_ascends_until_the_root_then_exits() {
    let Fixture { mut menu, main, settings } = fixture();
    let exited = Rc::new(Cell::new(false));
    let hook = Rc::clone(&exited);
    menu.page_mut(main).set_exit_action(move || hook.set(true));

    let mut current = settings;
    assert!(!step(&mut menu, &mut current, Key::Cancel));
    assert_eq!(current, main);
    assert!(!exited.get());

    assert!(step(&mut menu, &mut current, Key::Cancel));
    assert!(exited.get());
    assert_eq!(current, main);
}

#[test]
fn hidden_items_never_surface_while_navigating() {
    let Fixture { mut menu, main: _, settings } = fixture();
    let units = menu.page(settings).item_at(2, CountMode::Total).unwrap();
    assert!(menu.item_mut(units).hide());

    let mut current = settings;
    let mut seen = Vec::new();
    for _ in 0..menu.page(settings).items_count(CountMode::Visible) {
        seen.push(focused_title(&menu, current));
        step(&mut menu, &mut current, Key::Down);
    }
    assert_eq!(seen, ["", "Contrast"]);

    assert!(menu.item_mut(units).show());
    assert_eq!(menu.page(settings).items_count(CountMode::Visible), 3);
    assert_eq!(
        menu.page(settings).item_at(2, CountMode::Visible),
        Some(units)
    );
}

#[test]
fn items_can_migrate_between_pages() {
    let Fixture { mut menu, main, settings } = fixture();
    let units = menu.page(settings).item_at(2, CountMode::Total).unwrap();

    assert!(menu.item_mut(units).remove());
    assert_eq!(menu.item(units).page(), None);
    assert_eq!(menu.page(settings).items_count(CountMode::Total), 2);

    menu.page_mut(main).add_menu_item(units);
    assert_eq!(menu.item(units).page(), Some(main));
    assert_eq!(menu.page(main).items_count(CountMode::Total), 3);
    assert_eq!(menu.page(main).item_at(2, CountMode::Total), Some(units));
}

#[test]
fn left_and_right_are_left_to_editors() {
    let Fixture { mut menu, main, settings: _ } = fixture();
    let mut current = main;
    let before = menu.page(main).current_index();

    assert!(!step(&mut menu, &mut current, Key::Left));
    assert!(!step(&mut menu, &mut current, Key::Right));
    assert_eq!(menu.page(main).current_index(), before);
    assert_eq!(current, main);
}
