//! Benchmarks for page chain operations.
//!
//! Run with: cargo bench -p picomenu-model

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use picomenu_model::{CountMode, Menu, MenuItem};
use std::hint::black_box;

// ============================================================================
// Building a page
// ============================================================================

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("page/build");

    for count in [8usize, 64, 512] {
        group.bench_with_input(BenchmarkId::new("append", count), &count, |b, &count| {
            b.iter(|| {
                let mut menu = Menu::with_capacity(1, count + 1);
                let page = menu.add_page("Main");
                for _ in 0..count {
                    let item = menu.add_item(MenuItem::value("item"));
                    menu.page_mut(page).add_menu_item(item);
                }
                black_box(menu.page(page).items_count(CountMode::Total))
            })
        });

        group.bench_with_input(
            BenchmarkId::new("insert_head", count),
            &count,
            |b, &count| {
                b.iter(|| {
                    let mut menu = Menu::with_capacity(1, count + 1);
                    let page = menu.add_page("Main");
                    for _ in 0..count {
                        let item = menu.add_item(MenuItem::value("item"));
                        menu.page_mut(page).insert_menu_item(item, 0, CountMode::Total);
                    }
                    black_box(menu.page(page).items_count(CountMode::Total))
                })
            },
        );
    }

    group.finish();
}

// ============================================================================
// Lookups
// ============================================================================

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("page/lookup");

    for count in [8usize, 64, 512] {
        let mut menu = Menu::with_capacity(1, count + 1);
        let page = menu.add_page("Main");
        let mut middle = None;
        for index in 0..count {
            let item = menu.add_item(MenuItem::value("item").hidden(index % 3 == 0));
            menu.page_mut(page).add_menu_item(item);
            if index == count / 2 {
                middle = Some(item);
            }
        }
        let middle = middle.unwrap();

        group.bench_with_input(BenchmarkId::new("item_at_visible", count), &(), |b, _| {
            let target = menu.page(page).items_count(CountMode::Visible) / 2;
            b.iter(|| black_box(menu.page(page).item_at(target, CountMode::Visible)))
        });

        group.bench_with_input(BenchmarkId::new("index_of_total", count), &(), |b, _| {
            b.iter(|| black_box(menu.page(page).index_of(middle, CountMode::Total)))
        });

        group.bench_with_input(BenchmarkId::new("counts", count), &(), |b, _| {
            b.iter(|| {
                black_box(menu.page(page).items_count(CountMode::Total));
                black_box(menu.page(page).items_count(CountMode::Visible))
            })
        });
    }

    group.finish();
}

// ============================================================================
// Visibility churn
// ============================================================================

fn bench_visibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("page/visibility");

    for count in [8usize, 64, 512] {
        group.bench_with_input(
            BenchmarkId::new("hide_show_all", count),
            &count,
            |b, &count| {
                let mut menu = Menu::with_capacity(1, count + 1);
                let page = menu.add_page("Main");
                let items: Vec<_> = (0..count)
                    .map(|_| {
                        let item = menu.add_item(MenuItem::value("item"));
                        menu.page_mut(page).add_menu_item(item);
                        item
                    })
                    .collect();

                b.iter(|| {
                    for item in &items {
                        menu.item_mut(*item).hide();
                    }
                    for item in &items {
                        menu.item_mut(*item).show();
                    }
                    black_box(menu.page(page).items_count(CountMode::Visible))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_lookup, bench_visibility);
criterion_main!(benches);
