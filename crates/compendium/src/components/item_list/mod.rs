//! Windowed chip list.
//!
//! Only the rows intersecting the scroll viewport (plus overscan) are in the
//! DOM. Each row reports its rendered height once mounted; the heights live
//! in a [`RowHeights`] cache bound to the displayed set and are dropped as
//! soon as a different set arrives.

mod chip_row;

use std::cell::RefCell;
use std::rc::Rc;

use compendium_core::catalog::{ItemId, ItemSet, SetId};
use compendium_core::config::{DEFAULT_ROW_HEIGHT_PX, ITEMS_PER_ROW, OVERSCAN_ROWS};
use compendium_core::layout::{render_window, RowHeights, RowPartition, Viewport};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use chip_row::ChipRow;

/// Height reported by a mounted row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowMeasurement {
    pub set_id: SetId,
    pub row: usize,
    pub height: u32,
}

/// Virtualized list of item chips, [`ITEMS_PER_ROW`] per row
#[component]
pub fn WindowedItemList(items: ItemSet, on_item_click: EventHandler<ItemId>) -> Element {
    let heights = use_hook(|| Rc::new(RefCell::new(RowHeights::new(DEFAULT_ROW_HEIGHT_PX))));
    let mut layout_version = use_signal(|| 0u64);
    let mut viewport = use_signal(Viewport::default);

    let on_measured = use_callback({
        let heights = Rc::clone(&heights);
        move |measurement: RowMeasurement| {
            let changed = {
                heights
                    .borrow_mut()
                    .record_for(measurement.set_id, measurement.row, measurement.height)
            };
            if changed {
                *layout_version.write() += 1;
            }
        }
    });

    // Subscribe so that a measurement re-runs the layout below
    let _version = layout_version();

    let partition = RowPartition::new(items.len(), ITEMS_PER_ROW);
    let (rows, total_height) = {
        let mut cache = heights.borrow_mut();
        if cache.sync(items.id(), partition.row_count()) {
            debug!(
                "Displayed set changed: {} items in {} rows",
                items.len(),
                partition.row_count()
            );
        }
        let window = render_window(&cache, viewport(), OVERSCAN_ROWS);
        let rows: Vec<(usize, u64, bool, Vec<ItemId>)> = window
            .rendered
            .map(|row| {
                let ids = partition.row_items(&items, row).to_vec();
                (row, cache.offset_of(row), cache.is_measured(row), ids)
            })
            .collect();
        (rows, cache.total_height())
    };
    let set_id = items.id();

    rsx! {
        section { class: "cp-items",
            h2 { class: "cp-section-title", "Components" }
            if items.is_empty() {
                div { class: "cp-items-empty", "No components match your search." }
            }
            div {
                class: "cp-viewport",
                onmounted: move |evt: MountedEvent| async move {
                    if let Ok(rect) = evt.get_client_rect().await {
                        viewport.write().height = rect.size.height;
                    }
                },
                onscroll: move |evt: Event<ScrollData>| {
                    viewport.set(Viewport {
                        scroll_top: evt.scroll_top(),
                        height: f64::from(evt.client_height()),
                    });
                },
                div { class: "cp-spacer", style: "height: {total_height}px;",
                    for (row, top, measured, ids) in rows {
                        ChipRow {
                            key: "{set_id.as_u64()}-{row}",
                            set_id,
                            row,
                            top,
                            measured,
                            ids,
                            on_measured,
                            on_item_click,
                        }
                    }
                }
            }
        }
    }
}
