use compendium_core::catalog::{ItemId, SetId};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::RowMeasurement;
use crate::components::use_dataset;

/// One absolutely positioned row of chips.
///
/// Reports its height once mounted, unless the cache already holds a
/// measurement for this row (a row scrolled back into view).
#[component]
pub fn ChipRow(
    set_id: SetId,
    row: usize,
    top: u64,
    measured: bool,
    ids: Vec<ItemId>,
    on_measured: EventHandler<RowMeasurement>,
    on_item_click: EventHandler<ItemId>,
) -> Element {
    let dataset = use_dataset();

    let chips = ids.into_iter().map(|id| {
        let name = dataset
            .get(id)
            .map(|item| item.name.clone())
            .unwrap_or_default();

        rsx! {
            button {
                key: "{id.index()}",
                class: "cp-chip",
                onclick: move |_| on_item_click.call(id),
                "{name}"
            }
        }
    });

    rsx! {
        div {
            class: "cp-row",
            style: "top: {top}px;",
            onmounted: move |evt: MountedEvent| async move {
                if measured {
                    return;
                }
                match evt.get_client_rect().await {
                    Ok(rect) => on_measured.call(RowMeasurement {
                        set_id,
                        row,
                        height: rect.size.height.ceil() as u32,
                    }),
                    Err(e) => debug!("Could not measure row {}: {:?}", row, e),
                }
            },
            {chips}
        }
    }
}
