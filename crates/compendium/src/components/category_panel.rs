use compendium_core::selection::{CategoryEntry, CategorySelection};
use dioxus::prelude::*;

/// Sidebar listing categories with their counts
#[component]
pub fn CategoryPanel(
    entries: Vec<CategoryEntry>,
    selected: CategorySelection,
    on_select: EventHandler<CategorySelection>,
) -> Element {
    let rows = entries.into_iter().map(|entry| {
        let class = if entry.is_active(&selected) {
            "cp-category cp-category--active"
        } else {
            "cp-category"
        };
        let selection = entry.selection();
        let text = entry.display();

        rsx! {
            li {
                key: "{entry.label}",
                class,
                onclick: move |_| on_select.call(selection.clone()),
                "{text}"
            }
        }
    });

    rsx! {
        aside { class: "cp-categories",
            h2 { class: "cp-section-title", "Categories" }
            ul { class: "cp-category-list", {rows} }
        }
    }
}
