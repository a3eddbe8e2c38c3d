//! UI components for the Compendium viewer.
//!
//! - `app_shell`: AppBar, StatusFooter, Toast
//! - `search_bar`: search input with clear button
//! - `category_panel`: category list with counts
//! - `item_list`: windowed chip list
//!
//! # Context Providers
//!
//! [`App`] provides the toast and, once the dataset is loaded, [`Catalog`]
//! provides the dataset:
//!
//! ```ignore
//! let dataset = use_dataset();            // immutable items and categories
//! let toast = use_toast();                // Signal<ToastState>
//! ```

mod app_shell;
mod category_panel;
mod item_list;
mod search_bar;

pub use app_shell::{acknowledge, Acknowledgement, AppBar, StatusFooter, Toast, ToastState};
pub use category_panel::CategoryPanel;
pub use item_list::WindowedItemList;
pub use search_bar::SearchBar;

use std::sync::Arc;
use std::time::Duration;

use compendium_core::catalog::sample::sample_dataset;
use compendium_core::catalog::{Dataset, ItemId};
use compendium_core::config::FILTER_LATENCY_MS;
use compendium_core::filter::{run_filter, FilterSupervisor};
use compendium_core::metrics::global_filter_metrics;
use compendium_core::platform::run_blocking;
use compendium_core::selection::{displayed_items, CatalogState, CategorySelection};
use dioxus::logger::tracing::{debug, error, info};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

/// Shared handle to the immutable dataset.
///
/// Two handles are equal when they point at the same dataset.
#[derive(Clone, Debug)]
pub struct DatasetHandle(Arc<Dataset>);

impl DatasetHandle {
    pub fn new(dataset: Dataset) -> Self {
        Self(Arc::new(dataset))
    }

    pub fn shared(&self) -> Arc<Dataset> {
        Arc::clone(&self.0)
    }
}

impl std::ops::Deref for DatasetHandle {
    type Target = Dataset;

    fn deref(&self) -> &Dataset {
        &self.0
    }
}

impl PartialEq for DatasetHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

// Dataset status for UI display
#[derive(Clone, PartialEq)]
pub enum DatasetStatus {
    /// Sample data is being generated
    Loading,
    Ready(DatasetHandle),
    /// Dataset construction failed
    Failed(String),
}

/// Messages for the filter coroutine
pub enum FilterMessage {
    Run(String), // query text
}

// Dataset context provider
pub fn use_dataset() -> DatasetHandle {
    use_context::<DatasetHandle>()
}

// Toast context provider
pub fn use_toast() -> Signal<ToastState> {
    use_context::<Signal<ToastState>>()
}

#[component]
pub fn App() -> Element {
    let mut status = use_signal(|| DatasetStatus::Loading);

    // Bulk generation takes a moment; keep it off the UI thread on desktop
    use_hook(move || {
        spawn(async move {
            match run_blocking(|| sample_dataset().map_err(|e| e.to_string())).await {
                Ok(dataset) => status.set(DatasetStatus::Ready(DatasetHandle::new(dataset))),
                Err(e) => {
                    error!("Failed to build dataset: {}", e);
                    status.set(DatasetStatus::Failed(e));
                }
            }
        });
    });

    let toast = use_signal(ToastState::default);
    use_context_provider(|| toast);

    rsx! {
        div { class: "cp-app",
            {match status() {
                DatasetStatus::Loading => rsx! {
                    AppBar {}
                    main { class: "cp-main cp-main--placeholder", "Loading components…" }
                },
                DatasetStatus::Failed(e) => rsx! {
                    AppBar {}
                    main { class: "cp-main cp-main--placeholder", "Could not load components: {e}" }
                },
                DatasetStatus::Ready(dataset) => rsx! {
                    Catalog { dataset }
                },
            }}
            Toast {}
        }
    }
}

/// Search, category panel and item list over a loaded dataset.
#[component]
pub fn Catalog(dataset: DatasetHandle) -> Element {
    use_context_provider(|| dataset.clone());

    let mut state = use_signal(|| CatalogState::new(dataset.shared()));
    let metrics = use_signal(|| global_filter_metrics().snapshot());

    let filter_task = use_coroutine({
        let dataset = dataset.shared();

        move |mut rx: UnboundedReceiver<FilterMessage>| {
            let dataset = Arc::clone(&dataset);
            async move {
                let latency = Duration::from_millis(FILTER_LATENCY_MS);
                let mut supervisor = FilterSupervisor::new();

                while let Some(msg) = rx.next().await {
                    match msg {
                        FilterMessage::Run(query) => {
                            // Cancels whatever run is still in flight
                            let ticket = supervisor.begin();
                            let dataset = Arc::clone(&dataset);
                            let mut state = state;
                            let mut metrics = metrics;

                            spawn(async move {
                                match run_filter(dataset, &query, ticket.token(), latency).await {
                                    Ok(Some(outcome)) if ticket.is_current() => {
                                        state.write().apply_filter(outcome);
                                    }
                                    Ok(_) => {
                                        debug!(
                                            "Filter #{} for '{}' superseded",
                                            ticket.generation(),
                                            query
                                        );
                                    }
                                    Err(e) => {
                                        // Keep showing the previous result
                                        error!("Filter for '{}' failed: {}", query, e);
                                    }
                                }
                                metrics.set(global_filter_metrics().snapshot());
                            });
                        }
                    }
                }
            }
        }
    });

    // Initial run fills the category counts
    use_hook(|| filter_task.send(FilterMessage::Run(String::new())));

    let search_term = use_memo(move || state.read().search_term().to_string());
    let filtered = use_memo(move || state.read().filtered().clone());
    let selected = use_memo(move || state.read().selected().clone());
    let entries = use_memo(move || state.read().category_entries());
    let displayed = use_memo({
        let dataset = dataset.clone();
        move || displayed_items(&dataset, &filtered.read(), &selected.read())
    });

    let toast = use_toast();

    let on_item_click = {
        let dataset = dataset.clone();
        move |id: ItemId| {
            if let Some(item) = dataset.get(id) {
                info!("Item clicked: {}", item.name);
                acknowledge(toast, format!("You clicked {}", item.name));
            }
        }
    };

    rsx! {
        AppBar {
            SearchBar {
                value: search_term(),
                on_change: move |term: String| {
                    if state.write().set_search_term(term.clone()) {
                        filter_task.send(FilterMessage::Run(term));
                    }
                },
            }
        }

        main { class: "cp-main",
            CategoryPanel {
                entries: entries(),
                selected: selected(),
                on_select: move |selection: CategorySelection| {
                    state.write().select_category(selection);
                },
            }
            WindowedItemList {
                items: displayed(),
                on_item_click,
            }
        }

        StatusFooter {
            displayed: displayed.read().len(),
            total: dataset.len(),
            metrics: metrics(),
        }
    }
}
