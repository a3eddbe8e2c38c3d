//! End-to-end tests for the filter → aggregate → select → layout pipeline.
//!
//! These exercise the same sequence the viewer runs on every keystroke:
//! 1. Filtering: supervisor ticket → cancellable scan → category counts
//! 2. State: stale-result guard → category entries → displayed set
//! 3. Layout: row partition → height cache invalidation → render window

use std::sync::Arc;
use std::time::Duration;

use compendium_core::catalog::sample::{generated_dataset, library};
use compendium_core::catalog::{Dataset, DatasetBuilder, Item};
use compendium_core::config::{DEFAULT_ROW_HEIGHT_PX, ITEMS_PER_ROW, OVERSCAN_ROWS};
use compendium_core::filter::{run_filter, FilterSupervisor};
use compendium_core::layout::{render_window, RowHeights, RowPartition, Viewport};
use compendium_core::selection::{CatalogState, CategoryEntry, CategorySelection};

// ============================================================================
// Fixtures
// ============================================================================

fn two_item_dataset() -> Arc<Dataset> {
    Arc::new(
        DatasetBuilder::new()
            .category("Controls")
            .category("Inputs")
            .item(Item::new("Button", ["Controls"]))
            .item(Item::new("Input Field", ["Controls", "Inputs"]))
            .build()
            .expect("valid dataset"),
    )
}

fn entry(label: &str, count: usize) -> CategoryEntry {
    CategoryEntry {
        label: label.to_string(),
        count,
    }
}

fn names(state: &CatalogState) -> Vec<String> {
    let dataset = state.dataset();
    state
        .displayed_items()
        .iter()
        .filter_map(|id| dataset.get(id).map(|item| item.name.clone()))
        .collect()
}

/// Types `query` and applies the completed run, as the viewer does.
async fn search(state: &mut CatalogState, supervisor: &mut FilterSupervisor, query: &str) {
    state.set_search_term(query);
    let ticket = supervisor.begin();
    let outcome = run_filter(
        Arc::clone(state.dataset()),
        query,
        ticket.token(),
        Duration::ZERO,
    )
    .await
    .expect("filter runs")
    .expect("not cancelled");
    assert!(ticket.is_current());
    assert!(state.apply_filter(outcome));
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_query_matches_single_item() {
    let mut state = CatalogState::new(two_item_dataset());
    let mut supervisor = FilterSupervisor::new();

    search(&mut state, &mut supervisor, "but").await;

    assert_eq!(names(&state), vec!["Button"]);
    assert_eq!(state.counts().get("Controls"), 1);
    assert_eq!(state.counts().len(), 1);
    assert_eq!(
        state.category_entries(),
        vec![entry("All results", 1), entry("Controls", 1)]
    );
}

#[tokio::test]
async fn test_empty_query_then_category() {
    let mut state = CatalogState::new(two_item_dataset());
    let mut supervisor = FilterSupervisor::new();

    search(&mut state, &mut supervisor, "but").await;
    search(&mut state, &mut supervisor, "").await;
    state.select_category(CategorySelection::from_label("Inputs"));

    assert_eq!(names(&state), vec!["Input Field"]);
    assert_eq!(
        state.category_entries(),
        vec![entry("All", 2), entry("Controls", 2), entry("Inputs", 1)]
    );
}

#[tokio::test]
async fn test_query_without_matches() {
    let mut state = CatalogState::new(two_item_dataset());
    let mut supervisor = FilterSupervisor::new();

    search(&mut state, &mut supervisor, "xyz").await;

    assert!(state.filtered().is_empty());
    assert!(state.counts().is_empty());
    assert_eq!(state.category_entries(), vec![entry("All results", 0)]);
    assert!(names(&state).is_empty());
}

#[tokio::test]
async fn test_new_search_resets_category() {
    let mut state = CatalogState::new(Arc::new(library().expect("bundled library")));
    let mut supervisor = FilterSupervisor::new();

    search(&mut state, &mut supervisor, "").await;
    state.select_category(CategorySelection::from_label("Charts"));
    assert_eq!(names(&state), vec!["Bar Chart", "Line Chart"]);

    search(&mut state, &mut supervisor, "button").await;
    assert!(state.selected().is_all());
    assert_eq!(
        names(&state),
        vec!["Button", "Radio Button", "Switch Button", "Icon Button"]
    );
}

#[tokio::test]
async fn test_superseded_run_is_never_applied() {
    let dataset = two_item_dataset();
    let mut state = CatalogState::new(Arc::clone(&dataset));
    let mut supervisor = FilterSupervisor::new();

    // q1 is slow; q2 arrives before it completes
    state.set_search_term("b");
    let first = supervisor.begin();
    let slow = run_filter(
        Arc::clone(&dataset),
        "b",
        first.token(),
        Duration::from_secs(30),
    );

    state.set_search_term("inp");
    let second = supervisor.begin();
    let fast = run_filter(Arc::clone(&dataset), "inp", second.token(), Duration::ZERO);

    let (slow, fast) = futures::join!(slow, fast);

    assert!(slow.expect("no failure").is_none());
    assert!(!first.is_current());

    let fast = fast.expect("no failure").expect("completed");
    assert!(second.is_current());
    assert!(state.apply_filter(fast));
    assert_eq!(names(&state), vec!["Input Field"]);
}

#[tokio::test]
async fn test_stale_outcome_rejected_by_state() {
    let dataset = two_item_dataset();
    let mut state = CatalogState::new(Arc::clone(&dataset));
    let mut supervisor = FilterSupervisor::new();

    state.set_search_term("but");
    let ticket = supervisor.begin();
    let outcome = run_filter(Arc::clone(&dataset), "but", ticket.token(), Duration::ZERO)
        .await
        .expect("no failure")
        .expect("completed");

    // The term moved on before the outcome was applied
    state.set_search_term("inp");
    assert!(!state.apply_filter(outcome));
    assert_eq!(state.filtered().len(), 2);
}

#[tokio::test]
async fn test_large_dataset_filter_and_partition() {
    let dataset = Arc::new(generated_dataset(30, 100_000).expect("generated dataset"));
    let mut state = CatalogState::new(Arc::clone(&dataset));
    let mut supervisor = FilterSupervisor::new();

    // "comp9999" matches Comp9999 and Comp99990..=Comp99999
    search(&mut state, &mut supervisor, "comp9999").await;
    assert_eq!(state.filtered().len(), 11);

    state.select_category(CategorySelection::from_label("Category9"));
    let displayed = state.displayed_items();
    // Comp9999 carries Category9 and Category10; of 99990..=99999 the ones
    // with i % 30 == 9 or (i + 1) % 30 == 9 are 99999 and 99998
    assert_eq!(displayed.len(), 3);

    let partition = RowPartition::new(displayed.len(), ITEMS_PER_ROW);
    assert_eq!(partition.row_count(), 1);
    assert_eq!(partition.row_items(&displayed, 0).len(), 3);
}

// ============================================================================
// Layout
// ============================================================================

#[tokio::test]
async fn test_height_cache_follows_displayed_set() {
    let mut state = CatalogState::new(Arc::new(library().expect("bundled library")));
    let mut supervisor = FilterSupervisor::new();
    search(&mut state, &mut supervisor, "").await;

    let mut heights = RowHeights::new(DEFAULT_ROW_HEIGHT_PX);
    let displayed = state.displayed_items();
    let rows = RowPartition::new(displayed.len(), ITEMS_PER_ROW).row_count();
    assert!(heights.sync(displayed.id(), rows));
    heights.record(0, 120);

    // Recomputing the same selection keeps the same set and its measurements
    let again = state.displayed_items();
    assert_eq!(again, displayed);
    assert!(!heights.sync(again.id(), rows));
    assert_eq!(heights.height(0), 120);

    // A category change produces a new set and drops every measurement
    state.select_category(CategorySelection::from_label("Controls"));
    let displayed = state.displayed_items();
    let rows = RowPartition::new(displayed.len(), ITEMS_PER_ROW).row_count();
    assert!(heights.sync(displayed.id(), rows));
    assert!(!heights.is_measured(0));
    assert_eq!(heights.height(0), DEFAULT_ROW_HEIGHT_PX);
}

#[test]
fn test_million_item_window() {
    let items = 1_000_010;
    let partition = RowPartition::new(items, ITEMS_PER_ROW);
    assert_eq!(partition.row_count(), 142_859);
    assert_eq!(partition.row_range(142_858), Some(1_000_006..1_000_010));

    let mut heights = RowHeights::new(DEFAULT_ROW_HEIGHT_PX);
    heights.sync(compendium_core::catalog::ItemSet::empty().id(), partition.row_count());

    let row_px = f64::from(DEFAULT_ROW_HEIGHT_PX);
    let window = render_window(
        &heights,
        Viewport {
            scroll_top: 70_000.0 * row_px,
            height: 10.0 * row_px,
        },
        OVERSCAN_ROWS,
    );
    assert_eq!(window.visible, 70_000..70_010);
    assert_eq!(window.rendered, 69_995..70_015);
}
