//! Search and category selection state.
//!
//! [`CatalogState`] is the state machine over `(search_term, selected
//! category)` plus the latest filter result. Its derivations feed the
//! category panel ([`CatalogState::category_entries`]) and the windowed list
//! ([`displayed_items`]).
//!
//! # Transitions
//!
//! | transition | effect |
//! |---|---|
//! | search changed | store the term, reset the category to "all", caller starts a filter run |
//! | category selected | store the category, no filter run |
//! | filter completed | replace the filtered set and category counts |

use std::sync::Arc;
use tracing::debug;

use crate::aggregation::CategoryCounts;
use crate::catalog::{Dataset, ItemSet};
use crate::filter::FilterOutcome;

/// Label of the "all" entry while the search term is empty.
pub const ALL_LABEL: &str = "All";

/// Label of the "all" entry while a search term is active.
pub const ALL_RESULTS_LABEL: &str = "All results";

/// The selected category, or no category restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategorySelection {
    /// No restriction, shown as "All" or "All results"
    #[default]
    All,
    Category(String),
}

impl CategorySelection {
    /// Maps a panel label to a selection.
    ///
    /// Both "all" labels mean no restriction. Dataset construction rejects
    /// categories with those names, so this never shadows a real category.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL || label == ALL_RESULTS_LABEL {
            CategorySelection::All
        } else {
            CategorySelection::Category(label.to_string())
        }
    }

    /// The category to restrict to, if any.
    pub fn category(&self) -> Option<&str> {
        match self {
            CategorySelection::All => None,
            CategorySelection::Category(name) => Some(name),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }
}

/// One row of the category panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub label: String,
    pub count: usize,
}

impl CategoryEntry {
    /// The selection this entry stands for.
    pub fn selection(&self) -> CategorySelection {
        CategorySelection::from_label(&self.label)
    }

    /// Whether this entry should be highlighted for `selected`.
    ///
    /// The "All results" entry is active when nothing is restricted, so the
    /// panel never shows an unhighlighted "all" row while "all" is selected.
    pub fn is_active(&self, selected: &CategorySelection) -> bool {
        self.selection() == *selected
    }

    /// Text shown in the panel, e.g. `Controls (4)`.
    pub fn display(&self) -> String {
        format!("{} ({})", self.label, self.count)
    }
}

/// Restricts `filtered` to `selected`.
///
/// With no restriction the same set (same identity) is returned, so
/// downstream row layout is not invalidated.
pub fn displayed_items(
    dataset: &Dataset,
    filtered: &ItemSet,
    selected: &CategorySelection,
) -> ItemSet {
    match selected.category() {
        None => filtered.clone(),
        Some(category) => ItemSet::new(
            filtered
                .iter()
                .filter(|id| dataset.get(*id).is_some_and(|item| item.has_category(category)))
                .collect(),
        ),
    }
}

/// Reactive state of the viewer.
#[derive(Debug, Clone)]
pub struct CatalogState {
    dataset: Arc<Dataset>,
    search_term: String,
    selected: CategorySelection,
    filtered: ItemSet,
    counts: CategoryCounts,
}

impl CatalogState {
    /// Fresh state: empty search, no restriction, every item passing.
    ///
    /// Counts stay empty until the first filter run completes.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let filtered = ItemSet::all(&dataset);
        Self {
            dataset,
            search_term: String::new(),
            selected: CategorySelection::All,
            filtered,
            counts: CategoryCounts::default(),
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected(&self) -> &CategorySelection {
        &self.selected
    }

    /// The latest applied filter result.
    pub fn filtered(&self) -> &ItemSet {
        &self.filtered
    }

    pub fn counts(&self) -> &CategoryCounts {
        &self.counts
    }

    /// "Search changed" transition.
    ///
    /// Returns `false` (and changes nothing) if `term` equals the current
    /// term; otherwise the category resets to [`CategorySelection::All`] and
    /// the caller must start a new filter run.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search_term {
            return false;
        }
        self.search_term = term;
        self.selected = CategorySelection::All;
        true
    }

    /// "Category selected" transition.
    pub fn select_category(&mut self, selection: CategorySelection) {
        self.selected = selection;
    }

    /// "Filter completed" transition.
    ///
    /// Outcomes for a term other than the current one are stale and dropped.
    /// Returns whether the outcome was applied.
    pub fn apply_filter(&mut self, outcome: FilterOutcome) -> bool {
        if outcome.query != self.search_term {
            debug!(
                "Discarding stale filter result for '{}' (current '{}')",
                outcome.query, self.search_term
            );
            return false;
        }
        self.filtered = outcome.items;
        self.counts = outcome.counts;
        true
    }

    /// Entries for the category panel.
    ///
    /// The "all" entry always comes first and counts the filtered set. With an
    /// empty search every known category follows (zero counts included); with
    /// a search only categories that have matches are listed.
    pub fn category_entries(&self) -> Vec<CategoryEntry> {
        let searching = !self.search_term.is_empty();
        let all_label = if searching {
            ALL_RESULTS_LABEL
        } else {
            ALL_LABEL
        };

        let mut entries = Vec::with_capacity(self.dataset.categories().len() + 1);
        entries.push(CategoryEntry {
            label: all_label.to_string(),
            count: self.filtered.len(),
        });
        entries.extend(
            self.dataset
                .categories()
                .iter()
                .filter(|category| !searching || self.counts.contains(category))
                .map(|category| CategoryEntry {
                    label: category.clone(),
                    count: self.counts.get(category),
                }),
        );
        entries
    }

    /// The set shown in the windowed list.
    pub fn displayed_items(&self) -> ItemSet {
        displayed_items(&self.dataset, &self.filtered, &self.selected)
    }
}
