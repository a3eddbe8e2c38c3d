//! Error types for compendium-core.
//!
//! Cancellation of a filter run is not an error and never shows up here; it
//! is reported as `Ok(None)` by the filter functions.

use thiserror::Error;

/// Errors that can occur while building or loading a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The library document could not be parsed
    #[error("Failed to parse library: {0}")]
    Parse(String),
    /// An item lists the same category more than once
    #[error("Item '{item}' lists category '{category}' more than once")]
    DuplicateCategory { item: String, category: String },
    /// An item references a category that is not in the category list
    #[error("Item '{item}' references unknown category '{category}'")]
    UnknownCategory { item: String, category: String },
    /// A category uses a name reserved for the "all" pseudo-category
    #[error("Category name '{0}' is reserved")]
    ReservedCategory(String),
}

/// Errors that can occur during a filter run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The worker running the scan failed or was torn down
    #[error("Filter task failed: {0}")]
    TaskFailed(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

/// Convert from String to FilterError for platform::run_blocking compatibility
impl From<String> for FilterError {
    fn from(s: String) -> Self {
        FilterError::TaskFailed(s)
    }
}

impl From<FilterError> for String {
    fn from(err: FilterError) -> String {
        err.to_string()
    }
}
