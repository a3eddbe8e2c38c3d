//! Compiled-in configuration constants.
//!
//! The viewer has no runtime or environment configuration. Every tunable
//! lives here so the UI crate, the tests and the sample data agree.
//!
//! ```
//! use compendium_core::config::{ITEMS_PER_ROW, OVERSCAN_ROWS};
//!
//! assert_eq!(ITEMS_PER_ROW, 7);
//! assert_eq!(OVERSCAN_ROWS, 5);
//! ```

// =============================================================================
// Windowed rendering
// =============================================================================

/// Number of item chips per rendered row.
///
/// A rough approximation of how many chips fit across the list. It does not
/// adapt to the container width, so rows may leave horizontal space unused.
pub const ITEMS_PER_ROW: usize = 7;

/// Rows rendered above and below the strictly visible range.
pub const OVERSCAN_ROWS: usize = 5;

/// Height estimate (px) for rows that have not been measured yet.
///
/// Chip height plus vertical padding.
pub const DEFAULT_ROW_HEIGHT_PX: u32 = 48;

// =============================================================================
// Filtering
// =============================================================================

/// Artificial latency (ms) before a filter run starts scanning.
///
/// Zero in production. Raise it to watch superseded runs being cancelled
/// while typing.
pub const FILTER_LATENCY_MS: u64 = 0;

/// Items scanned between two checks of the cancellation token.
pub const CANCELLATION_CHECK_INTERVAL: usize = 4096;

// =============================================================================
// Sample data
// =============================================================================

/// Categories appended by the bulk generator.
pub const GENERATED_CATEGORY_COUNT: usize = 30;

/// Items appended by the bulk generator.
pub const GENERATED_ITEM_COUNT: usize = 1_000_000;

// =============================================================================
// UI
// =============================================================================

/// How long an item-click acknowledgement stays on screen (ms).
pub const ACKNOWLEDGEMENT_MS: u64 = 2500;
