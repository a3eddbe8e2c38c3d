use tracing::trace;

use super::fenwick::FenwickTree;
use crate::catalog::SetId;

/// Measured row heights for one displayed set.
///
/// Unmeasured rows count as the default estimate. Offsets and totals are
/// O(log n) through a Fenwick tree, which keeps scrolling cheap with the
/// ~150k rows a million-item set produces.
///
/// The cache belongs to exactly one [`SetId`]. [`RowHeights::sync`] resets it
/// whenever the set changes, because a row index then refers to different
/// items with a different height.
#[derive(Debug, Clone)]
pub struct RowHeights {
    set_id: Option<SetId>,
    default_height: u32,
    heights: Vec<u32>,
    measured: Vec<bool>,
    tree: FenwickTree,
}

impl RowHeights {
    pub fn new(default_height: u32) -> Self {
        Self {
            set_id: None,
            default_height,
            heights: Vec::new(),
            measured: Vec::new(),
            tree: FenwickTree::default(),
        }
    }

    /// Ties the cache to `set_id` with `row_count` rows.
    ///
    /// Resets every measurement if either differs from the current binding.
    /// Returns whether a reset happened.
    pub fn sync(&mut self, set_id: SetId, row_count: usize) -> bool {
        if self.set_id == Some(set_id) && self.heights.len() == row_count {
            return false;
        }
        trace!(
            "Resetting row heights for set {} ({} rows)",
            set_id.as_u64(),
            row_count
        );
        self.set_id = Some(set_id);
        self.reset(row_count);
        true
    }

    /// Forgets every measurement and resizes to `row_count` rows.
    pub fn reset(&mut self, row_count: usize) {
        self.heights = vec![self.default_height; row_count];
        self.measured = vec![false; row_count];
        let values: Vec<u64> = self.heights.iter().map(|&h| u64::from(h)).collect();
        self.tree = FenwickTree::from_values(&values);
    }

    pub fn set_id(&self) -> Option<SetId> {
        self.set_id
    }

    pub fn row_count(&self) -> usize {
        self.heights.len()
    }

    pub fn default_height(&self) -> u32 {
        self.default_height
    }

    /// Cached height of `row`, or the default estimate.
    pub fn height(&self, row: usize) -> u32 {
        self.heights.get(row).copied().unwrap_or(self.default_height)
    }

    pub fn is_measured(&self, row: usize) -> bool {
        self.measured.get(row).copied().unwrap_or(false)
    }

    /// Stores a measurement. Returns whether layout changed.
    ///
    /// Rows outside the current partition are ignored.
    pub fn record(&mut self, row: usize, height: u32) -> bool {
        let Some(current) = self.heights.get(row).copied() else {
            return false;
        };
        self.measured[row] = true;
        if current == height {
            return false;
        }
        self.heights[row] = height;
        self.tree.add(row, i64::from(height) - i64::from(current));
        true
    }

    /// Stores a measurement taken for the rows of `set_id`.
    ///
    /// Measurements from a set the cache is no longer bound to are dropped,
    /// since their row index now names different items.
    pub fn record_for(&mut self, set_id: SetId, row: usize, height: u32) -> bool {
        if self.set_id != Some(set_id) {
            trace!("Dropping measurement of row {} from set {}", row, set_id.as_u64());
            return false;
        }
        self.record(row, height)
    }

    /// Distance from the top of the list to the top of `row`.
    pub fn offset_of(&self, row: usize) -> u64 {
        self.tree.prefix(row)
    }

    pub fn total_height(&self) -> u64 {
        self.tree.total()
    }

    /// The row covering vertical `offset`, clamped to the last row.
    ///
    /// `None` when there are no rows.
    pub fn row_at_offset(&self, offset: u64) -> Option<usize> {
        let rows = self.row_count();
        if rows == 0 {
            return None;
        }
        Some(self.tree.count_within(offset).min(rows - 1))
    }
}
