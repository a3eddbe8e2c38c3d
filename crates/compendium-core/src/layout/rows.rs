use std::ops::Range;

use crate::catalog::{ItemId, ItemSet};

/// Split of `item_count` items into rows of `per_row` items.
///
/// The last row may be partial. Row `i` holds items
/// `[i * per_row, min((i + 1) * per_row, item_count))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPartition {
    item_count: usize,
    per_row: usize,
}

impl RowPartition {
    /// A `per_row` of zero is treated as one.
    pub fn new(item_count: usize, per_row: usize) -> Self {
        Self {
            item_count,
            per_row: per_row.max(1),
        }
    }

    pub fn per_row(&self) -> usize {
        self.per_row
    }

    pub fn row_count(&self) -> usize {
        self.item_count.div_ceil(self.per_row)
    }

    /// Item positions in `row`, or `None` past the last row.
    pub fn row_range(&self, row: usize) -> Option<Range<usize>> {
        if row >= self.row_count() {
            return None;
        }
        let start = row * self.per_row;
        Some(start..(start + self.per_row).min(self.item_count))
    }

    /// The items of `row` in `set`; empty past the last row.
    pub fn row_items<'a>(&self, set: &'a ItemSet, row: usize) -> &'a [ItemId] {
        match self.row_range(row) {
            Some(range) => set.slice(range),
            None => &[],
        }
    }
}
