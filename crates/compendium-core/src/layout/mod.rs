//! Windowed rendering support.
//!
//! The displayed set can hold around a million items, so the list renders
//! only the rows that intersect the viewport (plus an overscan margin).
//!
//! - `rows`: [`RowPartition`] splits a set into fixed-capacity rows
//! - `heights`: [`RowHeights`] caches measured row heights with O(log n)
//!   offset lookups
//! - `window`: [`render_window`] maps a scroll position to the rows to render
//!
//! Row indices are not stable across sets: the same index holds different
//! items once the displayed set changes. [`RowHeights`] is therefore keyed on
//! the set's identity and reset wholesale whenever it changes.

mod fenwick;
mod heights;
mod rows;
mod window;

pub use heights::RowHeights;
pub use rows::RowPartition;
pub use window::{render_window, RenderWindow, Viewport};
