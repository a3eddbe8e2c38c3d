use std::ops::Range;

use super::heights::RowHeights;

/// Scroll position and size of the list container, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
}

/// Rows to lay out for one viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderWindow {
    /// Rows intersecting the viewport
    pub visible: Range<usize>,
    /// `visible` widened by the overscan margin, clamped to the row count
    pub rendered: Range<usize>,
}

/// Computes which rows to render for `viewport`.
///
/// A viewport that has not been measured yet (zero height) still renders the
/// first visible row and its overscan, so the list is never blank on the
/// first frame. A scroll offset past the end (the set just shrank) pins to
/// the last row.
pub fn render_window(heights: &RowHeights, viewport: Viewport, overscan: usize) -> RenderWindow {
    let rows = heights.row_count();
    let (Some(first), Some(last)) = (
        heights.row_at_offset(pixel(viewport.scroll_top)),
        heights.row_at_offset(pixel(viewport.scroll_top + viewport.height - 1.0)),
    ) else {
        return RenderWindow::default();
    };
    let last = last.max(first);

    RenderWindow {
        visible: first..last + 1,
        rendered: first.saturating_sub(overscan)..(last + 1 + overscan).min(rows),
    }
}

fn pixel(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u64
    } else {
        0
    }
}
