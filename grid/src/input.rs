//! Input model: the gesture state machine and the span arithmetic it drives.
//!
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up. Both active variants remember the pointer position and the
//! item's span at gesture start; every move recomputes the cell delta from
//! that origin, never incrementally. `dragged_span` and `resized_span` turn a
//! delta into the span written back to the store.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::{GridConfig, ItemId, Span};
use crate::geometry::Point;

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving an item across the grid.
    Dragging {
        /// Id of the item being dragged.
        id: ItemId,
        /// Pointer position at pointer-down.
        start: Point,
        /// Item span at pointer-down.
        orig: Span,
    },
    /// The user is dragging an item's resize handle.
    Resizing {
        /// Id of the item being resized.
        id: ItemId,
        /// Pointer position at pointer-down.
        start: Point,
        /// Item span at pointer-down.
        orig: Span,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Id of the item under an active gesture.
    #[must_use]
    pub fn item_id(&self) -> Option<ItemId> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } | Self::Resizing { id, .. } => Some(*id),
        }
    }
}

/// Move `orig` by whole cells, keeping its size and staying inside the grid.
///
/// The start line is clamped to `[1, columns]` first, then the end line is
/// capped at `columns + 1` and the start re-derived from it, so width and
/// height never change. Rows follow the same rule.
#[must_use]
pub fn dragged_span(orig: Span, col_delta: i32, row_delta: i32, config: &GridConfig) -> Span {
    let (col_start, col_end) = shift_axis(orig.col_start, orig.col_span(), col_delta, i32::from(config.columns));
    let (row_start, row_end) = shift_axis(orig.row_start, orig.row_span(), row_delta, i32::from(config.rows));
    Span { col_start, col_end, row_start, row_end }
}

fn shift_axis(start: i32, span: i32, delta: i32, tracks: i32) -> (i32, i32) {
    let start = start.saturating_add(delta).min(tracks).max(1);
    let end = start.saturating_add(span).min(tracks + 1);
    (end.saturating_sub(span), end)
}

/// Move only the end lines of `orig` by whole cells.
///
/// Ends stay at least one line past their start and at most one past the
/// last track. Start lines are never touched. Arithmetic saturates, so spans
/// stored out of range never overflow.
#[must_use]
pub fn resized_span(orig: Span, col_delta: i32, row_delta: i32, config: &GridConfig) -> Span {
    Span {
        col_start: orig.col_start,
        col_end: move_end(orig.col_start, orig.col_end, col_delta, config.last_col_line()),
        row_start: orig.row_start,
        row_end: move_end(orig.row_start, orig.row_end, row_delta, config.last_row_line()),
    }
}

fn move_end(start: i32, end: i32, delta: i32, last_line: i32) -> i32 {
    end.saturating_add(delta).min(last_line).max(start.saturating_add(1))
}
