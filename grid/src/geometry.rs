//! Pixel geometry of the preview container and the pointer-to-cell mapping.
//!
//! All tracks are `1fr`, so every column has the same width and every row the
//! same height: `(extent - (count - 1) * gap) / count`. Cell and line indices
//! are 1-based to match CSS grid line numbering.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::doc::{GridConfig, Span};

/// A point in container-local or page pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether `pt` lies inside or on the border of this rectangle.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }
}

/// A 1-based (column, row) cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub col: u16,
    pub row: u16,
}

/// Size of one track when `count` equal tracks and their gaps fill `extent`.
#[must_use]
pub fn track_size(extent: f64, count: u16, gap: f64) -> f64 {
    if count == 0 {
        return extent;
    }
    let n = f64::from(count);
    (extent - (n - 1.0) * gap) / n
}

/// Find the 1-based track holding `offset`.
///
/// Track `i` matches offsets in `[start_i, start_i + track + gap / 2]`, so the
/// first half of a gap resolves to the track before it. Offsets that match no
/// window (the second half of a gap, negative, or past the end) fall back to
/// the last track.
fn locate(offset: f64, count: u16, track: f64, gap: f64) -> u16 {
    let mut start = 0.0;
    for index in 1..=count {
        if offset >= start && offset <= start + track + gap / 2.0 {
            return index;
        }
        start += track + gap;
    }
    count.max(1)
}

/// Map a pointer position to the grid cell under it.
///
/// `container` is the grid's bounding rectangle in the same coordinate space
/// as `pointer`. Never fails; see [`locate`] for the fallback rule.
#[must_use]
pub fn map_point_to_cell(pointer: Point, container: Rect, rows: u16, columns: u16, gap: f64) -> Cell {
    let x = pointer.x - container.x;
    let y = pointer.y - container.y;
    Cell {
        col: locate(x, columns, track_size(container.width, columns, gap), gap),
        row: locate(y, rows, track_size(container.height, rows, gap), gap),
    }
}

/// [`map_point_to_cell`] with dimensions taken from a [`GridConfig`].
#[must_use]
pub fn map_point(pointer: Point, container: Rect, config: &GridConfig) -> Cell {
    map_point_to_cell(pointer, container, config.rows, config.columns, config.gap)
}

/// Pixel rectangle an item with `span` occupies inside `container`.
#[must_use]
pub fn span_rect(span: Span, container: Rect, config: &GridConfig) -> Rect {
    let col_track = track_size(container.width, config.columns, config.gap);
    let row_track = track_size(container.height, config.rows, config.gap);
    let (x, width) = axis_extent(span.col_start, span.col_end, col_track, config.gap);
    let (y, height) = axis_extent(span.row_start, span.row_end, row_track, config.gap);
    Rect::new(container.x + x, container.y + y, width, height)
}

fn axis_extent(start: i32, end: i32, track: f64, gap: f64) -> (f64, f64) {
    let offset = (f64::from(start) - 1.0) * (track + gap);
    let tracks = f64::from(end) - f64::from(start);
    let extent = (tracks * track + (tracks - 1.0) * gap).max(0.0);
    (offset, extent)
}
