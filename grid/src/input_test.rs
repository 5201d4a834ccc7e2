use uuid::Uuid;

use super::*;

fn config() -> GridConfig {
    GridConfig { rows: 5, columns: 5, gap: 10.0 }
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let state = InputState::default();
    assert!(state.is_idle());
    assert!(state.item_id().is_none());
}

#[test]
fn input_state_reports_gesture_item() {
    let id = Uuid::new_v4();
    let span = Span::new(1, 2, 1, 2);
    let dragging = InputState::Dragging { id, start: Point::new(0.0, 0.0), orig: span };
    let resizing = InputState::Resizing { id, start: Point::new(0.0, 0.0), orig: span };
    assert_eq!(dragging.item_id(), Some(id));
    assert_eq!(resizing.item_id(), Some(id));
    assert!(!dragging.is_idle());
    assert!(!resizing.is_idle());
}

// =============================================================
// dragged_span
// =============================================================

#[test]
fn drag_zero_delta_is_identity() {
    let orig = Span::new(2, 4, 3, 5);
    assert_eq!(dragged_span(orig, 0, 0, &config()), orig);
}

#[test]
fn drag_shifts_whole_span() {
    let orig = Span::new(1, 3, 1, 2);
    assert_eq!(dragged_span(orig, 2, 3, &config()), Span::new(3, 5, 4, 5));
}

#[test]
fn drag_clamps_at_far_edge_keeping_size() {
    let orig = Span::new(2, 4, 2, 5);
    let moved = dragged_span(orig, 10, 10, &config());
    assert_eq!(moved, Span::new(4, 6, 3, 6));
}

#[test]
fn drag_clamps_at_near_edge_keeping_size() {
    let orig = Span::new(3, 5, 2, 4);
    let moved = dragged_span(orig, -10, -10, &config());
    assert_eq!(moved, Span::new(1, 3, 1, 3));
}

#[test]
fn drag_full_width_item_cannot_move_horizontally() {
    let orig = Span::new(1, 6, 1, 2);
    let moved = dragged_span(orig, 3, 1, &config());
    assert_eq!(moved, Span::new(1, 6, 2, 3));
}

#[test]
fn drag_preserves_size_for_all_deltas() {
    let cfg = config();
    let spans = [Span::new(1, 2, 1, 2), Span::new(2, 5, 1, 3), Span::new(1, 6, 4, 6), Span::new(5, 6, 5, 6)];
    for orig in spans {
        for dc in -6..=6 {
            for dr in -6..=6 {
                let moved = dragged_span(orig, dc, dr, &cfg);
                assert_eq!(moved.col_span(), orig.col_span(), "{orig:?} by ({dc},{dr})");
                assert_eq!(moved.row_span(), orig.row_span(), "{orig:?} by ({dc},{dr})");
                assert!(moved.col_start >= 1 && moved.col_end <= cfg.last_col_line());
                assert!(moved.row_start >= 1 && moved.row_end <= cfg.last_row_line());
            }
        }
    }
}

// =============================================================
// resized_span
// =============================================================

#[test]
fn resize_zero_delta_is_identity() {
    let orig = Span::new(2, 4, 3, 5);
    assert_eq!(resized_span(orig, 0, 0, &config()), orig);
}

#[test]
fn resize_grows_end_edge() {
    let orig = Span::new(2, 3, 2, 3);
    assert_eq!(resized_span(orig, 2, 1, &config()), Span::new(2, 5, 2, 4));
}

#[test]
fn resize_caps_at_last_line() {
    let orig = Span::new(2, 3, 2, 3);
    assert_eq!(resized_span(orig, 9, 9, &config()), Span::new(2, 6, 2, 6));
}

#[test]
fn resize_keeps_one_cell_minimum() {
    let orig = Span::new(3, 5, 3, 5);
    assert_eq!(resized_span(orig, -4, -4, &config()), Span::new(3, 4, 3, 4));
}

#[test]
fn resize_never_moves_start_and_never_degenerates() {
    let cfg = config();
    let spans = [Span::new(1, 2, 1, 2), Span::new(2, 5, 1, 3), Span::new(5, 6, 5, 6)];
    for orig in spans {
        for dc in -6..=6 {
            for dr in -6..=6 {
                let resized = resized_span(orig, dc, dr, &cfg);
                assert_eq!(resized.col_start, orig.col_start);
                assert_eq!(resized.row_start, orig.row_start);
                assert!(resized.col_end > resized.col_start);
                assert!(resized.row_end > resized.row_start);
                assert!(resized.col_end <= cfg.last_col_line());
                assert!(resized.row_end <= cfg.last_row_line());
            }
        }
    }
}
