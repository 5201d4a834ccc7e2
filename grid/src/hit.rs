#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{RESIZE_HANDLE_INSET_PX, RESIZE_HANDLE_PX};
use crate::doc::{GridItem, GridStore, ItemId};
use crate::geometry::{Point, Rect, span_rect};

/// Which part of an item was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// Anywhere on the item outside the resize handle.
    Body,
    /// The bottom-right resize handle.
    ResizeHandle,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub item_id: ItemId,
    pub part: HitPart,
}

/// Pixel rectangle of an item's resize handle.
#[must_use]
pub fn handle_rect(item_rect: Rect) -> Rect {
    Rect::new(
        item_rect.right() - RESIZE_HANDLE_INSET_PX - RESIZE_HANDLE_PX,
        item_rect.bottom() - RESIZE_HANDLE_INSET_PX - RESIZE_HANDLE_PX,
        RESIZE_HANDLE_PX,
        RESIZE_HANDLE_PX,
    )
}

/// Test which item (if any) is under `pt`.
///
/// The selected item is drawn above the rest, so it is checked first; the
/// others are checked from last to first insertion. On any item the resize
/// handle takes priority over the body.
#[must_use]
pub fn hit_test(pt: Point, store: &GridStore, container: Rect) -> Option<Hit> {
    let config = store.config();
    let selected = store.selected_item();
    let others = store.items().iter().rev().filter(|item| Some(item.id) != store.selected_id());

    selected.into_iter().chain(others).find_map(|item| hit_item(pt, item, span_rect(item.span(), container, &config)))
}

fn hit_item(pt: Point, item: &GridItem, rect: Rect) -> Option<Hit> {
    if handle_rect(rect).contains(pt) {
        return Some(Hit { item_id: item.id, part: HitPart::ResizeHandle });
    }
    if rect.contains(pt) {
        return Some(Hit { item_id: item.id, part: HitPart::Body });
    }
    None
}
