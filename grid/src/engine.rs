use std::time::Instant;

use crate::consts::{DEFAULT_CONTAINER_HEIGHT, DEFAULT_CONTAINER_WIDTH};
use crate::doc::{GridItem, GridStore, ItemId, PartialGridItem};
use crate::geometry::{Point, Rect, map_point};
use crate::hit::{HitPart, hit_test};
use crate::input::{InputState, dragged_span, resized_span};
use crate::panel::{CodePanel, ExportFile};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Default preview container anchored at the origin.
pub const DEFAULT_CONTAINER: Rect =
    Rect { x: 0.0, y: 0.0, width: DEFAULT_CONTAINER_WIDTH, height: DEFAULT_CONTAINER_HEIGHT };

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ItemUpdated { id: ItemId, fields: PartialGridItem },
    SelectionChanged(Option<ItemId>),
    SetCursor(String),
    RenderNeeded,
}

/// Editor state: the document, the gesture in progress, and the code panel.
///
/// Holds no host handles, so it can be driven directly from tests or from a
/// command-line session.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub store: GridStore,
    pub input: InputState,
    pub panel: CodePanel,
    /// Bounding rectangle of the grid container, in pointer coordinates.
    pub container: Rect,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_store(GridStore::new())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_store(store: GridStore) -> Self {
        Self { store, input: InputState::Idle, panel: CodePanel::new(), container: DEFAULT_CONTAINER }
    }

    /// Update the container rectangle used for pointer mapping and hit-testing.
    pub fn set_container(&mut self, container: Rect) {
        self.container = container;
    }

    /// Append the next default item (see [`GridStore::next_item`]).
    pub fn add_item(&mut self) -> ItemId {
        let item = self.store.next_item();
        self.store.add_item(item)
    }

    // --- Input events ---

    /// Press at `pt`: start a gesture on the item under it, or clear the
    /// selection if nothing is there.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        match hit_test(pt, &self.store, self.container) {
            Some(hit) => self.press_item(hit.item_id, hit.part, pt),
            None => self.click_background(),
        }
    }

    /// Press on a known item part. Selects the item and starts a move or resize.
    pub fn press_item(&mut self, id: ItemId, part: HitPart, pt: Point) -> Vec<Action> {
        let Some(orig) = self.store.get(&id).map(GridItem::span) else {
            return Vec::new();
        };
        self.store.select_item(Some(id));
        let cursor = match part {
            HitPart::Body => {
                self.input = InputState::Dragging { id, start: pt, orig };
                "move"
            }
            HitPart::ResizeHandle => {
                self.input = InputState::Resizing { id, start: pt, orig };
                "se-resize"
            }
        };
        tracing::debug!(item_id = %id, ?part, "gesture started");
        vec![Action::SelectionChanged(Some(id)), Action::SetCursor(cursor.into()), Action::RenderNeeded]
    }

    /// Pointer moved: rewrite the gesture item's span from the cell delta
    /// between gesture start and `pt`.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let (id, start, orig, resizing) = match self.input {
            InputState::Idle => return Vec::new(),
            InputState::Dragging { id, start, orig } => (id, start, orig, false),
            InputState::Resizing { id, start, orig } => (id, start, orig, true),
        };

        let config = self.store.config();
        let from = map_point(start, self.container, &config);
        let to = map_point(pt, self.container, &config);
        let col_delta = i32::from(to.col) - i32::from(from.col);
        let row_delta = i32::from(to.row) - i32::from(from.row);
        tracing::trace!(item_id = %id, col = to.col, row = to.row, col_delta, row_delta, "gesture moved");

        let fields = if resizing {
            let span = resized_span(orig, col_delta, row_delta, &config);
            PartialGridItem { col_end: Some(span.col_end), row_end: Some(span.row_end), ..Default::default() }
        } else {
            PartialGridItem::from(dragged_span(orig, col_delta, row_delta, &config))
        };

        if !self.store.update_item(&id, &fields) {
            tracing::debug!(item_id = %id, "gesture item vanished");
            self.input = InputState::Idle;
            return Vec::new();
        }
        vec![Action::ItemUpdated { id, fields }, Action::RenderNeeded]
    }

    /// Release ends any gesture.
    pub fn on_pointer_up(&mut self, _pt: Point) -> Vec<Action> {
        let Some(id) = self.input.item_id() else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        tracing::debug!(item_id = %id, "gesture ended");
        vec![Action::SetCursor("default".into()), Action::RenderNeeded]
    }

    /// Click on the empty area around the grid clears the selection.
    pub fn click_background(&mut self) -> Vec<Action> {
        self.store.select_item(None);
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    }

    // --- Code panel ---

    /// Text for the clipboard from the active code tab.
    pub fn copy_code(&mut self, now: Instant) -> String {
        self.panel.copy(&self.store, now)
    }

    #[must_use]
    pub fn export(&self) -> ExportFile {
        ExportFile::from_store(&self.store)
    }

    // --- Queries ---

    /// The currently selected item id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ItemId> {
        self.store.selected_id()
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&GridItem> {
        self.store.get(id)
    }
}
