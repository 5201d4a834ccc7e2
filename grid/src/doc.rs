//! Document model: grid configuration, grid items, and the in-memory store.
//!
//! This module defines the data types that describe the editable layout
//! (`GridConfig`, `GridItem`, `Span`), a sparse-update type for field edits
//! (`PartialGridItem`), the id-less template used to create items
//! (`NewGridItem`), and the store that owns the whole document (`GridStore`).
//!
//! The store is the single source of truth. The gesture engine mutates it
//! through `update_item` on every pointer move; the code generator reads it
//! on demand. Every operation here is total: unknown ids are no-ops and
//! numeric fields are stored as given (see `update_item_clamped` for the
//! range-checked path).

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::codegen::class_name;
use crate::consts::{DEFAULT_COLUMNS, DEFAULT_GAP, DEFAULT_ROWS, MAX_COLOR};
use crate::layout::Layout;

/// Unique identifier for a grid item.
pub type ItemId = Uuid;

/// Grid dimensions and spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of row tracks.
    pub rows: u16,
    /// Number of column tracks.
    pub columns: u16,
    /// Gap between adjacent tracks in pixels.
    pub gap: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: DEFAULT_ROWS, columns: DEFAULT_COLUMNS, gap: DEFAULT_GAP }
    }
}

impl GridConfig {
    /// The grid line after the last column (`columns + 1`).
    #[must_use]
    pub fn last_col_line(&self) -> i32 {
        i32::from(self.columns) + 1
    }

    /// The grid line after the last row (`rows + 1`).
    #[must_use]
    pub fn last_row_line(&self) -> i32 {
        i32::from(self.rows) + 1
    }
}

/// An item's occupied rectangle in grid-line coordinates, half-open on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub col_start: i32,
    pub col_end: i32,
    pub row_start: i32,
    pub row_end: i32,
}

impl Span {
    #[must_use]
    pub fn new(col_start: i32, col_end: i32, row_start: i32, row_end: i32) -> Self {
        Self { col_start, col_end, row_start, row_end }
    }

    /// Number of column tracks covered.
    #[must_use]
    pub fn col_span(&self) -> i32 {
        self.col_end.saturating_sub(self.col_start)
    }

    /// Number of row tracks covered.
    #[must_use]
    pub fn row_span(&self) -> i32 {
        self.row_end.saturating_sub(self.row_start)
    }

    /// Pull this span inside the grid with at least one track on each axis.
    ///
    /// Start lines land in `[1, columns]` / `[1, rows]`; end lines land in
    /// `[start + 1, columns + 1]` / `[start + 1, rows + 1]`.
    #[must_use]
    pub fn clamped(&self, config: &GridConfig) -> Self {
        let (col_start, col_end) = clamp_axis(self.col_start, self.col_end, config.last_col_line());
        let (row_start, row_end) = clamp_axis(self.row_start, self.row_end, config.last_row_line());
        Self { col_start, col_end, row_start, row_end }
    }
}

fn clamp_axis(start: i32, end: i32, last_line: i32) -> (i32, i32) {
    let start = start.min(last_line - 1).max(1);
    let end = end.min(last_line).max(start + 1);
    (start, end)
}

/// A named rectangle placed on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridItem {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// Display name; also the source of the generated CSS class.
    pub name: String,
    /// First column line.
    pub col_start: i32,
    /// Column line the item ends before.
    pub col_end: i32,
    /// First row line.
    pub row_start: i32,
    /// Row line the item ends before.
    pub row_end: i32,
    /// Background colour as a CSS colour literal.
    pub color: String,
}

impl GridItem {
    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.col_start, self.col_end, self.row_start, self.row_end)
    }

    pub fn set_span(&mut self, span: Span) {
        self.col_start = span.col_start;
        self.col_end = span.col_end;
        self.row_start = span.row_start;
        self.row_end = span.row_end;
    }

    /// The CSS class derived from this item's name.
    #[must_use]
    pub fn class_name(&self) -> String {
        class_name(&self.name)
    }
}

/// A grid item before it has been assigned an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGridItem {
    pub name: String,
    pub col_start: i32,
    pub col_end: i32,
    pub row_start: i32,
    pub row_end: i32,
    pub color: String,
}

impl NewGridItem {
    fn with_id(self, id: ItemId) -> GridItem {
        GridItem {
            id,
            name: self.name,
            col_start: self.col_start,
            col_end: self.col_end,
            row_start: self.row_start,
            row_end: self.row_end,
            color: self.color,
        }
    }
}

impl From<&GridItem> for NewGridItem {
    fn from(item: &GridItem) -> Self {
        Self {
            name: item.name.clone(),
            col_start: item.col_start,
            col_end: item.col_end,
            row_start: item.row_start,
            row_end: item.row_end,
            color: item.color.clone(),
        }
    }
}

/// Sparse update for a grid item. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialGridItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_start: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_end: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_start: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_end: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<Span> for PartialGridItem {
    fn from(span: Span) -> Self {
        Self {
            col_start: Some(span.col_start),
            col_end: Some(span.col_end),
            row_start: Some(span.row_start),
            row_end: Some(span.row_end),
            ..Default::default()
        }
    }
}

/// A random `#rrggbb` colour.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.random_range(0..=MAX_COLOR))
}

/// The single editable document: configuration, items, and selection.
#[derive(Debug, Clone)]
pub struct GridStore {
    config: GridConfig,
    items: Vec<GridItem>,
    selected_id: Option<ItemId>,
}

impl GridStore {
    /// Create a store holding the demo layout (header, sidebar, content, footer).
    #[must_use]
    pub fn new() -> Self {
        let mut store = Self::empty();
        for (name, span, color) in [
            ("Header", Span::new(1, 6, 1, 2), "#ef4444"),
            ("Sidebar", Span::new(1, 2, 2, 5), "#3b82f6"),
            ("Content", Span::new(2, 6, 2, 5), "#10b981"),
            ("Footer", Span::new(1, 6, 5, 6), "#f59e0b"),
        ] {
            store.items.push(GridItem {
                id: Uuid::new_v4(),
                name: name.to_owned(),
                col_start: span.col_start,
                col_end: span.col_end,
                row_start: span.row_start,
                row_end: span.row_end,
                color: color.to_owned(),
            });
        }
        store
    }

    /// Create a store with default dimensions and no items.
    #[must_use]
    pub fn empty() -> Self {
        Self { config: GridConfig::default(), items: Vec::new(), selected_id: None }
    }

    /// Build a store from a layout document. Items get fresh ids in layout order.
    #[must_use]
    pub fn from_layout(layout: Layout) -> Self {
        let mut store = Self::empty();
        store.config = GridConfig { rows: layout.rows, columns: layout.columns, gap: layout.gap };
        for item in layout.items {
            store.add_item(item);
        }
        store
    }

    /// Snapshot the document as a layout (ids and selection are dropped).
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout {
            rows: self.config.rows,
            columns: self.config.columns,
            gap: self.config.gap,
            items: self.items.iter().map(NewGridItem::from).collect(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> GridConfig {
        self.config
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.config.rows
    }

    #[must_use]
    pub fn columns(&self) -> u16 {
        self.config.columns
    }

    #[must_use]
    pub fn gap(&self) -> f64 {
        self.config.gap
    }

    /// Items in insertion order, which is also render and output order.
    #[must_use]
    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&GridItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<ItemId> {
        self.selected_id
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&GridItem> {
        self.selected_id.as_ref().and_then(|id| self.get(id))
    }

    /// Number of items currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The template the "add item" button uses: next ordinal name, a single
    /// cell in the top-left corner, and a random colour.
    #[must_use]
    pub fn next_item(&self) -> NewGridItem {
        NewGridItem {
            name: format!("Item {}", self.items.len() + 1),
            col_start: 1,
            col_end: 2,
            row_start: 1,
            row_end: 2,
            color: random_color(&mut rand::rng()),
        }
    }

    // --- Mutations ---

    pub fn set_rows(&mut self, rows: u16) {
        self.config.rows = rows;
    }

    pub fn set_columns(&mut self, columns: u16) {
        self.config.columns = columns;
    }

    pub fn set_gap(&mut self, gap: f64) {
        self.config.gap = gap;
    }

    /// Append an item with a fresh id and return that id. Selection is unchanged.
    pub fn add_item(&mut self, item: NewGridItem) -> ItemId {
        let id = Uuid::new_v4();
        tracing::debug!(item_id = %id, name = %item.name, "item added");
        self.items.push(item.with_id(id));
        id
    }

    /// Merge present fields into the matching item. Returns false if the item doesn't exist.
    ///
    /// No range or ordering checks are made on span fields.
    pub fn update_item(&mut self, id: &ItemId, partial: &PartialGridItem) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| &item.id == id) else {
            return false;
        };
        if let Some(ref name) = partial.name {
            item.name.clone_from(name);
        }
        if let Some(v) = partial.col_start {
            item.col_start = v;
        }
        if let Some(v) = partial.col_end {
            item.col_end = v;
        }
        if let Some(v) = partial.row_start {
            item.row_start = v;
        }
        if let Some(v) = partial.row_end {
            item.row_end = v;
        }
        if let Some(ref color) = partial.color {
            item.color.clone_from(color);
        }
        true
    }

    /// Like `update_item`, then pull the item's span back inside the grid.
    pub fn update_item_clamped(&mut self, id: &ItemId, partial: &PartialGridItem) -> bool {
        let config = self.config;
        if !self.update_item(id, partial) {
            return false;
        }
        if let Some(item) = self.items.iter_mut().find(|item| &item.id == id) {
            let span = item.span().clamped(&config);
            item.set_span(span);
        }
        true
    }

    /// Remove an item by id, returning it if it was present. Clears the
    /// selection when it pointed at the removed item.
    pub fn remove_item(&mut self, id: &ItemId) -> Option<GridItem> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        let removed = self.items.remove(index);
        if self.selected_id.as_ref() == Some(id) {
            self.selected_id = None;
        }
        tracing::debug!(item_id = %id, "item removed");
        Some(removed)
    }

    /// Set the selection unconditionally; `None` clears it.
    pub fn select_item(&mut self, id: Option<ItemId>) {
        self.selected_id = id;
    }

    /// Replace the document with an empty default grid.
    pub fn reset(&mut self) {
        *self = Self::empty();
        tracing::info!("grid reset");
    }
}

impl Default for GridStore {
    fn default() -> Self {
        Self::new()
    }
}
