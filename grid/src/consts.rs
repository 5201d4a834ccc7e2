//! Shared constants for the grid crate.

// ── Document defaults ───────────────────────────────────────────

/// Row count of a fresh or reset grid.
pub const DEFAULT_ROWS: u16 = 5;

/// Column count of a fresh or reset grid.
pub const DEFAULT_COLUMNS: u16 = 5;

/// Gap between tracks of a fresh or reset grid, in pixels.
pub const DEFAULT_GAP: f64 = 10.0;

/// Largest value a random item colour can take (`#ffffff`).
pub const MAX_COLOR: u32 = 0x00FF_FFFF;

// ── Preview container ───────────────────────────────────────────

/// Width of the preview container, in pixels.
pub const DEFAULT_CONTAINER_WIDTH: f64 = 800.0;

/// Height of the preview container (4:3 at the default width), in pixels.
pub const DEFAULT_CONTAINER_HEIGHT: f64 = 600.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Edge length of the square resize handle, in pixels.
pub const RESIZE_HANDLE_PX: f64 = 20.0;

/// Distance from the item's bottom-right corner to the handle, in pixels.
pub const RESIZE_HANDLE_INSET_PX: f64 = 4.0;

// ── Code panel ──────────────────────────────────────────────────

/// How long the "copied" acknowledgement stays visible, in milliseconds.
pub const COPY_FEEDBACK_MS: u64 = 2000;

/// File name offered for the standalone HTML export.
pub const EXPORT_FILE_NAME: &str = "grid-layout.html";

/// MIME type of the standalone HTML export.
pub const EXPORT_MIME_TYPE: &str = "text/html";
