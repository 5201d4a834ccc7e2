//! Layout documents: the JSON exchange format for a grid and its items.
//!
//! A layout carries the grid dimensions and the items in order, without ids
//! or selection. It is what the command-line tool reads and prints; loading
//! one into a [`GridStore`](crate::doc::GridStore) assigns fresh ids.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_COLUMNS, DEFAULT_GAP, DEFAULT_ROWS};
use crate::doc::NewGridItem;

/// Error returned when a layout cannot be read or decoded.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The layout file could not be read.
    #[error("failed to read layout {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The layout text is not valid layout JSON.
    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Grid dimensions plus items in render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default = "default_rows")]
    pub rows: u16,
    #[serde(default = "default_columns")]
    pub columns: u16,
    #[serde(default = "default_gap")]
    pub gap: f64,
    #[serde(default)]
    pub items: Vec<NewGridItem>,
}

fn default_rows() -> u16 {
    DEFAULT_ROWS
}

fn default_columns() -> u16 {
    DEFAULT_COLUMNS
}

fn default_gap() -> f64 {
    DEFAULT_GAP
}

impl Layout {
    /// Decode a layout from JSON text. Missing dimensions take the defaults.
    pub fn from_json(text: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and decode a layout file.
    pub fn read(path: &Path) -> Result<Self, LayoutError> {
        let text = fs::read_to_string(path)
            .map_err(|source| LayoutError::Read { path: path.display().to_string(), source })?;
        Self::from_json(&text)
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
