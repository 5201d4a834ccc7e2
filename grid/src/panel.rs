//! Code output panel state: the active tab, copy acknowledgement, and export.
//!
//! Time is passed in rather than read, so the "copied" window is plain data
//! and needs no timer: it is visible while `now` is within
//! [`COPY_FEEDBACK_MS`] of the latest copy.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::codegen::{generate_css, generate_full_html, generate_html};
use crate::consts::{COPY_FEEDBACK_MS, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
use crate::doc::GridStore;

/// Which generated text the panel shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeTab {
    #[default]
    Css,
    Html,
}

/// Code panel state.
#[derive(Clone, Debug, Default)]
pub struct CodePanel {
    pub tab: CodeTab,
    copied_at: Option<Instant>,
}

impl CodePanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generated text for the active tab, recomputed from `store`.
    #[must_use]
    pub fn display_code(&self, store: &GridStore) -> String {
        match self.tab {
            CodeTab::Css => generate_css(&store.config(), store.items()),
            CodeTab::Html => generate_html(store.items()),
        }
    }

    /// Return the text to place on the clipboard and restart the copied window.
    pub fn copy(&mut self, store: &GridStore, now: Instant) -> String {
        self.copied_at = Some(now);
        tracing::debug!(tab = ?self.tab, "code copied");
        self.display_code(store)
    }

    /// Whether the "copied" acknowledgement is showing at `now`.
    #[must_use]
    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < Duration::from_millis(COPY_FEEDBACK_MS))
    }
}

/// A standalone HTML document ready to be saved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub contents: String,
}

impl ExportFile {
    #[must_use]
    pub fn from_store(store: &GridStore) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME,
            mime_type: EXPORT_MIME_TYPE,
            contents: generate_full_html(&store.config(), store.items()),
        }
    }
}
