//! Scripted editing sessions.
//!
//! A script is a JSON array of steps, each naming one thing a user can do in
//! the editor: change the grid settings, add/edit/remove items, press and drag
//! on the preview, switch code tabs, copy. Steps run in order against one
//! `EngineCore`, exactly as the panels would drive it.

use std::fmt;
use std::time::Instant;

use grid::doc::{ItemId, NewGridItem, PartialGridItem};
use grid::engine::{Action, EngineCore};
use grid::geometry::Point;
use grid::panel::CodeTab;
use serde::Deserialize;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no item matches {0}")]
    UnknownItem(ItemRef),
    #[error("step {step}: {source}")]
    AtStep {
        step: usize,
        #[source]
        source: Box<SessionError>,
    },
}

/// Reference to an item by position in the item list or by exact name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ItemRef {
    Index(usize),
    Name(String),
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "index {i}"),
            Self::Name(name) => write!(f, "name {name:?}"),
        }
    }
}

fn default_clamp() -> bool {
    true
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    SetRows {
        rows: u16,
    },
    SetColumns {
        columns: u16,
    },
    SetGap {
        gap: f64,
    },
    /// Add `item`, or the next default item when omitted.
    AddItem {
        #[serde(default)]
        item: Option<NewGridItem>,
    },
    /// Side-panel field edit. Spans are pulled back into the grid unless
    /// `clamp` is false.
    UpdateItem {
        target: ItemRef,
        fields: PartialGridItem,
        #[serde(default = "default_clamp")]
        clamp: bool,
    },
    RemoveItem {
        target: ItemRef,
    },
    Select {
        #[serde(default)]
        target: Option<ItemRef>,
    },
    Reset,
    PointerDown {
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        x: f64,
        y: f64,
    },
    ClickBackground,
    Tab {
        tab: CodeTab,
    },
    Copy,
}

/// An engine plus the text most recently copied from the code panel.
pub struct Session {
    pub core: EngineCore,
    clipboard: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(core: EngineCore) -> Self {
        Self { core, clipboard: None }
    }

    /// Text placed on the clipboard by the last `copy` step.
    #[must_use]
    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    /// Decode a JSON script.
    pub fn parse_script(text: &str) -> Result<Vec<Step>, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Run all steps in order, stopping at the first failure.
    pub fn run(&mut self, steps: &[Step]) -> Result<(), SessionError> {
        for (index, step) in steps.iter().enumerate() {
            let actions = self
                .apply(step)
                .map_err(|e| SessionError::AtStep { step: index, source: Box::new(e) })?;
            tracing::debug!(step = index, ?step, actions = actions.len(), "step applied");
        }
        Ok(())
    }

    /// Apply one step and return the engine actions it produced.
    pub fn apply(&mut self, step: &Step) -> Result<Vec<Action>, SessionError> {
        let actions = match step {
            Step::SetRows { rows } => {
                self.core.store.set_rows(*rows);
                Vec::new()
            }
            Step::SetColumns { columns } => {
                self.core.store.set_columns(*columns);
                Vec::new()
            }
            Step::SetGap { gap } => {
                self.core.store.set_gap(*gap);
                Vec::new()
            }
            Step::AddItem { item } => {
                match item {
                    Some(item) => self.core.store.add_item(item.clone()),
                    None => self.core.add_item(),
                };
                Vec::new()
            }
            Step::UpdateItem { target, fields, clamp } => {
                let id = self.resolve(target)?;
                if *clamp {
                    self.core.store.update_item_clamped(&id, fields);
                } else {
                    self.core.store.update_item(&id, fields);
                }
                Vec::new()
            }
            Step::RemoveItem { target } => {
                let id = self.resolve(target)?;
                self.core.store.remove_item(&id);
                Vec::new()
            }
            Step::Select { target } => {
                let id = target.as_ref().map(|t| self.resolve(t)).transpose()?;
                self.core.store.select_item(id);
                vec![Action::SelectionChanged(id)]
            }
            Step::Reset => {
                self.core.store.reset();
                Vec::new()
            }
            Step::PointerDown { x, y } => self.core.on_pointer_down(Point::new(*x, *y)),
            Step::PointerMove { x, y } => self.core.on_pointer_move(Point::new(*x, *y)),
            Step::PointerUp { x, y } => self.core.on_pointer_up(Point::new(*x, *y)),
            Step::ClickBackground => self.core.click_background(),
            Step::Tab { tab } => {
                self.core.panel.tab = *tab;
                Vec::new()
            }
            Step::Copy => {
                self.clipboard = Some(self.core.copy_code(Instant::now()));
                Vec::new()
            }
        };
        Ok(actions)
    }

    fn resolve(&self, target: &ItemRef) -> Result<ItemId, SessionError> {
        let items = self.core.store.items();
        let found = match target {
            ItemRef::Index(i) => items.get(*i),
            ItemRef::Name(name) => items.iter().find(|item| &item.name == name),
        };
        found.map(|item| item.id).ok_or_else(|| SessionError::UnknownItem(target.clone()))
    }
}
