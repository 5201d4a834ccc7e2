//! Document model and interaction engine for the CSS grid layout editor.
//!
//! The crate owns everything behind the editor's panels: the grid document
//! and its mutations, the mapping from pointer positions to grid cells, the
//! move/resize gesture state machine, and the CSS/HTML generators that turn a
//! document into code. The host (a UI toolkit or the `gridmaker` command line)
//! only forwards events and renders snapshots.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EngineCore`]: pointer events in, store mutations and [`engine::Action`]s out |
//! | [`doc`] | Grid configuration, items, spans, and the [`doc::GridStore`] |
//! | [`geometry`] | Container geometry and pointer-to-cell mapping |
//! | [`input`] | Gesture state machine and move/resize span arithmetic |
//! | [`hit`] | Hit-testing items and their resize handles |
//! | [`codegen`] | CSS, HTML, and standalone document generation |
//! | [`panel`] | Code tab, copy acknowledgement, and export file |
//! | [`layout`] | JSON layout documents |
//! | [`consts`] | Shared constants (defaults, handle size, export name) |

pub mod codegen;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod layout;
pub mod panel;
