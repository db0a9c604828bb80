//! State management module
//!
//! This module contains all the core data structures for the application:
//! - Project: the live editing state (image + markers + selection)
//! - Marker: a positioned annotation with content fields
//! - ProjectData: the wire format shared by saves and exports
//! - SelectionState: which markers are selected
//! - History: snapshot-based undo/redo

mod history;
mod project;
mod selection;

pub use history::*;
pub use project::*;
pub use selection::*;
