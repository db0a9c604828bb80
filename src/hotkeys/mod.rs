//! Keyboard shortcuts
//!
//! One dispatch point for every editor shortcut: [`handle_hotkey`] turns a
//! key event plus a [`HotkeyContext`] into a [`HotkeyAction`], and the App
//! component executes whatever comes back. New bindings get a variant, a
//! match arm here, and a handler arm in the App.

use dioxus::prelude::Key;

/// Semantic actions, decoupled from the keys that trigger them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Step the project back one snapshot.
    Undo,
    /// Reapply the last undone snapshot.
    Redo,
    /// Save the current project to disk.
    SaveProject,
    /// Delete every selected marker.
    DeleteSelection,
    /// Drop the selection without touching markers.
    ClearSelection,
}

/// App state that gates which bindings are live.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// An input field has focus; editing keys belong to it.
    pub input_focused: bool,
    /// At least one marker is selected.
    pub has_selection: bool,
}

/// What a key event resolved to.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// Execute this action
    Action(HotkeyAction),
    /// The key means nothing in this context
    NoMatch,
    /// A binding exists but typing in an input takes priority
    Suppressed,
}

/// Resolves one key event against the current context.
pub fn handle_hotkey(
    key: &Key,
    shift: bool,
    ctrl: bool,
    _alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    let command = ctrl || meta;

    // Global bindings
    match key {
        Key::Character(c) if command && c.eq_ignore_ascii_case("z") => {
            return if shift {
                HotkeyResult::Action(HotkeyAction::Redo)
            } else {
                HotkeyResult::Action(HotkeyAction::Undo)
            };
        }
        Key::Character(c) if command && c.eq_ignore_ascii_case("y") => {
            return HotkeyResult::Action(HotkeyAction::Redo);
        }
        Key::Character(c) if command && c.eq_ignore_ascii_case("s") => {
            return HotkeyResult::Action(HotkeyAction::SaveProject);
        }
        _ => {}
    }

    // Selection-dependent bindings
    if context.has_selection {
        match key {
            Key::Delete | Key::Backspace => {
                return HotkeyResult::Action(HotkeyAction::DeleteSelection);
            }
            Key::Escape => {
                return HotkeyResult::Action(HotkeyAction::ClearSelection);
            }
            _ => {}
        }
    }

    HotkeyResult::NoMatch
}
