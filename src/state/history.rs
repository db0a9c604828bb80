use std::collections::VecDeque;

use crate::state::{Marker, Project, SelectionState};

/// Maximum number of undo snapshots to keep
const MAX_HISTORY_SIZE: usize = 50;

/// Deep copy of everything undo needs to restore: the marker set and the
/// selection that was active when the snapshot was taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    markers: Vec<Marker>,
    selection: SelectionState,
}

impl Snapshot {
    fn capture(project: &Project) -> Self {
        Self {
            markers: project.markers.clone(),
            selection: project.selection.clone(),
        }
    }

    fn restore_into(self, project: &mut Project) {
        project.markers = self.markers;
        project.selection = self.selection;
    }
}

/// Snapshot-based undo/redo stacks.
///
/// Callers record a snapshot *before* mutating the project; undo swaps the
/// live state against the most recent snapshot, redo swaps it back.
#[derive(Debug, Default)]
pub struct History {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current project state as an undo point.
    ///
    /// Any redo entries become unreachable and are dropped. The undo stack
    /// keeps at most [`MAX_HISTORY_SIZE`] entries, evicting the oldest.
    pub fn record(&mut self, project: &Project) {
        self.push_undo(Snapshot::capture(project));
        self.redo_stack.clear();
    }

    /// Roll the project back to the most recent snapshot.
    ///
    /// Returns false when there is nothing to undo; the project is untouched.
    pub fn undo(&mut self, project: &mut Project) -> bool {
        let Some(snapshot) = self.undo_stack.pop_back() else {
            return false;
        };
        self.redo_stack.push(Snapshot::capture(project));
        snapshot.restore_into(project);
        true
    }

    /// Re-apply the most recently undone state.
    ///
    /// Returns false when there is nothing to redo; the project is untouched.
    pub fn redo(&mut self, project: &mut Project) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        self.push_undo(Snapshot::capture(project));
        snapshot.restore_into(project);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drop all snapshots (used when a new image or project replaces the
    /// current one).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);
        if self.undo_stack.len() > MAX_HISTORY_SIZE {
            self.undo_stack.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MarkerKind;

    fn project_with_markers(count: usize) -> Project {
        let mut project = Project::new();
        for i in 0..count {
            project.add_marker(MarkerKind::Info, i as f64, i as f64, false);
        }
        project
    }

    #[test]
    fn test_undo_on_empty_history_is_a_no_op() {
        let mut history = History::new();
        let mut project = project_with_markers(2);
        let before = project.markers.clone();
        assert!(!history.undo(&mut project));
        assert_eq!(project.markers, before);
    }

    #[test]
    fn test_undo_restores_previous_state() {
        let mut history = History::new();
        let mut project = Project::new();

        history.record(&project);
        project.add_marker(MarkerKind::Info, 10.0, 10.0, false);
        assert_eq!(project.markers.len(), 1);

        assert!(history.undo(&mut project));
        assert!(project.markers.is_empty());
    }

    #[test]
    fn test_redo_restores_undone_state() {
        let mut history = History::new();
        let mut project = Project::new();

        history.record(&project);
        let id = project.add_marker(MarkerKind::Link, 30.0, 40.0, false);

        history.undo(&mut project);
        assert!(project.markers.is_empty());

        assert!(history.redo(&mut project));
        assert_eq!(project.markers.len(), 1);
        assert_eq!(project.markers[0].id, id);
    }

    #[test]
    fn test_sequence_of_undos_walks_back_to_start() {
        let mut history = History::new();
        let mut project = Project::new();

        for i in 0..5 {
            history.record(&project);
            project.add_marker(MarkerKind::Info, i as f64 * 10.0, 0.0, false);
        }
        assert_eq!(project.markers.len(), 5);

        for expected in (0..5).rev() {
            assert!(history.undo(&mut project));
            assert_eq!(project.markers.len(), expected);
        }
        assert!(!history.can_undo());

        for expected in 1..=5 {
            assert!(history.redo(&mut project));
            assert_eq!(project.markers.len(), expected);
        }
        assert!(!history.can_redo());
    }

    #[test]
    fn test_new_mutation_clears_redo() {
        let mut history = History::new();
        let mut project = Project::new();

        history.record(&project);
        project.add_marker(MarkerKind::Info, 10.0, 10.0, false);
        history.undo(&mut project);
        assert!(history.can_redo());

        history.record(&project);
        project.add_marker(MarkerKind::Video, 20.0, 20.0, false);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_depth_is_capped_with_oldest_evicted() {
        let mut history = History::new();
        let mut project = Project::new();

        for _ in 0..(MAX_HISTORY_SIZE + 10) {
            history.record(&project);
            project.add_marker(MarkerKind::Info, 0.0, 0.0, false);
        }

        let mut undone = 0;
        while history.undo(&mut project) {
            undone += 1;
        }
        assert_eq!(undone, MAX_HISTORY_SIZE);
        // the oldest ten snapshots were evicted, so the walk stops short
        // of the empty initial state
        assert_eq!(project.markers.len(), 10);
    }

    #[test]
    fn test_undo_restores_selection() {
        let mut history = History::new();
        let mut project = Project::new();
        let id = project.add_marker(MarkerKind::Info, 5.0, 5.0, false);
        project.selection.select_only(id);

        history.record(&project);
        project.selection.clear();
        project.clear_markers();

        assert!(history.undo(&mut project));
        assert_eq!(project.markers.len(), 1);
        assert!(project.selection.contains(id));
    }
}
