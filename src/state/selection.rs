//! Selection state shared across views.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tracks which markers are selected in the canvas and the marker list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Selected marker IDs, in the order they were selected.
    pub marker_ids: Vec<Uuid>,
}

impl SelectionState {
    /// Clear the selection.
    pub fn clear(&mut self) {
        self.marker_ids.clear();
    }

    /// Replace the selection with a single marker.
    pub fn select_only(&mut self, marker_id: Uuid) {
        self.marker_ids.clear();
        self.marker_ids.push(marker_id);
    }

    /// Add a marker to the selection, or remove it if already selected.
    pub fn toggle(&mut self, marker_id: Uuid) {
        if self.contains(marker_id) {
            self.remove(marker_id);
        } else {
            self.marker_ids.push(marker_id);
        }
    }

    /// Remove a marker from the selection, if present.
    pub fn remove(&mut self, marker_id: Uuid) {
        self.marker_ids.retain(|id| *id != marker_id);
    }

    /// Whether the given marker is selected.
    pub fn contains(&self, marker_id: Uuid) -> bool {
        self.marker_ids.contains(&marker_id)
    }

    /// The first selected marker, if any.
    pub fn primary(&self) -> Option<Uuid> {
        self.marker_ids.first().copied()
    }

    /// The selected marker when exactly one is selected.
    ///
    /// The properties panel only shows a form in this case.
    pub fn single(&self) -> Option<Uuid> {
        if self.marker_ids.len() == 1 {
            self.marker_ids.first().copied()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.marker_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marker_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = SelectionState::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        selection.toggle(a);
        selection.toggle(b);
        assert_eq!(selection.len(), 2);
        assert!(selection.contains(a));

        selection.toggle(a);
        assert!(!selection.contains(a));
        assert_eq!(selection.primary(), Some(b));
    }

    #[test]
    fn test_single_requires_exactly_one() {
        let mut selection = SelectionState::default();
        assert_eq!(selection.single(), None);

        let a = Uuid::new_v4();
        selection.select_only(a);
        assert_eq!(selection.single(), Some(a));

        selection.toggle(Uuid::new_v4());
        assert_eq!(selection.single(), None);
        assert_eq!(selection.primary(), Some(a));
    }
}
