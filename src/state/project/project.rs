use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::SelectionState;

use super::{LoadedImage, Marker, MarkerKind, MarkerUpdate};

/// Schema version written into saved projects and exports.
pub const PROJECT_VERSION: &str = "2.1";

/// The live editing state: one image and the markers placed on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Schema version for future compatibility
    pub version: String,
    /// The image markers are placed on, if one has been loaded
    pub image: Option<LoadedImage>,
    /// All markers, in insertion order (stable across edits)
    pub markers: Vec<Marker>,

    /// Current selection (not serialized - session state)
    #[serde(skip)]
    pub selection: SelectionState,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            version: PROJECT_VERSION.to_string(),
            image: None,
            markers: Vec::new(),
            selection: SelectionState::default(),
        }
    }
}

impl Project {
    /// Create an empty project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an image has been loaded.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Replace the image. Markers belong to the image they were placed on,
    /// so the marker set and the selection reset with it.
    pub fn set_image(&mut self, image: LoadedImage) {
        self.image = Some(image);
        self.markers.clear();
        self.selection.clear();
    }

    /// Add a marker at the given percent position with the kind's default
    /// color. Returns the new marker's id.
    pub fn add_marker(&mut self, kind: MarkerKind, x: f64, y: f64, is_3d: bool) -> Uuid {
        self.insert_marker(Marker::new(kind, x, y, is_3d))
    }

    /// Add a marker with an explicit dot color (the tool panel's current
    /// swatch). Returns the new marker's id.
    pub fn add_marker_with_color(
        &mut self,
        kind: MarkerKind,
        x: f64,
        y: f64,
        is_3d: bool,
        color: impl Into<String>,
    ) -> Uuid {
        let mut marker = Marker::new(kind, x, y, is_3d);
        marker.color = color.into();
        self.insert_marker(marker)
    }

    fn insert_marker(&mut self, mut marker: Marker) -> Uuid {
        if marker.title.is_empty() {
            marker.title = format!("Marker {}", self.markers.len() + 1);
        }
        let id = marker.id;
        self.markers.push(marker);
        id
    }

    /// Apply a partial edit to a marker. Returns false if the id is unknown.
    pub fn update_marker(&mut self, id: Uuid, update: &MarkerUpdate) -> bool {
        if let Some(marker) = self.markers.iter_mut().find(|marker| marker.id == id) {
            marker.apply(update);
            return true;
        }
        false
    }

    /// Move a marker to a new percent position (clamped). Returns false if
    /// the id is unknown.
    pub fn move_marker(&mut self, id: Uuid, x: f64, y: f64) -> bool {
        if let Some(marker) = self.markers.iter_mut().find(|marker| marker.id == id) {
            marker.set_position(x, y);
            return true;
        }
        false
    }

    /// Remove a marker by ID, dropping it from the selection as well.
    pub fn remove_marker(&mut self, id: Uuid) -> bool {
        let len = self.markers.len();
        self.markers.retain(|m| m.id != id);
        self.selection.remove(id);
        self.markers.len() < len
    }

    /// Remove a batch of markers (the current selection, typically).
    ///
    /// Selection entries for the removed ids go with them, so no stale ids
    /// survive the call. Returns how many markers were removed.
    pub fn remove_markers(&mut self, ids: &[Uuid]) -> usize {
        let len = self.markers.len();
        self.markers.retain(|m| !ids.contains(&m.id));
        for id in ids {
            self.selection.remove(*id);
        }
        len - self.markers.len()
    }

    /// Remove every marker and clear the selection.
    pub fn clear_markers(&mut self) {
        self.markers.clear();
        self.selection.clear();
    }

    /// Find a marker by ID.
    pub fn find_marker(&self, id: Uuid) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// Find a marker by ID, mutably.
    pub fn find_marker_mut(&mut self, id: Uuid) -> Option<&mut Marker> {
        self.markers.iter_mut().find(|m| m.id == id)
    }

    /// Markers whose title, description, or kind contains the search term
    /// (case-insensitive). An empty term yields every marker in store order.
    pub fn query<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Marker> + 'a {
        let needle = term.trim().to_lowercase();
        self.markers.iter().filter(move |marker| {
            needle.is_empty()
                || marker.title.to_lowercase().contains(&needle)
                || marker.description.to_lowercase().contains(&needle)
                || marker.kind.as_str().contains(&needle)
        })
    }

    /// Whether any marker was placed in 3D (VR) mode.
    pub fn has_vr_markers(&self) -> bool {
        self.markers.iter().any(|m| m.is_3d)
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> LoadedImage {
        LoadedImage::new("data:image/jpeg;base64,AAAA", 4096, 2048, "pano.jpg")
    }

    #[test]
    fn test_add_marker_assigns_ordinal_title_and_default_color() {
        let mut project = Project::new();
        project.add_marker(MarkerKind::Info, 10.0, 10.0, false);
        let id = project.add_marker(MarkerKind::Link, 20.0, 20.0, false);

        let marker = project.find_marker(id).unwrap();
        assert_eq!(marker.title, "Marker 2");
        assert_eq!(marker.color, "#28a745");
    }

    #[test]
    fn test_add_marker_clamps_out_of_range_coordinates() {
        let mut project = Project::new();
        let id = project.add_marker(MarkerKind::Info, 150.0, -5.0, false);
        let marker = project.find_marker(id).unwrap();
        assert_eq!(marker.x, 100.0);
        assert_eq!(marker.y, 0.0);
    }

    #[test]
    fn test_update_and_move_return_false_for_unknown_id() {
        let mut project = Project::new();
        assert!(!project.update_marker(Uuid::new_v4(), &MarkerUpdate::default()));
        assert!(!project.move_marker(Uuid::new_v4(), 50.0, 50.0));
    }

    #[test]
    fn test_move_marker_reclamps_and_updates_spherical() {
        let mut project = Project::new();
        let id = project.add_marker(MarkerKind::Info, 10.0, 10.0, true);
        assert!(project.move_marker(id, 50.0, 250.0));

        let marker = project.find_marker(id).unwrap();
        assert_eq!((marker.x, marker.y), (50.0, 100.0));
        assert_eq!((marker.phi, marker.theta), (180.0, 90.0));
    }

    #[test]
    fn test_remove_markers_drops_selection_entries() {
        let mut project = Project::new();
        let a = project.add_marker(MarkerKind::Info, 10.0, 10.0, false);
        let b = project.add_marker(MarkerKind::Info, 20.0, 20.0, false);
        project.selection.select_only(a);
        project.selection.toggle(b);

        let removed = project.remove_markers(&[a]);
        assert_eq!(removed, 1);
        assert!(!project.selection.contains(a));
        assert!(project.selection.contains(b));
        assert_eq!(project.markers.len(), 1);
    }

    #[test]
    fn test_clear_markers_empties_selection_too() {
        let mut project = Project::new();
        let id = project.add_marker(MarkerKind::Video, 30.0, 30.0, false);
        project.selection.select_only(id);

        project.clear_markers();
        assert!(project.markers.is_empty());
        assert!(project.selection.is_empty());
    }

    #[test]
    fn test_set_image_resets_markers() {
        let mut project = Project::new();
        project.add_marker(MarkerKind::Info, 10.0, 10.0, false);
        project.set_image(test_image());
        assert!(project.markers.is_empty());
        assert!(project.has_image());
    }

    #[test]
    fn test_query_matches_title_description_and_kind() {
        let mut project = Project::new();
        let a = project.add_marker(MarkerKind::Info, 1.0, 1.0, false);
        let b = project.add_marker(MarkerKind::Video, 2.0, 2.0, false);
        project.find_marker_mut(a).unwrap().title = "Lobby entrance".to_string();
        project.find_marker_mut(b).unwrap().description = "clip of the LOBBY".to_string();

        let hits: Vec<Uuid> = project.query("lobby").map(|m| m.id).collect();
        assert_eq!(hits, vec![a, b]);

        let by_kind: Vec<Uuid> = project.query("video").map(|m| m.id).collect();
        assert_eq!(by_kind, vec![b]);

        // empty term yields everything, and the iterator restarts cleanly
        assert_eq!(project.query("").count(), 2);
        assert_eq!(project.query("").count(), 2);

        assert_eq!(project.query("no such marker").count(), 0);
    }

    #[test]
    fn test_project_serialization_skips_selection() {
        let mut project = Project::new();
        let id = project.add_marker(MarkerKind::Info, 5.0, 5.0, false);
        project.selection.select_only(id);

        let json = serde_json::to_string_pretty(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.markers, project.markers);
        assert!(parsed.selection.is_empty());
    }
}
