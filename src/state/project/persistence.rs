use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{LoadedImage, Marker, Project, PROJECT_VERSION};

/// The wire format shared by saved projects, JSON exports, and the payloads
/// embedded in exported HTML documents.
///
/// Field names follow the published document format, so files written by
/// older viewers import cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    /// Image source: a data URI or a remote URL.
    pub image_src: String,
    /// All markers in store order.
    pub markers: Vec<Marker>,
    /// Schema version of the writing editor.
    pub version: String,
    /// When the document was produced (absent on hand-written files).
    #[serde(default)]
    pub export_date: Option<DateTime<Utc>>,
    /// Marker count at export time, for viewers that want it cheaply.
    #[serde(default)]
    pub total_markers: Option<usize>,
    /// Whether any marker was placed in 3D mode.
    #[serde(rename = "hasVRMarkers", default)]
    pub has_vr_markers: Option<bool>,
}

impl ProjectData {
    /// Write the document to `path` as pretty JSON.
    ///
    /// The write goes through a sibling `.tmp` file and a rename, so a
    /// crash mid-write never leaves a truncated document behind.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        let tmp_path = temp_path(path);
        fs::write(&tmp_path, json)?;
        if path.exists() {
            let _ = fs::remove_file(path);
        }
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    /// Read a document from `path`.
    ///
    /// Parsing is strict: a malformed file fails the whole load rather than
    /// importing half a project.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

impl Project {
    /// Build the live editing state from an imported document.
    ///
    /// Individual markers are forgiving: a missing color falls back to the
    /// kind default, blank titles get positional ones, and coordinates are
    /// re-clamped. An empty image source leaves the project imageless.
    pub fn from_data(data: ProjectData) -> Self {
        let image = if data.image_src.trim().is_empty() {
            None
        } else {
            // natural dimensions are unknown until the app probes the data;
            // the panorama hint stays off in the meantime
            Some(LoadedImage::new(data.image_src, 0, 0, ""))
        };

        let mut markers = data.markers;
        for (index, marker) in markers.iter_mut().enumerate() {
            marker.normalize(index + 1);
        }

        let version = if data.version.trim().is_empty() {
            PROJECT_VERSION.to_string()
        } else {
            data.version
        };

        Self {
            version,
            image,
            markers,
            selection: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MarkerKind;
    use uuid::Uuid;

    fn sample_data() -> ProjectData {
        ProjectData {
            image_src: "data:image/jpeg;base64,AAAA".to_string(),
            markers: vec![
                Marker::new(MarkerKind::Info, 10.0, 10.0, false),
                Marker::new(MarkerKind::Video, 50.0, 50.0, true),
            ],
            version: PROJECT_VERSION.to_string(),
            export_date: Some(Utc::now()),
            total_markers: Some(2),
            has_vr_markers: Some(true),
        }
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_string(&sample_data()).unwrap();
        assert!(json.contains("\"imageSrc\""));
        assert!(json.contains("\"exportDate\""));
        assert!(json.contains("\"totalMarkers\""));
        assert!(json.contains("\"hasVRMarkers\""));
    }

    #[test]
    fn test_from_data_fills_per_marker_defaults() {
        // three markers, the middle one with no color and no title
        let json = format!(
            r##"{{
                "imageSrc": "https://example.com/pano.jpg",
                "version": "2.1",
                "markers": [
                    {{"id": "{}", "type": "info", "x": 10, "y": 10,
                      "title": "First", "color": "#123456"}},
                    {{"id": "{}", "type": "audio", "x": 20, "y": 20}},
                    {{"id": "{}", "type": "link", "x": 130, "y": 30,
                      "title": "Third", "color": "#abcdef"}}
                ]
            }}"##,
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        let data: ProjectData = serde_json::from_str(&json).unwrap();
        let project = Project::from_data(data);

        assert_eq!(project.markers.len(), 3);
        assert_eq!(project.markers[0].color, "#123456");
        // the sparse marker got its kind default and a positional title
        assert_eq!(project.markers[1].color, "#ffc107");
        assert_eq!(project.markers[1].title, "Marker 2");
        // out-of-range x was clamped on entry
        assert_eq!(project.markers[2].x, 100.0);
    }

    #[test]
    fn test_from_data_without_image_stays_imageless() {
        let mut data = sample_data();
        data.image_src = "   ".to_string();
        let project = Project::from_data(data);
        assert!(!project.has_image());
        assert_eq!(project.markers.len(), 2);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let data = sample_data();
        let path = std::env::temp_dir().join(format!("panomark-test-{}.json", Uuid::new_v4()));

        data.save_to(&path).unwrap();
        let loaded = ProjectData::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, data);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let path = std::env::temp_dir().join(format!("panomark-bad-{}.json", Uuid::new_v4()));
        fs::write(&path, "{not json").unwrap();

        let result = ProjectData::load(&path);
        fs::remove_file(&path).ok();

        let err = result.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
