use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::spherical;

/// The kind of content a marker carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    /// Text-only annotation (title + description)
    Info,
    /// External hyperlink
    Link,
    /// Audio attachment (platform or direct file)
    Audio,
    /// Video attachment (platform or direct file)
    Video,
}

impl MarkerKind {
    /// Lowercase name as it appears on the wire and in CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerKind::Info => "info",
            MarkerKind::Link => "link",
            MarkerKind::Audio => "audio",
            MarkerKind::Video => "video",
        }
    }

    /// Display label for UI lists and status messages.
    pub fn label(&self) -> &'static str {
        match self {
            MarkerKind::Info => "Info",
            MarkerKind::Link => "Link",
            MarkerKind::Audio => "Audio",
            MarkerKind::Video => "Video",
        }
    }

    /// Default dot color for this kind (hex).
    pub fn default_color(&self) -> &'static str {
        match self {
            MarkerKind::Info => "#007bff",
            MarkerKind::Link => "#28a745",
            MarkerKind::Audio => "#ffc107",
            MarkerKind::Video => "#dc3545",
        }
    }

    /// All kinds in tool-panel order.
    pub fn all() -> [MarkerKind; 4] {
        [
            MarkerKind::Info,
            MarkerKind::Link,
            MarkerKind::Audio,
            MarkerKind::Video,
        ]
    }
}

/// A positioned annotation on the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Unique identifier
    pub id: Uuid,
    /// Kind of content this marker carries
    #[serde(rename = "type")]
    pub kind: MarkerKind,
    /// Horizontal position in percent of image width, clamped to [0, 100]
    pub x: f64,
    /// Vertical position in percent of image height, clamped to [0, 100]
    pub y: f64,
    /// Azimuth in degrees [0, 360], derived from x
    #[serde(default)]
    pub phi: f64,
    /// Polar angle in degrees [-90, 90], derived from y
    #[serde(default)]
    pub theta: f64,
    /// Whether this marker was placed in 3D (VR) mode
    #[serde(rename = "is3D", default)]
    pub is_3d: bool,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Longer description shown in the popup
    #[serde(default)]
    pub description: String,
    /// Target URL for link markers
    #[serde(default)]
    pub url: String,
    /// Media URL for audio/video markers
    #[serde(rename = "mediaUrl", default)]
    pub media_url: String,
    /// Dot color (hex string, e.g., "#007bff")
    #[serde(default)]
    pub color: String,
    /// Dot opacity from 0.0 (transparent) to 1.0 (opaque)
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl Marker {
    /// Create a new marker at the given percent position.
    ///
    /// Coordinates are clamped to [0, 100]; the spherical angles are kept
    /// in sync so a later VR export never sees stale values.
    pub fn new(kind: MarkerKind, x: f64, y: f64, is_3d: bool) -> Self {
        let x = x.clamp(0.0, 100.0);
        let y = y.clamp(0.0, 100.0);
        let (phi, theta) = spherical::spherical_from_percent(x, y);
        Self {
            id: Uuid::new_v4(),
            kind,
            x,
            y,
            phi,
            theta,
            is_3d,
            title: String::new(),
            description: String::new(),
            url: String::new(),
            media_url: String::new(),
            color: kind.default_color().to_string(),
            opacity: default_opacity(),
        }
    }

    /// Move the marker, clamping and re-deriving the spherical angles.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x.clamp(0.0, 100.0);
        self.y = y.clamp(0.0, 100.0);
        let (phi, theta) = spherical::spherical_from_percent(self.x, self.y);
        self.phi = phi;
        self.theta = theta;
    }

    /// Apply a partial edit from the properties form.
    pub fn apply(&mut self, update: &MarkerUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(url) = &update.url {
            self.url = url.clone();
        }
        if let Some(media_url) = &update.media_url {
            self.media_url = media_url.clone();
        }
        if let Some(color) = &update.color {
            self.color = color.clone();
        }
        if let Some(opacity) = update.opacity {
            self.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    /// Fill gaps left by imported documents: missing color falls back to the
    /// kind default, a blank title gets a positional one, coordinates are
    /// re-clamped and the spherical angles re-derived.
    pub fn normalize(&mut self, ordinal: usize) {
        if self.color.trim().is_empty() {
            self.color = self.kind.default_color().to_string();
        }
        if self.title.trim().is_empty() {
            self.title = format!("Marker {ordinal}");
        }
        if !self.opacity.is_finite() {
            self.opacity = default_opacity();
        }
        self.opacity = self.opacity.clamp(0.0, 1.0);
        self.set_position(self.x, self.y);
    }
}

/// A partial marker edit; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub media_url: Option<String>,
    pub color: Option<String>,
    pub opacity: Option<f64>,
}

fn default_opacity() -> f64 {
    0.8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_marker_clamps_coordinates() {
        let marker = Marker::new(MarkerKind::Info, 150.0, -20.0, false);
        assert_eq!(marker.x, 100.0);
        assert_eq!(marker.y, 0.0);

        let marker = Marker::new(MarkerKind::Info, 42.5, 99.9, false);
        assert_eq!(marker.x, 42.5);
        assert_eq!(marker.y, 99.9);
    }

    #[test]
    fn test_new_marker_defaults() {
        let marker = Marker::new(MarkerKind::Audio, 10.0, 10.0, true);
        assert_eq!(marker.color, "#ffc107");
        assert_eq!(marker.opacity, 0.8);
        assert!(marker.is_3d);
        assert!(marker.title.is_empty());
    }

    #[test]
    fn test_default_color_per_kind() {
        assert_eq!(MarkerKind::Info.default_color(), "#007bff");
        assert_eq!(MarkerKind::Link.default_color(), "#28a745");
        assert_eq!(MarkerKind::Audio.default_color(), "#ffc107");
        assert_eq!(MarkerKind::Video.default_color(), "#dc3545");
    }

    #[test]
    fn test_set_position_keeps_spherical_in_sync() {
        let mut marker = Marker::new(MarkerKind::Info, 0.0, 0.0, true);
        marker.set_position(50.0, 50.0);
        assert_eq!(marker.phi, 180.0);
        assert_eq!(marker.theta, 0.0);

        marker.set_position(200.0, 200.0);
        assert_eq!(marker.x, 100.0);
        assert_eq!(marker.y, 100.0);
        assert_eq!(marker.phi, 360.0);
        assert_eq!(marker.theta, 90.0);
    }

    #[test]
    fn test_apply_partial_update() {
        let mut marker = Marker::new(MarkerKind::Link, 5.0, 5.0, false);
        marker.apply(&MarkerUpdate {
            title: Some("Entrance".to_string()),
            url: Some("https://example.com".to_string()),
            opacity: Some(1.5),
            ..Default::default()
        });
        assert_eq!(marker.title, "Entrance");
        assert_eq!(marker.url, "https://example.com");
        assert_eq!(marker.opacity, 1.0);
        // untouched fields keep their values
        assert_eq!(marker.color, "#28a745");
        assert!(marker.description.is_empty());
    }

    #[test]
    fn test_normalize_fills_missing_fields() {
        let mut marker = Marker::new(MarkerKind::Video, 120.0, 50.0, false);
        marker.color = String::new();
        marker.title = "  ".to_string();
        marker.normalize(3);
        assert_eq!(marker.color, "#dc3545");
        assert_eq!(marker.title, "Marker 3");
        assert_eq!(marker.x, 100.0);
    }

    #[test]
    fn test_marker_wire_names() {
        let marker = Marker::new(MarkerKind::Video, 25.0, 75.0, true);
        let json = serde_json::to_string(&marker).unwrap();
        assert!(json.contains("\"type\":\"video\""));
        assert!(json.contains("\"is3D\":true"));
        assert!(json.contains("\"mediaUrl\":\"\""));

        let back: Marker = serde_json::from_str(&json).unwrap();
        assert_eq!(back, marker);
    }

    #[test]
    fn test_marker_deserializes_sparse_document() {
        // Imported documents may omit everything but the placement fields.
        let json = r#"{
            "id": "4fa4019e-7a38-4f2e-9d7b-27c64ccf89ad",
            "type": "info",
            "x": 10.0,
            "y": 20.0
        }"#;
        let marker: Marker = serde_json::from_str(json).unwrap();
        assert_eq!(marker.kind, MarkerKind::Info);
        assert!(!marker.is_3d);
        assert_eq!(marker.opacity, 0.8);
        assert!(marker.color.is_empty());
    }
}
