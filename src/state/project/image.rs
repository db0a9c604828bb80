use serde::{Deserialize, Serialize};

/// Aspect ratio of a full equirectangular panorama (360 x 180 degrees).
const PANORAMA_ASPECT: f64 = 2.0;
/// How far the aspect ratio may deviate and still count as a panorama.
const PANORAMA_TOLERANCE: f64 = 0.2;

/// An image loaded into the editor, held as a self-contained data URI so
/// projects and exports never depend on the original file staying put.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadedImage {
    /// Data URI (`data:image/...;base64,...`) or a remote URL from an import.
    pub src: String,
    /// Natural width in pixels
    pub width: u32,
    /// Natural height in pixels
    pub height: u32,
    /// Original file name, for display only
    #[serde(default)]
    pub name: String,
}

impl LoadedImage {
    pub fn new(src: impl Into<String>, width: u32, height: u32, name: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            width,
            height,
            name: name.into(),
        }
    }

    /// Width over height, or 0.0 for degenerate dimensions.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 0.0;
        }
        self.width as f64 / self.height as f64
    }

    /// Heuristic: a 2:1 aspect ratio (within tolerance) suggests an
    /// equirectangular 360° panorama. Advisory only; the user can still
    /// place VR markers on any image.
    pub fn is_panorama(&self) -> bool {
        (self.aspect_ratio() - PANORAMA_ASPECT).abs() < PANORAMA_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panorama_detection() {
        let pano = LoadedImage::new("data:image/jpeg;base64,", 4096, 2048, "pano.jpg");
        assert!(pano.is_panorama());

        let near = LoadedImage::new("data:image/jpeg;base64,", 3840, 2000, "wide.jpg");
        assert!(near.is_panorama());

        let photo = LoadedImage::new("data:image/jpeg;base64,", 1920, 1080, "photo.jpg");
        assert!(!photo.is_panorama());

        let degenerate = LoadedImage::new("data:image/png;base64,", 100, 0, "broken.png");
        assert!(!degenerate.is_panorama());
    }
}
