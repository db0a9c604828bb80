//! Marker canvas
//!
//! The loaded image with interactive marker dots layered on top. Marker
//! positions are percentages of the image box, so the canvas needs to know
//! its rendered size to translate clicks and drags.

mod marker_element;
mod panel;

pub use panel::CanvasPanel;

use serde::Deserialize;

/// Rendered size of the canvas element in CSS pixels, reported by the
/// resize-observer script wired up in the App component.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn is_usable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}
