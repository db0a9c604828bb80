//! Project data model
//!
//! This module contains the core data structures for a marker project.

mod image;
mod marker;
mod persistence;
mod project;

pub use image::LoadedImage;
pub use marker::{Marker, MarkerKind, MarkerUpdate};
pub use persistence::ProjectData;
pub use project::{Project, PROJECT_VERSION};
