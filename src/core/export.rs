//! Export document generation.
//!
//! All three flavors render from the same [`ProjectData`] snapshot. The 2D
//! and VR pages inline everything they need, with per-marker data serialized
//! into `data-marker` attributes. Media embeds are resolved here at export
//! time so the generated pages never re-derive them.

use chrono::Utc;
use serde::Serialize;

use crate::core::media;
use crate::core::spherical;
use crate::core::viewer;
use crate::state::{Marker, Project, ProjectData};

/// Document flavors offered by the export dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Html2d,
    Vr,
    Json,
}

impl ExportKind {
    pub fn label(&self) -> &'static str {
        match self {
            ExportKind::Html2d => "2D Interactive HTML",
            ExportKind::Vr => "VR 360° Experience",
            ExportKind::Json => "Project JSON",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportKind::Html2d => "interactive-image-2d.html",
            ExportKind::Vr => "interactive-image-vr.html",
            ExportKind::Json => "interactive-image-project.json",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::Html2d | ExportKind::Vr => "html",
            ExportKind::Json => "json",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Load an image before exporting")]
    NoImage,
    #[error("Place at least one marker before exporting")]
    NoMarkers,
    #[error("Could not encode project data: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Snapshots the project for export. Refuses to produce an empty document.
pub fn project_data(project: &Project) -> Result<ProjectData, ExportError> {
    let image = project.image.as_ref().ok_or(ExportError::NoImage)?;
    if project.markers.is_empty() {
        return Err(ExportError::NoMarkers);
    }
    Ok(ProjectData {
        image_src: image.src.clone(),
        markers: project.markers.clone(),
        version: project.version.clone(),
        export_date: Some(Utc::now()),
        total_markers: Some(project.markers.len()),
        has_vr_markers: Some(project.has_vr_markers()),
    })
}

pub fn render(kind: ExportKind, data: &ProjectData) -> Result<String, ExportError> {
    match kind {
        ExportKind::Html2d => render_standalone_html(data),
        ExportKind::Vr => render_vr_html(data),
        ExportKind::Json => render_json(data),
    }
}

/// Marker record as it appears in a `data-marker` attribute: the stored
/// fields plus the pre-rendered embed fragment the viewer drops into the
/// popup verbatim.
#[derive(Serialize)]
struct MarkerPayload<'a> {
    #[serde(flatten)]
    marker: &'a Marker,
    #[serde(rename = "embedHtml")]
    embed_html: String,
}

fn embed_fragment(marker: &Marker) -> String {
    if marker.media_url.trim().is_empty() {
        return String::new();
    }
    media::classify(&marker.media_url).embed_html()
}

/// Serializes a marker for a single-quoted HTML attribute. Only the quote
/// character that would terminate the attribute needs escaping; JSON itself
/// never emits a bare `'`, but titles and descriptions can carry one.
fn marker_payload_attr(marker: &Marker) -> Result<String, ExportError> {
    let payload = MarkerPayload {
        marker,
        embed_html: embed_fragment(marker),
    };
    let json = serde_json::to_string(&payload)?;
    Ok(json.replace('\'', "&apos;"))
}

/// A-Frame position triple. Adding 0.0 folds IEEE negative zero so a hotspot
/// dead ahead prints as `0.0000` rather than `-0.0000`.
fn format_position(position: [f64; 3]) -> String {
    format!(
        "{:.4} {:.4} {:.4}",
        position[0] + 0.0,
        position[1] + 0.0,
        position[2] + 0.0
    )
}

const POPUP_HTML: &str = r#"    <div class="popup-overlay" id="popupOverlay">
        <div class="popup">
            <button class="popup-close" onclick="closePopup()">&times;</button>
            <h2 id="popupTitle"></h2>
            <p id="popupDescription"></p>
            <a id="popupLink" target="_blank" rel="noopener"></a>
            <div id="popupMedia"></div>
        </div>
    </div>
"#;

const VR_POPUP_HTML: &str = r#"    <div class="vr-popup" id="vrPopup">
        <button class="vr-popup-close" onclick="closeHotspotPopup()">&times;</button>
        <h2 id="vrPopupTitle"></h2>
        <p id="vrPopupDescription"></p>
        <a id="vrPopupLink" target="_blank" rel="noopener"></a>
        <div class="vr-popup-media" id="vrPopupMedia"></div>
    </div>
"#;

/// Flat interactive page: the image at its natural aspect with absolutely
/// positioned marker dots, click-to-popup.
pub fn render_standalone_html(data: &ProjectData) -> Result<String, ExportError> {
    let mut markers_html = String::new();
    for marker in &data.markers {
        let attr = marker_payload_attr(marker)?;
        markers_html.push_str(&format!(
            "        <div class=\"marker {kind}\" style=\"left: {x}%; top: {y}%; background-color: {color}; opacity: {opacity};\" data-marker='{attr}' onclick=\"showMarkerInfo(this)\" title=\"{title}\"></div>\n",
            kind = marker.kind.as_str(),
            x = marker.x,
            y = marker.y,
            color = media::escape_attr(&marker.color),
            opacity = marker.opacity,
            attr = attr,
            title = media::escape_attr(&marker.title),
        ));
    }

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("    <title>Interactive Image</title>\n");
    html.push_str("    <style>");
    html.push_str(viewer::VIEWER_CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str("    <div class=\"image-container\">\n");
    html.push_str(&format!(
        "        <img src=\"{}\" alt=\"Interactive image\">\n",
        media::escape_attr(&data.image_src)
    ));
    html.push_str(&markers_html);
    html.push_str("    </div>\n");
    html.push_str(POPUP_HTML);
    html.push_str("    <script>");
    html.push_str(viewer::VIEWER_SCRIPT);
    html.push_str("</script>\n");
    html.push_str("</body>\n</html>\n");
    Ok(html)
}

/// VR page: the image as an equirectangular sky with hotspot entities on a
/// fixed-radius sphere around the camera. Only markers placed in 3D mode
/// become hotspots; a project with none gets every marker promoted so the
/// export is never an empty sky.
pub fn render_vr_html(data: &ProjectData) -> Result<String, ExportError> {
    let placed: Vec<&Marker> = data.markers.iter().filter(|m| m.is_3d).collect();
    let hotspot_markers: Vec<&Marker> = if placed.is_empty() {
        data.markers.iter().collect()
    } else {
        placed
    };

    let mut hotspots = String::new();
    for marker in &hotspot_markers {
        // x/y is the source of truth; stored angles may be stale in
        // documents written by other tools.
        let (phi, theta) = spherical::spherical_from_percent(marker.x, marker.y);
        let position =
            spherical::cartesian_from_spherical(phi, theta, spherical::HOTSPOT_RADIUS);
        let attr = marker_payload_attr(marker)?;
        hotspots.push_str(&format!(
            "            <a-entity class=\"hotspot\" position=\"{}\" data-marker='{}'>\n",
            format_position(position),
            attr,
        ));
        hotspots.push_str(&format!(
            "                <a-sphere radius=\"0.2\" color=\"{}\"></a-sphere>\n",
            media::escape_attr(&marker.color),
        ));
        hotspots.push_str(&format!(
            "                <a-text value=\"{}\" position=\"0 0.5 0\" align=\"center\" color=\"white\"></a-text>\n",
            media::escape_attr(&marker.title),
        ));
        hotspots.push_str("            </a-entity>\n");
    }

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <title>Interactive 360° Image</title>\n");
    html.push_str(&format!(
        "    <script src=\"{}\"></script>\n",
        viewer::AFRAME_SRC
    ));
    html.push_str("    <style>");
    html.push_str(viewer::VR_CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str("    <a-scene cursor=\"rayOrigin: mouse\" raycaster=\"objects: .hotspot\">\n");
    html.push_str(&format!(
        "        <a-sky src=\"{}\" rotation=\"{}\"></a-sky>\n",
        media::escape_attr(&data.image_src),
        spherical::SKY_ROTATION_DEG,
    ));
    html.push_str("        <a-entity id=\"hotspots\">\n");
    html.push_str(&hotspots);
    html.push_str("        </a-entity>\n");
    html.push_str("        <a-camera position=\"0 0 0\"></a-camera>\n");
    html.push_str("    </a-scene>\n");
    html.push_str(VR_POPUP_HTML);
    html.push_str("    <script>");
    html.push_str(viewer::VR_VIEWER_SCRIPT);
    html.push_str("</script>\n");
    html.push_str("</body>\n</html>\n");
    Ok(html)
}

/// Pretty-printed project snapshot. Loads back through the same wire format.
pub fn render_json(data: &ProjectData) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LoadedImage, MarkerKind, MarkerUpdate};

    fn loaded_project() -> Project {
        let mut project = Project::new();
        project.set_image(LoadedImage::new(
            "data:image/png;base64,QUJD",
            4096,
            2048,
            "pano.png",
        ));
        project
    }

    #[test]
    fn test_export_refuses_without_image() {
        let project = Project::new();
        assert!(matches!(project_data(&project), Err(ExportError::NoImage)));
    }

    #[test]
    fn test_export_refuses_without_markers() {
        let project = loaded_project();
        assert!(matches!(
            project_data(&project),
            Err(ExportError::NoMarkers)
        ));
    }

    #[test]
    fn test_project_data_fills_summary_fields() {
        let mut project = loaded_project();
        project.add_marker(MarkerKind::Info, 25.0, 75.0, false);
        project.add_marker(MarkerKind::Video, 50.0, 50.0, true);

        let data = project_data(&project).unwrap();
        assert_eq!(data.version, "2.1");
        assert_eq!(data.total_markers, Some(2));
        assert_eq!(data.has_vr_markers, Some(true));
        assert!(data.export_date.is_some());
        assert_eq!(data.image_src, "data:image/png;base64,QUJD");
    }

    #[test]
    fn test_file_names_per_kind() {
        assert_eq!(ExportKind::Html2d.file_name(), "interactive-image-2d.html");
        assert_eq!(ExportKind::Vr.file_name(), "interactive-image-vr.html");
        assert_eq!(
            ExportKind::Json.file_name(),
            "interactive-image-project.json"
        );
    }

    #[test]
    fn test_standalone_html_places_markers() {
        let mut project = loaded_project();
        let id = project.add_marker(MarkerKind::Info, 25.0, 75.0, false);
        project.update_marker(
            id,
            &MarkerUpdate {
                title: Some("Front door".into()),
                ..Default::default()
            },
        );

        let data = project_data(&project).unwrap();
        let html = render_standalone_html(&data).unwrap();
        assert!(html.contains("class=\"marker info\""));
        assert!(html.contains("left: 25%"));
        assert!(html.contains("top: 75%"));
        assert!(html.contains("background-color: #007bff"));
        assert!(html.contains("title=\"Front door\""));
        assert!(html.contains("data-marker='"));
        assert!(html.contains("showMarkerInfo"));
        assert!(html.contains(&data.image_src));
    }

    #[test]
    fn test_payload_escapes_attribute_quotes() {
        let mut project = loaded_project();
        let id = project.add_marker(MarkerKind::Info, 10.0, 10.0, false);
        project.update_marker(
            id,
            &MarkerUpdate {
                title: Some("Bob's house".into()),
                ..Default::default()
            },
        );

        let data = project_data(&project).unwrap();
        let html = render_standalone_html(&data).unwrap();
        assert!(html.contains("Bob&apos;s house"));
    }

    #[test]
    fn test_payload_carries_precomputed_embed() {
        let mut project = loaded_project();
        let id = project.add_marker(MarkerKind::Video, 40.0, 60.0, false);
        project.update_marker(
            id,
            &MarkerUpdate {
                media_url: Some("https://youtu.be/abc123".into()),
                ..Default::default()
            },
        );

        let data = project_data(&project).unwrap();
        let html = render_standalone_html(&data).unwrap();
        assert!(html.contains("embedHtml"));
        assert!(html.contains("https://www.youtube.com/embed/abc123"));
    }

    #[test]
    fn test_embed_fragment_empty_without_media() {
        let marker = Marker::new(MarkerKind::Info, 10.0, 10.0, false);
        assert!(embed_fragment(&marker).is_empty());
    }

    #[test]
    fn test_vr_html_renders_only_3d_markers() {
        let mut project = loaded_project();
        let flat = project.add_marker(MarkerKind::Info, 10.0, 10.0, false);
        let deep = project.add_marker(MarkerKind::Link, 50.0, 50.0, true);
        project.update_marker(
            flat,
            &MarkerUpdate {
                title: Some("Flat only".into()),
                ..Default::default()
            },
        );
        project.update_marker(
            deep,
            &MarkerUpdate {
                title: Some("Deep one".into()),
                ..Default::default()
            },
        );

        let data = project_data(&project).unwrap();
        let html = render_vr_html(&data).unwrap();
        assert_eq!(html.matches("class=\"hotspot\"").count(), 1);
        assert!(html.contains("Deep one"));
        assert!(!html.contains("Flat only"));
        assert!(html.contains("<a-sky src=\"data:image/png;base64,QUJD\" rotation=\"0 -90 0\">"));
        assert!(html.contains(viewer::AFRAME_SRC));
    }

    #[test]
    fn test_vr_html_promotes_flat_markers_when_none_are_3d() {
        let mut project = loaded_project();
        project.add_marker(MarkerKind::Info, 10.0, 10.0, false);
        project.add_marker(MarkerKind::Audio, 90.0, 90.0, false);

        let data = project_data(&project).unwrap();
        let html = render_vr_html(&data).unwrap();
        assert_eq!(html.matches("class=\"hotspot\"").count(), 2);
    }

    #[test]
    fn test_vr_hotspot_centered_marker_sits_ahead() {
        let mut project = loaded_project();
        project.add_marker(MarkerKind::Info, 50.0, 50.0, true);

        let data = project_data(&project).unwrap();
        let html = render_vr_html(&data).unwrap();
        assert!(html.contains("position=\"0.0000 0.0000 -5.0000\""));
    }

    #[test]
    fn test_json_round_trips() {
        let mut project = loaded_project();
        project.add_marker(MarkerKind::Audio, 33.3, 66.6, false);

        let data = project_data(&project).unwrap();
        let json = render_json(&data).unwrap();
        let parsed: ProjectData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_render_dispatch_matches_kind() {
        let mut project = loaded_project();
        project.add_marker(MarkerKind::Info, 50.0, 50.0, false);
        let data = project_data(&project).unwrap();

        assert!(render(ExportKind::Html2d, &data)
            .unwrap()
            .contains("image-container"));
        assert!(render(ExportKind::Vr, &data).unwrap().contains("a-scene"));
        assert!(render(ExportKind::Json, &data)
            .unwrap()
            .starts_with('{'));
    }
}
