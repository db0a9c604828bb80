//! Project recovery from exported pages.
//!
//! Both exported page flavors carry every marker as JSON in a
//! `data-marker` attribute, so a page can be opened again even when the
//! project file is gone. Records are parsed one at a time; a damaged
//! record is skipped and counted instead of failing the whole import,
//! unlike the strict JSON project path.

use crate::state::{Marker, ProjectData, PROJECT_VERSION};

/// Project data scanned out of an exported page, plus how many marker
/// records could not be parsed.
#[derive(Debug)]
pub struct RecoveredProject {
    pub data: ProjectData,
    pub skipped: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum HtmlImportError {
    #[error("No marker data found in this file")]
    NoMarkerData,
}

/// Rebuilds project data from an exported 2D or VR page.
pub fn recover_from_html(html: &str) -> Result<RecoveredProject, HtmlImportError> {
    let payloads = marker_payloads(html);
    if payloads.is_empty() {
        return Err(HtmlImportError::NoMarkerData);
    }

    let mut markers = Vec::new();
    let mut skipped = 0usize;
    for payload in &payloads {
        match serde_json::from_str::<Marker>(payload) {
            Ok(marker) => markers.push(marker),
            Err(_) => skipped += 1,
        }
    }

    // Summary fields are export-time metadata; a recovered project gets
    // fresh ones the next time it is exported
    let data = ProjectData {
        image_src: image_src(html).unwrap_or_default(),
        markers,
        version: PROJECT_VERSION.to_string(),
        export_date: None,
        total_markers: None,
        has_vr_markers: None,
    };
    Ok(RecoveredProject { data, skipped })
}

const MARKER_ATTR: &str = "data-marker='";

/// The payload is a single-quoted attribute with every interior quote
/// written as `&apos;`, so the next bare quote always closes it.
fn marker_payloads(html: &str) -> Vec<String> {
    let mut payloads = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(MARKER_ATTR) {
        rest = &rest[start + MARKER_ATTR.len()..];
        let Some(end) = rest.find('\'') else {
            break;
        };
        payloads.push(rest[..end].replace("&apos;", "'"));
        rest = &rest[end + 1..];
    }
    payloads
}

/// The 2D page holds the image in an `<img>` tag, the VR page in `<a-sky>`.
fn image_src(html: &str) -> Option<String> {
    ["<img src=\"", "<a-sky src=\""].iter().find_map(|opener| {
        let start = html.find(opener)?;
        let rest = &html[start + opener.len()..];
        let end = rest.find('"')?;
        Some(unescape_attr(&rest[..end]))
    })
}

fn unescape_attr(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}
