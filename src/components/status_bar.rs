use crate::constants::*;
use dioxus::prelude::*;

/// Severity of a transient status-bar message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusTone {
    fn color(self) -> &'static str {
        match self {
            StatusTone::Info => TEXT_SECONDARY,
            StatusTone::Success => ACCENT_SUCCESS,
            StatusTone::Warning => ACCENT_WARNING,
            StatusTone::Error => ACCENT_DANGER,
        }
    }
}

#[component]
pub fn StatusBar(
    message: Option<(String, StatusTone)>,
    image_label: Option<String>,
    marker_count: usize,
    selected_count: usize,
    panorama: bool,
) -> Element {
    let (text, color) = match message.as_ref() {
        Some((text, tone)) => (text.as_str(), tone.color()),
        None => ("Ready", TEXT_DIM),
    };
    let marker_label = if selected_count > 0 {
        format!("{marker_count} markers ({selected_count} selected)")
    } else {
        format!("{marker_count} markers")
    };
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM};",
            span { style: "color: {color};", "{text}" }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                if panorama {
                    span { style: "color: {TEXT_MUTED};", "360°" }
                }
                if let Some(label) = image_label.as_ref() {
                    span { "{label}" }
                }
                span { "{marker_label}" }
            }
        }
    }
}
