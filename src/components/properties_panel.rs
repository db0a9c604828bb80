use crate::components::common::{NumericField, TextAreaField, TextField};
use crate::constants::*;
use crate::providers::oembed::{self, MediaPreview};
use crate::state::{Marker, MarkerKind, MarkerUpdate};
use crate::utils::normalize_hex_color;
use dioxus::prelude::*;

/// Edit form for the current selection. Shows a summary for multi-select
/// and the full field set for a single marker.
#[component]
pub fn PropertiesPanel(
    selected_markers: Vec<Marker>,
    on_update: EventHandler<(uuid::Uuid, MarkerUpdate)>,
    on_move: EventHandler<(uuid::Uuid, f64, f64)>, // (marker_id, x, y)
    on_toggle_3d: EventHandler<uuid::Uuid>,
    on_delete_selected: EventHandler<MouseEvent>,
) -> Element {
    let mut preview = use_signal(|| None::<MediaPreview>);
    let mut last_fetched_url = use_signal(String::new);
    let mut confirm_delete = use_signal(|| false);

    let selected_count = selected_markers.len();

    // The preview follows the single selected marker's media URL; any other
    // selection clears it.
    let preview_url = if selected_count == 1 {
        selected_markers[0].media_url.clone()
    } else {
        String::new()
    };
    use_effect(move || {
        let url = preview_url.clone();
        if url == last_fetched_url() {
            return;
        }
        last_fetched_url.set(url.clone());
        preview.set(None);
        if url.trim().is_empty() {
            return;
        }
        let mut preview = preview.clone();
        spawn(async move {
            // A failed platform lookup falls back to what the URL alone
            // tells us, so the card always fills in
            let info = match oembed::fetch_preview(&url).await {
                Ok(info) => info,
                Err(_) => oembed::offline_preview(&url),
            };
            preview.set(Some(info));
        });
    });

    if selected_count == 0 {
        return rsx! {
            div {
                style: "padding: 12px;",
                div {
                    style: "
                        display: flex; align-items: center; justify-content: center;
                        height: 80px; border: 1px dashed {BORDER_DEFAULT}; border-radius: 6px;
                        color: {TEXT_DIM}; font-size: 12px;
                    ",
                    "No selection"
                }
            }
        };
    }

    if selected_count > 1 {
        return rsx! {
            div {
                style: "padding: 12px; display: flex; flex-direction: column; gap: 10px;",
                div {
                    style: "
                        display: flex; align-items: center; justify-content: center;
                        height: 80px; border: 1px dashed {BORDER_DEFAULT}; border-radius: 6px;
                        color: {TEXT_DIM}; font-size: 12px;
                    ",
                    "{selected_count} markers selected"
                }
                button {
                    style: "
                        padding: 6px 10px;
                        background-color: #b91c1c;
                        border: 1px solid #991b1b;
                        border-radius: 6px; color: white; font-size: 11px;
                        cursor: pointer;
                    ",
                    onclick: move |e| on_delete_selected.call(e),
                    "Delete Selected"
                }
            }
        };
    }

    // Exactly one marker from here on.
    let marker = selected_markers[0].clone();
    let marker_id = marker.id;
    let kind_color = marker.kind.default_color();
    let has_media = matches!(marker.kind, MarkerKind::Audio | MarkerKind::Video);
    let color_value = marker.color.clone();
    let marker_x = marker.x;
    let marker_y = marker.y;
    let vr_toggle_bg = if marker.is_3d { BG_HOVER } else { BG_BASE };
    let angle_label = format!("φ {:.1}°  θ {:.1}°", marker.phi, marker.theta);

    let preview_value = preview();

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column; gap: 10px;
                padding: 10px; background-color: {BG_SURFACE};
                border: 1px solid {BORDER_SUBTLE}; border-radius: 6px;
                margin: 10px;
            ",
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                span {
                    style: "
                        width: 10px; height: 10px; border-radius: 50%;
                        background-color: {kind_color};
                        border: 1px solid rgba(255, 255, 255, 0.6);
                        flex-shrink: 0;
                    ",
                }
                span {
                    style: "font-size: 10px; color: {TEXT_DIM}; text-transform: uppercase; letter-spacing: 0.5px; flex: 1;",
                    "{marker.kind.label()} marker"
                }
            }

            TextField {
                label: "Title",
                value: marker.title.clone(),
                on_commit: move |title: String| {
                    on_update.call((marker_id, MarkerUpdate {
                        title: Some(title),
                        ..Default::default()
                    }));
                },
            }

            TextAreaField {
                label: "Description",
                value: marker.description.clone(),
                rows: 3,
                on_commit: move |description: String| {
                    on_update.call((marker_id, MarkerUpdate {
                        description: Some(description),
                        ..Default::default()
                    }));
                },
            }

            if marker.kind == MarkerKind::Link {
                TextField {
                    label: "URL",
                    value: marker.url.clone(),
                    on_commit: move |url: String| {
                        on_update.call((marker_id, MarkerUpdate {
                            url: Some(url.trim().to_string()),
                            ..Default::default()
                        }));
                    },
                }
            }

            if has_media {
                TextField {
                    label: "Media URL",
                    value: marker.media_url.clone(),
                    on_commit: move |url: String| {
                        on_update.call((marker_id, MarkerUpdate {
                            media_url: Some(url.trim().to_string()),
                            ..Default::default()
                        }));
                    },
                }
                if let Some(info) = preview_value.as_ref() {
                    div {
                        style: "
                            display: flex; gap: 8px; align-items: center;
                            padding: 8px; background-color: {BG_BASE};
                            border: 1px solid {BORDER_SUBTLE}; border-radius: 4px;
                        ",
                        if !info.thumbnail_url.is_empty() {
                            img {
                                src: "{info.thumbnail_url}",
                                style: "width: 48px; height: 36px; object-fit: cover; border-radius: 3px; flex-shrink: 0;",
                                draggable: false,
                            }
                        }
                        div {
                            style: "display: flex; flex-direction: column; gap: 2px; min-width: 0;",
                            span {
                                style: "font-size: 11px; color: {TEXT_PRIMARY}; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                                "{info.title}"
                            }
                            span {
                                style: "font-size: 10px; color: {TEXT_MUTED}; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                                if info.author.is_empty() {
                                    "{info.kind.label()}"
                                } else {
                                    "{info.kind.label()} · {info.author}"
                                }
                            }
                        }
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px;",
                NumericField {
                    label: "X %",
                    value: marker.x,
                    step: "0.1",
                    clamp_min: Some(0.0),
                    clamp_max: Some(100.0),
                    on_commit: move |x| on_move.call((marker_id, x, marker_y)),
                }
                NumericField {
                    label: "Y %",
                    value: marker.y,
                    step: "0.1",
                    clamp_min: Some(0.0),
                    clamp_max: Some(100.0),
                    on_commit: move |y| on_move.call((marker_id, marker_x, y)),
                }
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px; align-items: end;",
                div {
                    style: "display: flex; flex-direction: column; gap: 4px; min-width: 0;",
                    span { style: "font-size: 10px; color: {TEXT_MUTED};", "Color" }
                    input {
                        r#type: "color",
                        value: "{marker.color}",
                        style: "
                            width: 100%; height: 28px; box-sizing: border-box;
                            padding: 2px; background-color: {BG_SURFACE};
                            border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                            cursor: pointer;
                        ",
                        onchange: move |e| {
                            let color = normalize_hex_color(&e.value(), &color_value);
                            on_update.call((marker_id, MarkerUpdate {
                                color: Some(color),
                                ..Default::default()
                            }));
                        },
                    }
                }
                NumericField {
                    label: "Opacity",
                    value: marker.opacity,
                    step: "0.05",
                    clamp_min: Some(0.0),
                    clamp_max: Some(1.0),
                    on_commit: move |opacity| {
                        on_update.call((marker_id, MarkerUpdate {
                            opacity: Some(opacity),
                            ..Default::default()
                        }));
                    },
                }
            }

            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 6px;",
                span {
                    style: "font-size: 10px; color: {TEXT_DIM}; text-transform: uppercase; letter-spacing: 0.6px;",
                    "3D marker"
                }
                button {
                    class: "collapse-btn",
                    style: "
                        background: {vr_toggle_bg};
                        border: 1px solid {BORDER_DEFAULT};
                        color: {TEXT_PRIMARY}; font-size: 11px; cursor: pointer;
                        padding: 4px 10px; border-radius: 999px;
                    ",
                    onclick: move |_| on_toggle_3d.call(marker_id),
                    if marker.is_3d { "On" } else { "Off" }
                }
            }
            if marker.is_3d {
                div {
                    style: "font-size: 10px; color: {TEXT_DIM}; font-family: 'SF Mono', Consolas, monospace;",
                    "{angle_label}"
                }
            }

            if confirm_delete() {
                div {
                    style: "display: flex; gap: 8px; align-items: center;",
                    button {
                        style: "
                            flex: 1; padding: 6px 8px;
                            background-color: #b91c1c;
                            border: 1px solid #991b1b;
                            border-radius: 6px; color: white; font-size: 11px;
                            cursor: pointer;
                        ",
                        onclick: move |e| {
                            confirm_delete.set(false);
                            on_delete_selected.call(e);
                        },
                        "Confirm Delete"
                    }
                    button {
                        class: "collapse-btn",
                        style: "
                            padding: 6px 10px;
                            background-color: {BG_SURFACE};
                            border: 1px solid {BORDER_DEFAULT};
                            border-radius: 6px; color: {TEXT_PRIMARY}; font-size: 11px;
                            cursor: pointer;
                        ",
                        onclick: move |_| confirm_delete.set(false),
                        "Cancel"
                    }
                }
            } else {
                button {
                    class: "collapse-btn",
                    style: "
                        padding: 6px 10px;
                        background-color: {BG_SURFACE};
                        border: 1px solid #7f1d1d;
                        border-radius: 6px; color: #fecaca; font-size: 11px;
                        cursor: pointer;
                    ",
                    onclick: move |_| confirm_delete.set(true),
                    "Delete Marker"
                }
            }
        }
    }
}
