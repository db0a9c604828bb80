use crate::constants::*;
use crate::state::Marker;
use dioxus::prelude::*;

/// Scrollable list of all markers with a live search box. `markers` is the
/// already-filtered view; `total_count` is the unfiltered project count so
/// the empty states can tell "no markers" from "no matches".
#[component]
pub fn MarkerList(
    markers: Vec<Marker>,
    total_count: usize,
    search_text: String,
    selected: Vec<uuid::Uuid>,
    on_search: EventHandler<String>,
    on_select: EventHandler<(uuid::Uuid, bool)>, // (marker_id, additive)
    on_delete: EventHandler<uuid::Uuid>,
) -> Element {
    rsx! {
        div {
            style: "
                display: flex; flex-direction: column; gap: 8px;
                padding: 10px; background-color: {BG_SURFACE};
                border: 1px solid {BORDER_SUBTLE}; border-radius: 6px;
                margin: 0 10px;
            ",
            div {
                style: "font-size: 10px; color: {TEXT_DIM}; text-transform: uppercase; letter-spacing: 0.5px;",
                "Markers"
            }
            input {
                r#type: "text",
                value: "{search_text}",
                placeholder: "Search markers",
                style: "
                    width: 100%; min-width: 0; box-sizing: border-box;
                    padding: 6px 8px; font-size: 12px;
                    background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                    outline: none;
                    user-select: text;
                ",
                oninput: move |e| on_search.call(e.value()),
            }

            if total_count == 0 {
                div {
                    style: "
                        display: flex; align-items: center; justify-content: center;
                        height: 60px; border: 1px dashed {BORDER_DEFAULT}; border-radius: 6px;
                        color: {TEXT_DIM}; font-size: 12px;
                    ",
                    "No markers yet"
                }
            } else if markers.is_empty() {
                div {
                    style: "
                        display: flex; align-items: center; justify-content: center;
                        height: 60px; border: 1px dashed {BORDER_DEFAULT}; border-radius: 6px;
                        color: {TEXT_DIM}; font-size: 12px;
                    ",
                    "No matches"
                }
            } else {
                div {
                    style: "display: flex; flex-direction: column; max-height: 220px; overflow-y: auto;",
                    for marker in markers.iter() {
                        {
                            let marker_id = marker.id;
                            let is_selected = selected.contains(&marker_id);
                            let row_bg = if is_selected { BG_HOVER } else { BG_BASE };
                            let row_border = if is_selected { BORDER_ACCENT } else { BORDER_SUBTLE };
                            let name = if marker.title.trim().is_empty() {
                                format!("Untitled {}", marker.kind.label().to_lowercase())
                            } else {
                                marker.title.clone()
                            };
                            let kind_label = marker.kind.label();
                            let color = marker.color.clone();
                            let is_3d = marker.is_3d;
                            rsx! {
                                div {
                                    key: "{marker_id}",
                                    style: "
                                        display: flex; align-items: center; gap: 8px;
                                        padding: 6px 8px; margin-bottom: 4px;
                                        background-color: {row_bg};
                                        border: 1px solid {row_border}; border-radius: 4px;
                                        cursor: pointer;
                                        user-select: none;
                                    ",
                                    onclick: move |e| {
                                        e.stop_propagation();
                                        let mods = e.modifiers();
                                        let additive = mods.ctrl() || mods.meta() || mods.shift();
                                        on_select.call((marker_id, additive));
                                    },
                                    div {
                                        style: "width: 3px; height: 20px; border-radius: 2px; background-color: {color}; flex-shrink: 0;",
                                    }
                                    span {
                                        style: "flex: 1; min-width: 0; font-size: 12px; color: {TEXT_PRIMARY}; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                                        "{name}"
                                    }
                                    if is_3d {
                                        span {
                                            style: "font-size: 9px; color: {TEXT_MUTED}; border: 1px solid {BORDER_DEFAULT}; border-radius: 3px; padding: 0 3px; flex-shrink: 0;",
                                            "3D"
                                        }
                                    }
                                    span {
                                        style: "font-size: 10px; color: {TEXT_DIM}; flex-shrink: 0;",
                                        "{kind_label}"
                                    }
                                    button {
                                        class: "collapse-btn",
                                        title: "Delete marker",
                                        style: "
                                            width: 18px; height: 18px; border: none; border-radius: 3px;
                                            background: transparent; color: {TEXT_MUTED}; font-size: 11px;
                                            cursor: pointer; display: flex; align-items: center; justify-content: center;
                                            flex-shrink: 0;
                                        ",
                                        onclick: move |e| {
                                            e.stop_propagation();
                                            on_delete.call(marker_id);
                                        },
                                        "✕"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
