use dioxus::prelude::*;
use uuid::Uuid;

use super::CanvasSize;
use crate::constants::{
    ACCENT_DANGER, ACCENT_PRIMARY, BG_ELEVATED, BORDER_DEFAULT, MARKER_DOT_SIZE, TEXT_PRIMARY,
    TEXT_SECONDARY,
};
use crate::state::Marker;

/// A single marker dot on the canvas. Handles selection, dragging and the
/// right-click context menu for one marker.
#[component]
pub fn MarkerElement(
    marker: Marker,
    is_selected: bool,
    canvas_size: Option<CanvasSize>,
    on_select: EventHandler<(Uuid, bool)>,
    on_drag_start: EventHandler<Uuid>,
    on_move: EventHandler<(Uuid, f64, f64)>,
    on_delete: EventHandler<Uuid>,
) -> Element {
    let marker_id = marker.id;
    let marker_x = marker.x;
    let marker_y = marker.y;

    let mut drag_active = use_signal(|| false);
    let mut drag_moved = use_signal(|| false);
    let mut drag_start_x = use_signal(|| 0.0_f64);
    let mut drag_start_y = use_signal(|| 0.0_f64);
    let mut marker_start_x = use_signal(|| 0.0_f64);
    let mut marker_start_y = use_signal(|| 0.0_f64);
    let mut show_menu = use_signal(|| false);
    let mut menu_pos = use_signal(|| (0.0_f64, 0.0_f64));

    let dot_size = MARKER_DOT_SIZE;
    let badge_offset = MARKER_DOT_SIZE / 2.0 + 3.0;
    let z_index = if is_selected { 10 } else { 5 };
    let (menu_x, menu_y) = menu_pos();
    let ring = if is_selected {
        format!("0 0 0 3px {ACCENT_PRIMARY}, 0 2px 6px rgba(0, 0, 0, 0.5)")
    } else {
        "0 2px 6px rgba(0, 0, 0, 0.5)".to_string()
    };
    let tooltip = if marker.title.trim().is_empty() {
        marker.kind.label().to_string()
    } else {
        marker.title.clone()
    };

    rsx! {
        div {
            style: "
                position: absolute;
                left: {marker_x}%;
                top: {marker_y}%;
                width: {dot_size}px;
                height: {dot_size}px;
                transform: translate(-50%, -50%);
                border-radius: 50%;
                border: 2px solid white;
                background-color: {marker.color};
                opacity: {marker.opacity};
                box-shadow: {ring};
                box-sizing: border-box;
                cursor: grab;
                z-index: {z_index};
            ",
            title: "{tooltip}",
            onmousedown: move |e| {
                if let Some(btn) = e.trigger_button() {
                    if format!("{:?}", btn) == "Primary" {
                        e.prevent_default();
                        e.stop_propagation();
                        let mods = e.modifiers();
                        let additive = mods.ctrl() || mods.meta() || mods.shift();
                        on_select.call((marker_id, additive));
                        let coords = e.client_coordinates();
                        drag_start_x.set(coords.x);
                        drag_start_y.set(coords.y);
                        marker_start_x.set(marker_x);
                        marker_start_y.set(marker_y);
                        drag_moved.set(false);
                        drag_active.set(true);
                    }
                }
            },
            // A click on the dot must not fall through to the placement
            // handler on the canvas below.
            onclick: move |e| e.stop_propagation(),
            oncontextmenu: move |e| {
                e.prevent_default();
                e.stop_propagation();
                let coords = e.client_coordinates();
                menu_pos.set((coords.x, coords.y));
                show_menu.set(true);
            },
        }

        if marker.is_3d {
            div {
                style: "
                    position: absolute;
                    left: {marker_x}%;
                    top: {marker_y}%;
                    transform: translate(-50%, {badge_offset}px);
                    font-size: 8px;
                    font-weight: 600;
                    padding: 1px 4px;
                    border-radius: 4px;
                    background-color: {BG_ELEVATED};
                    color: {TEXT_SECONDARY};
                    border: 1px solid {BORDER_DEFAULT};
                    pointer-events: none;
                    z-index: {z_index};
                ",
                "3D"
            }
        }

        // Fullscreen overlay while dragging so fast mouse movement cannot
        // escape the marker. It stays mounted until the click that follows
        // mouseup, otherwise that click would reach the canvas underneath
        // and place a new marker at the drop point.
        if drag_active() {
            div {
                style: "
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    z-index: 9999;
                    cursor: grabbing;
                ",
                oncontextmenu: move |e| e.prevent_default(),
                onmousemove: move |e| {
                    let Some(size) = canvas_size else {
                        return;
                    };
                    if !size.is_usable() {
                        return;
                    }
                    let coords = e.client_coordinates();
                    let delta_x = coords.x - drag_start_x();
                    let delta_y = coords.y - drag_start_y();
                    if !drag_moved() {
                        if delta_x.abs() < 1.0 && delta_y.abs() < 1.0 {
                            return;
                        }
                        // History snapshot goes in before the first real
                        // movement mutates the marker.
                        drag_moved.set(true);
                        on_drag_start.call(marker_id);
                    }
                    let new_x = marker_start_x() + delta_x / size.width * 100.0;
                    let new_y = marker_start_y() + delta_y / size.height * 100.0;
                    on_move.call((marker_id, new_x, new_y));
                },
                onmouseup: move |_| {
                    drag_moved.set(false);
                },
                onclick: move |e| {
                    e.stop_propagation();
                    drag_active.set(false);
                },
            }
        }

        if show_menu() {
            // Dismiss layer under the menu.
            div {
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 9998;",
                onclick: move |e| {
                    e.stop_propagation();
                    show_menu.set(false);
                },
                oncontextmenu: move |e| {
                    e.prevent_default();
                    show_menu.set(false);
                },
            }
            div {
                style: "
                    position: fixed;
                    left: {menu_x}px;
                    top: {menu_y}px;
                    background-color: {BG_ELEVATED};
                    border: 1px solid {BORDER_DEFAULT};
                    border-radius: 6px;
                    padding: 4px;
                    z-index: 9999;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.5);
                    min-width: 140px;
                ",
                div {
                    style: "
                        padding: 6px 10px;
                        font-size: 12px;
                        color: {TEXT_PRIMARY};
                        border-radius: 4px;
                        cursor: pointer;
                    ",
                    onclick: move |e| {
                        e.stop_propagation();
                        show_menu.set(false);
                        on_select.call((marker_id, false));
                    },
                    "Edit Properties"
                }
                div {
                    style: "
                        padding: 6px 10px;
                        font-size: 12px;
                        color: {ACCENT_DANGER};
                        border-radius: 4px;
                        cursor: pointer;
                    ",
                    onclick: move |e| {
                        e.stop_propagation();
                        show_menu.set(false);
                        on_delete.call(marker_id);
                    },
                    "Delete Marker"
                }
            }
        }
    }
}
