use dioxus::prelude::*;

use crate::constants::{
    BG_DEEPEST, BG_ELEVATED, BORDER_DEFAULT, BORDER_SUBTLE, TEXT_MUTED, TEXT_SECONDARY,
};
use crate::state::{LoadedImage, Marker, MarkerKind};

use super::marker_element::MarkerElement;
use super::CanvasSize;

/// Id of the element the resize-observer script watches. Click and drag
/// coordinates are converted to percentages of this element's box.
pub const CANVAS_HOST_ID: &str = "marker-canvas";

/// Main canvas panel component
#[component]
pub fn CanvasPanel(
    image: Option<LoadedImage>,
    markers: Vec<Marker>,
    selected: Vec<uuid::Uuid>,
    active_tool: Option<MarkerKind>,
    canvas_size: Option<CanvasSize>,
    // Placement and selection
    on_place: EventHandler<(f64, f64)>, // (x_percent, y_percent)
    on_deselect_all: EventHandler<MouseEvent>,
    // Marker operations
    on_marker_select: EventHandler<(uuid::Uuid, bool)>, // (marker_id, additive)
    on_marker_drag_start: EventHandler<uuid::Uuid>,
    on_marker_move: EventHandler<(uuid::Uuid, f64, f64)>, // (marker_id, x, y)
    on_marker_delete: EventHandler<uuid::Uuid>,
) -> Element {
    let canvas_cursor = if active_tool.is_some() {
        "crosshair"
    } else {
        "default"
    };

    rsx! {
        div {
            style: "
                flex: 1;
                display: flex; align-items: center; justify-content: center;
                background-color: {BG_DEEPEST};
                overflow: auto;
                padding: 16px;
                min-width: 0;
            ",

            if let Some(image) = image.as_ref() {
                div {
                    id: CANVAS_HOST_ID,
                    style: "
                        position: relative;
                        display: inline-block;
                        line-height: 0;
                        cursor: {canvas_cursor};
                    ",
                    onclick: move |e| {
                        let Some(size) = canvas_size else {
                            return;
                        };
                        if !size.is_usable() {
                            return;
                        }
                        if active_tool.is_some() {
                            let coords = e.element_coordinates();
                            let x = coords.x / size.width * 100.0;
                            let y = coords.y / size.height * 100.0;
                            on_place.call((x, y));
                        } else {
                            on_deselect_all.call(e);
                        }
                    },
                    oncontextmenu: move |e| e.prevent_default(),

                    img {
                        src: "{image.src}",
                        style: "
                            max-width: calc(100vw - 340px);
                            max-height: calc(100vh - 130px);
                            display: block;
                            user-select: none;
                        ",
                        draggable: false,
                    }

                    if image.is_panorama() {
                        div {
                            style: "
                                position: absolute;
                                top: 8px;
                                right: 8px;
                                padding: 2px 8px;
                                border-radius: 10px;
                                font-size: 10px;
                                font-weight: 600;
                                background-color: rgba(9, 9, 11, 0.75);
                                color: {TEXT_SECONDARY};
                                border: 1px solid {BORDER_DEFAULT};
                                pointer-events: none;
                                z-index: 20;
                            ",
                            "360° panorama"
                        }
                    }

                    for marker in markers.iter() {
                        MarkerElement {
                            key: "{marker.id}",
                            marker: marker.clone(),
                            is_selected: selected.contains(&marker.id),
                            canvas_size,
                            on_select: move |args| on_marker_select.call(args),
                            on_drag_start: move |id| on_marker_drag_start.call(id),
                            on_move: move |args| on_marker_move.call(args),
                            on_delete: move |id| on_marker_delete.call(id),
                        }
                    }
                }
            } else {
                div {
                    style: "
                        display: flex; flex-direction: column;
                        align-items: center; justify-content: center;
                        gap: 10px;
                        padding: 48px 64px;
                        border: 2px dashed {BORDER_SUBTLE};
                        border-radius: 12px;
                        background-color: {BG_ELEVATED};
                    ",
                    div {
                        style: "font-size: 15px; color: {TEXT_SECONDARY};",
                        "No image loaded"
                    }
                    div {
                        style: "font-size: 12px; color: {TEXT_MUTED};",
                        "Load an image to start placing markers"
                    }
                }
            }
        }
    }
}
