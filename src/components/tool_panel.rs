use crate::constants::*;
use crate::state::MarkerKind;
use dioxus::prelude::*;

/// Marker placement tools. One tool can be armed at a time; clicking the
/// armed tool again disarms it.
#[component]
pub fn ToolPanel(
    active_tool: Option<MarkerKind>,
    place_color: String,
    vr_mode: bool,
    panorama: bool,
    has_markers: bool,
    on_tool_select: EventHandler<Option<MarkerKind>>,
    on_color_change: EventHandler<String>,
    on_toggle_vr: EventHandler<MouseEvent>,
    on_clear_all: EventHandler<MouseEvent>,
) -> Element {
    let mut confirm_clear = use_signal(|| false);
    let vr_toggle_bg = if vr_mode { BG_HOVER } else { BG_BASE };

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column; gap: 10px;
                padding: 10px; background-color: {BG_SURFACE};
                border: 1px solid {BORDER_SUBTLE}; border-radius: 6px;
                margin: 10px;
            ",
            div {
                style: "font-size: 10px; color: {TEXT_DIM}; text-transform: uppercase; letter-spacing: 0.5px;",
                "Place Markers"
            }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 6px;",
                for kind in MarkerKind::all() {
                    {
                        let armed = active_tool == Some(kind);
                        let border = if armed { BORDER_ACCENT } else { BORDER_DEFAULT };
                        let bg = if armed { BG_HOVER } else { BG_BASE };
                        let dot_color = kind.default_color();
                        rsx! {
                            button {
                                class: "collapse-btn",
                                style: "
                                    display: flex; align-items: center; gap: 6px;
                                    padding: 8px; font-size: 11px;
                                    background-color: {bg};
                                    border: 1px solid {border}; border-radius: 6px;
                                    color: {TEXT_PRIMARY}; cursor: pointer;
                                ",
                                onclick: move |_| {
                                    if armed {
                                        on_tool_select.call(None);
                                    } else {
                                        on_tool_select.call(Some(kind));
                                    }
                                },
                                span {
                                    style: "
                                        width: 10px; height: 10px; border-radius: 50%;
                                        background-color: {dot_color};
                                        border: 1px solid rgba(255, 255, 255, 0.6);
                                        flex-shrink: 0;
                                    ",
                                }
                                "{kind.label()}"
                            }
                        }
                    }
                }
            }
            if active_tool.is_some() {
                div {
                    style: "font-size: 11px; color: {TEXT_MUTED};",
                    "Click the image to place a marker"
                }
            }

            // Picking a tool resets this to the kind's default; the swatch
            // then overrides the color for markers placed after the change
            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 6px;",
                span {
                    style: "font-size: 10px; color: {TEXT_DIM}; text-transform: uppercase; letter-spacing: 0.6px;",
                    "Marker color"
                }
                input {
                    r#type: "color",
                    value: "{place_color}",
                    style: "
                        width: 56px; height: 24px; box-sizing: border-box;
                        padding: 2px; background-color: {BG_BASE};
                        border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                        cursor: pointer;
                    ",
                    onchange: move |e| on_color_change.call(e.value()),
                }
            }

            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 6px;",
                span {
                    style: "font-size: 10px; color: {TEXT_DIM}; text-transform: uppercase; letter-spacing: 0.6px;",
                    "3D placement"
                }
                button {
                    class: "collapse-btn",
                    style: "
                        background: {vr_toggle_bg};
                        border: 1px solid {BORDER_DEFAULT};
                        color: {TEXT_PRIMARY}; font-size: 11px; cursor: pointer;
                        padding: 4px 10px; border-radius: 999px;
                    ",
                    onclick: move |e| on_toggle_vr.call(e),
                    if vr_mode { "On" } else { "Off" }
                }
            }
            if vr_mode && !panorama {
                div {
                    style: "font-size: 11px; color: {ACCENT_WARNING};",
                    "Image is not a 2:1 panorama; VR positions are a best guess."
                }
            }

            if has_markers {
                if confirm_clear() {
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
                                confirm_clear.set(false);
                                on_clear_all.call(e);
                            },
                            "Confirm Clear"
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
                            onclick: move |_| confirm_clear.set(false),
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
                        onclick: move |_| confirm_clear.set(true),
                        "Clear All Markers"
                    }
                }
            }
        }
    }
}
