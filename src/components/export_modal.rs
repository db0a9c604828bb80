use crate::constants::*;
use crate::core::export::ExportKind;
use dioxus::prelude::*;

fn kind_hint(kind: ExportKind) -> &'static str {
    match kind {
        ExportKind::Html2d => "Standalone web page with clickable markers over the image",
        ExportKind::Vr => "A-Frame scene with markers as hotspots around the viewer",
        ExportKind::Json => "Project data for re-importing or for other tools",
    }
}

/// Format chooser. `recommended` highlights the format that best fits the
/// current project (VR for panoramas with 3D markers, 2D otherwise).
#[component]
pub fn ExportModal(
    show: Signal<bool>,
    recommended: ExportKind,
    on_export: EventHandler<ExportKind>,
) -> Element {
    rsx! {
        if !show() {
            div {}
        } else {
        div {
            style: "
                position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                background-color: rgba(0, 0, 0, 0.5);
                display: flex; align-items: center; justify-content: center;
                z-index: 2000;
            ",
            onclick: move |_| show.set(false),
            div {
                style: "
                    width: 420px; background-color: {BG_ELEVATED};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 8px;
                    padding: 24px; box-shadow: 0 10px 25px rgba(0,0,0,0.5);
                ",
                onclick: move |e| e.stop_propagation(),

                h3 { style: "margin: 0 0 16px 0; font-size: 16px; color: {TEXT_PRIMARY};", "Export" }
                div {
                    style: "display: flex; flex-direction: column; gap: 8px; margin-bottom: 16px;",
                    for kind in [ExportKind::Html2d, ExportKind::Vr, ExportKind::Json] {
                        {
                            let suggested = kind == recommended;
                            let border = if suggested { BORDER_ACCENT } else { BORDER_DEFAULT };
                            rsx! {
                                button {
                                    class: "collapse-btn",
                                    style: "
                                        display: flex; flex-direction: column; align-items: flex-start; gap: 3px;
                                        width: 100%; padding: 10px 12px; text-align: left;
                                        background-color: {BG_SURFACE};
                                        border: 1px solid {border}; border-radius: 6px;
                                        cursor: pointer;
                                    ",
                                    onclick: move |_| {
                                        show.set(false);
                                        on_export.call(kind);
                                    },
                                    div {
                                        style: "display: flex; align-items: center; gap: 8px;",
                                        span { style: "font-size: 13px; color: {TEXT_PRIMARY};", "{kind.label()}" }
                                        if suggested {
                                            span { style: "font-size: 9px; color: {ACCENT_PRIMARY}; text-transform: uppercase; letter-spacing: 0.5px;", "Suggested" }
                                        }
                                    }
                                    span { style: "font-size: 11px; color: {TEXT_MUTED};", "{kind_hint(kind)}" }
                                    span { style: "font-size: 10px; color: {TEXT_DIM}; font-family: 'SF Mono', Consolas, monospace;", "{kind.file_name()}" }
                                }
                            }
                        }
                    }
                }
                button {
                    class: "collapse-btn",
                    style: "
                        width: 100%; padding: 8px;
                        background-color: {BG_SURFACE};
                        border: 1px solid {BORDER_DEFAULT}; border-radius: 6px;
                        color: {TEXT_SECONDARY}; font-size: 12px; cursor: pointer;
                    ",
                    onclick: move |_| show.set(false),
                    "Cancel"
                }
            }
        }
        }
    }
}
