use crate::constants::*;
use dioxus::prelude::*;

#[component]
pub fn TitleBar(
    project_label: String,
    can_undo: bool,
    can_redo: bool,
    can_export: bool,
    on_load_image: EventHandler<MouseEvent>,
    on_open_project: EventHandler<MouseEvent>,
    on_save_project: EventHandler<MouseEvent>,
    on_export: EventHandler<MouseEvent>,
    on_undo: EventHandler<MouseEvent>,
    on_redo: EventHandler<MouseEvent>,
) -> Element {
    let undo_color = if can_undo { TEXT_PRIMARY } else { TEXT_DIM };
    let redo_color = if can_redo { TEXT_PRIMARY } else { TEXT_DIM };
    let export_color = if can_export { TEXT_PRIMARY } else { TEXT_DIM };
    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: 40px; padding: 0 16px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none;
            ",
            div {
                style: "display: flex; align-items: center; gap: 20px;",
                span { style: "font-size: 13px; font-weight: 600; color: {TEXT_SECONDARY};", "Panomark" }
                button {
                    class: "collapse-btn",
                    style: "
                        background: transparent; border: none; color: {TEXT_PRIMARY};
                        font-size: 12px; cursor: pointer; padding: 4px 8px; border-radius: 4px;
                    ",
                    onclick: move |e| on_load_image.call(e),
                    "Load Image"
                }
                button {
                    class: "collapse-btn",
                    style: "
                        background: transparent; border: none; color: {TEXT_PRIMARY};
                        font-size: 12px; cursor: pointer; padding: 4px 8px; border-radius: 4px;
                    ",
                    onclick: move |e| on_open_project.call(e),
                    "Open"
                }
                button {
                    class: "collapse-btn",
                    style: "
                        background: transparent; border: none; color: {TEXT_PRIMARY};
                        font-size: 12px; cursor: pointer; padding: 4px 8px; border-radius: 4px;
                    ",
                    onclick: move |e| on_save_project.call(e),
                    "Save"
                }
                button {
                    class: "collapse-btn",
                    disabled: !can_export,
                    style: "
                        background: transparent; border: none; color: {export_color};
                        font-size: 12px; cursor: pointer; padding: 4px 8px; border-radius: 4px;
                    ",
                    onclick: move |e| {
                        if can_export {
                            on_export.call(e);
                        }
                    },
                    "Export"
                }
            }
            span { style: "font-size: 13px; color: {TEXT_MUTED};", "{project_label}" }
            div {
                style: "display: flex; align-items: center; justify-content: flex-end; gap: 6px; min-width: 160px;",
                button {
                    class: "collapse-btn",
                    disabled: !can_undo,
                    title: "Undo (Ctrl+Z)",
                    style: "
                        background: {BG_BASE}; border: 1px solid {BORDER_DEFAULT};
                        color: {undo_color}; font-size: 11px; cursor: pointer;
                        padding: 4px 10px; border-radius: 999px;
                    ",
                    onclick: move |e| {
                        if can_undo {
                            on_undo.call(e);
                        }
                    },
                    "Undo"
                }
                button {
                    class: "collapse-btn",
                    disabled: !can_redo,
                    title: "Redo (Ctrl+Shift+Z)",
                    style: "
                        background: {BG_BASE}; border: 1px solid {BORDER_DEFAULT};
                        color: {redo_color}; font-size: 11px; cursor: pointer;
                        padding: 4px 10px; border-radius: 999px;
                    ",
                    onclick: move |e| {
                        if can_redo {
                            on_redo.call(e);
                        }
                    },
                    "Redo"
                }
            }
        }
    }
}
