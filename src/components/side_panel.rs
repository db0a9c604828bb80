use crate::constants::*;
use dioxus::prelude::*;

/// Right-hand panel that hosts the tools, marker list and properties.
/// Reports focus entering and leaving its inputs so keyboard shortcuts
/// can stand down while the user is typing.
#[component]
pub fn SidePanel(
    title: &'static str,
    width: f64,
    collapsed: bool,
    on_toggle: EventHandler<MouseEvent>,
    on_focus_change: EventHandler<bool>,
    children: Element,
) -> Element {
    let icon = if collapsed { "◀" } else { "▶" };
    let rail_cursor = if collapsed { "pointer" } else { "default" };
    let panel_width = if collapsed { 28.0 } else { width };

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                width: {panel_width}px; min-width: {panel_width}px;
                background-color: {BG_ELEVATED};
                border-left: 1px solid {BORDER_DEFAULT};
                transition: width 0.2s ease, min-width 0.2s ease;
                overflow: hidden;
                cursor: {rail_cursor};
            ",
            onclick: move |e| {
                if collapsed {
                    on_toggle.call(e);
                }
            },
            onfocusin: move |_| on_focus_change.call(true),
            onfocusout: move |_| on_focus_change.call(false),

            div {
                style: "
                    display: flex; align-items: center;
                    height: 32px; padding: 0 8px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                ",
                button {
                    class: "collapse-btn",
                    style: "
                        width: 24px; height: 24px; border: none; border-radius: 4px;
                        background: transparent; color: {TEXT_MUTED}; font-size: 10px;
                        cursor: pointer; display: flex; align-items: center; justify-content: center;
                        margin-right: 8px;
                    ",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_toggle.call(e);
                    },
                    "{icon}"
                }

                if !collapsed {
                    span {
                        style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px; flex: 1;",
                        "{title}"
                    }
                }
            }

            if !collapsed {
                div {
                    style: "flex: 1; overflow-y: auto;",
                    {children}
                }
            }
        }
    }
}
