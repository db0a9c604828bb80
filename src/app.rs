//! Root application component
//!
//! This defines the main App component and the overall layout structure.

use dioxus::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

use crate::canvas::{CanvasPanel, CanvasSize};
use crate::components::{
    ExportModal, MarkerList, PropertiesPanel, SidePanel, StatusBar, StatusTone, TitleBar, ToolPanel,
};
use crate::constants::{
    BG_BASE, BG_HOVER, CANVAS_HOST_SCRIPT, SIDE_PANEL_WIDTH, STATUS_DISMISS_MS, TEXT_PRIMARY,
};
use crate::core::export::{self, ExportKind};
use crate::core::html_import;
use crate::core::image_load::{dimensions_from_data_uri, load_image_file};
use crate::core::media;
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{History, Marker, MarkerKind, MarkerUpdate, Project, ProjectData};
use crate::utils::normalize_hex_color;

/// Where an export document ended up when the chosen path was not writable.
enum ExportOutcome {
    Saved(PathBuf),
    Fallback { primary_error: String, path: PathBuf },
}

#[component]
pub fn App() -> Element {
    // Project state - the core data model
    let mut project = use_signal(Project::new);
    let mut history = use_signal(History::new);
    let mut last_project_path = use_signal(|| None::<PathBuf>);

    // Editing state
    let mut active_tool = use_signal(|| None::<MarkerKind>);
    let mut place_color = use_signal(|| MarkerKind::Info.default_color().to_string());
    let mut vr_mode = use_signal(|| false);
    let mut search_text = use_signal(String::new);

    // Panel state
    let mut side_collapsed = use_signal(|| false);
    let mut show_export_modal = use_signal(|| false);

    // Tracks whether a text input has focus, so single-key shortcuts
    // don't fire while the user is typing
    let mut input_focused = use_signal(|| false);

    // Status bar message with a serial number so a stale dismiss task
    // can't clear a newer message
    let mut status = use_signal(|| None::<(u64, String, StatusTone)>);
    let mut status_serial = use_signal(|| 0u64);

    // Rendered size of the image element, reported by the canvas probe script
    let canvas_size = use_signal(|| None::<CanvasSize>);
    let mut canvas_eval = use_signal(|| None::<document::Eval>);

    // Launch the canvas size probe once
    use_effect(move || {
        if canvas_eval().is_some() {
            return;
        }
        let eval = document::eval(CANVAS_HOST_SCRIPT);
        canvas_eval.set(Some(eval));
    });

    // Receive size reports from the probe script
    use_future(move || {
        let mut canvas_size = canvas_size.clone();
        let canvas_eval = canvas_eval.clone();
        async move {
            loop {
                let Some(eval) = canvas_eval() else {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                };
                let mut eval = eval;
                loop {
                    match eval.recv::<CanvasSize>().await {
                        Ok(size) => {
                            if canvas_size() != Some(size) {
                                canvas_size.set(Some(size));
                            }
                        }
                        Err(_) => break,
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    });

    // Show a transient status message that clears itself unless a newer
    // message replaced it first
    let mut set_status = move |text: String, tone: StatusTone| {
        let id = status_serial() + 1;
        status_serial.set(id);
        status.set(Some((id, text, tone)));
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(STATUS_DISMISS_MS)).await;
            let still_current = status.read().as_ref().map(|(sid, _, _)| *sid) == Some(id);
            if still_current {
                status.set(None);
            }
        });
    };

    // Snapshot the project before a mutation so it can be undone
    let mut record_history = move || {
        history.write().record(&project.read());
    };

    let mut do_undo = move || {
        let undone = {
            let mut project_write = project.write();
            history.write().undo(&mut project_write)
        };
        if undone {
            set_status("Undid last change".to_string(), StatusTone::Info);
        } else {
            set_status("Nothing to undo".to_string(), StatusTone::Info);
        }
    };

    let mut do_redo = move || {
        let redone = {
            let mut project_write = project.write();
            history.write().redo(&mut project_write)
        };
        if redone {
            set_status("Redid last change".to_string(), StatusTone::Info);
        } else {
            set_status("Nothing to redo".to_string(), StatusTone::Info);
        }
    };

    let load_image = move |_| {
        let picked = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
            .set_title("Load Image")
            .pick_file();
        let Some(path) = picked else {
            return;
        };
        spawn(async move {
            let loaded = tokio::task::spawn_blocking(move || load_image_file(&path)).await;
            match loaded {
                Ok(Ok(image)) => {
                    let message = if image.is_panorama() {
                        format!("Loaded {} (360\u{b0} panorama)", image.name)
                    } else {
                        format!("Loaded {}", image.name)
                    };
                    project.write().set_image(image);
                    history.write().clear();
                    last_project_path.set(None);
                    set_status(message, StatusTone::Success);
                }
                Ok(Err(err)) => {
                    set_status(err.to_string(), StatusTone::Error);
                }
                Err(_) => {
                    set_status("Image loading was interrupted".to_string(), StatusTone::Error);
                }
            }
        });
    };

    // Saving writes the same payload as the JSON export, so an empty
    // project is refused the same way
    let mut save_project_to = move |path: PathBuf| {
        let data = match export::project_data(&project.read()) {
            Ok(data) => data,
            Err(err) => {
                set_status(err.to_string(), StatusTone::Error);
                return;
            }
        };
        spawn(async move {
            let write_path = path.clone();
            let result = tokio::task::spawn_blocking(move || data.save_to(&write_path)).await;
            match result {
                Ok(Ok(())) => {
                    last_project_path.set(Some(path.clone()));
                    set_status(
                        format!("Saved project to {}", path.display()),
                        StatusTone::Success,
                    );
                }
                Ok(Err(err)) => {
                    set_status(format!("Save failed: {err}"), StatusTone::Error);
                }
                Err(_) => {
                    set_status("Saving was interrupted".to_string(), StatusTone::Error);
                }
            }
        });
    };

    let mut save_project = move || {
        if let Some(path) = last_project_path() {
            save_project_to(path);
            return;
        }
        let picked = rfd::FileDialog::new()
            .add_filter("Project JSON", &["json"])
            .set_title("Save Project")
            .set_file_name(ExportKind::Json.file_name())
            .save_file();
        if let Some(path) = picked {
            save_project_to(path);
        }
    };

    let open_project = move |_| {
        let picked = rfd::FileDialog::new()
            .add_filter("Project JSON", &["json"])
            .add_filter("Exported HTML", &["html", "htm"])
            .set_title("Open Project")
            .pick_file();
        let Some(path) = picked else {
            return;
        };
        let from_html = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
            .unwrap_or(false);
        let opened_path = path.clone();
        spawn(async move {
            let loaded = tokio::task::spawn_blocking(move || -> Result<(Project, usize), String> {
                // Project files are parsed strictly; exported pages are
                // scanned marker by marker, skipping damaged records
                let (data, skipped) = if from_html {
                    let text = std::fs::read_to_string(&path).map_err(|err| err.to_string())?;
                    let recovered =
                        html_import::recover_from_html(&text).map_err(|err| err.to_string())?;
                    (recovered.data, recovered.skipped)
                } else {
                    let data = ProjectData::load(&path).map_err(|err| err.to_string())?;
                    (data, 0)
                };
                let mut opened = Project::from_data(data);
                // Stored projects carry only the data URI, so pixel
                // dimensions have to be recovered from it
                if let Some(image) = opened.image.as_mut() {
                    if image.width == 0 {
                        if let Some((w, h)) = dimensions_from_data_uri(&image.src) {
                            image.width = w;
                            image.height = h;
                        }
                    }
                }
                Ok((opened, skipped))
            })
            .await;
            match loaded {
                Ok(Ok((opened, skipped))) => {
                    let count = opened.marker_count();
                    project.set(opened);
                    history.write().clear();
                    // Ctrl+S after an HTML recovery must not overwrite
                    // the page with project JSON
                    if from_html {
                        last_project_path.set(None);
                    } else {
                        last_project_path.set(Some(opened_path.clone()));
                    }
                    if skipped > 0 {
                        set_status(
                            format!(
                                "Opened project with {count} markers ({skipped} damaged entries skipped)"
                            ),
                            StatusTone::Warning,
                        );
                    } else {
                        set_status(
                            format!("Opened project with {count} markers"),
                            StatusTone::Success,
                        );
                    }
                }
                Ok(Err(err)) => {
                    set_status(format!("Open failed: {err}"), StatusTone::Error);
                }
                Err(_) => {
                    set_status("Opening was interrupted".to_string(), StatusTone::Error);
                }
            }
        });
    };

    let run_export = move |kind: ExportKind| {
        let data = match export::project_data(&project.read()) {
            Ok(data) => data,
            Err(err) => {
                set_status(err.to_string(), StatusTone::Error);
                return;
            }
        };
        let rendered = match export::render(kind, &data) {
            Ok(rendered) => rendered,
            Err(err) => {
                set_status(err.to_string(), StatusTone::Error);
                return;
            }
        };
        let picked = rfd::FileDialog::new()
            .add_filter(kind.label(), &[kind.extension()])
            .set_title("Export")
            .set_file_name(kind.file_name())
            .save_file();
        let Some(path) = picked else {
            return;
        };
        spawn(async move {
            // A rendered document is never dropped on the floor: if the
            // chosen path is not writable, it goes to the temp dir instead
            let written = tokio::task::spawn_blocking(move || -> Result<ExportOutcome, String> {
                match std::fs::write(&path, rendered.as_bytes()) {
                    Ok(()) => Ok(ExportOutcome::Saved(path)),
                    Err(primary_error) => {
                        let fallback = std::env::temp_dir().join(format!(
                            "panomark-export-{}.{}",
                            chrono::Utc::now().format("%Y%m%d-%H%M%S"),
                            kind.extension()
                        ));
                        match std::fs::write(&fallback, rendered.as_bytes()) {
                            Ok(()) => Ok(ExportOutcome::Fallback {
                                primary_error: primary_error.to_string(),
                                path: fallback,
                            }),
                            Err(fallback_error) => Err(format!(
                                "Export failed: {primary_error} (temp fallback failed too: {fallback_error})"
                            )),
                        }
                    }
                }
            })
            .await;
            match written {
                Ok(Ok(ExportOutcome::Saved(path))) => {
                    set_status(
                        format!("Exported {} to {}", kind.label(), path.display()),
                        StatusTone::Success,
                    );
                }
                Ok(Ok(ExportOutcome::Fallback {
                    primary_error,
                    path,
                })) => {
                    set_status(
                        format!(
                            "Could not write the chosen file ({primary_error}); saved to {}",
                            path.display()
                        ),
                        StatusTone::Warning,
                    );
                }
                Ok(Err(message)) => {
                    set_status(message, StatusTone::Error);
                }
                Err(_) => {
                    set_status("Export was interrupted".to_string(), StatusTone::Error);
                }
            }
        });
    };

    let place_marker = move |(x, y): (f64, f64)| {
        let Some(kind) = active_tool() else {
            return;
        };
        record_history();
        let in_3d = vr_mode();
        {
            let mut project_write = project.write();
            let id = project_write.add_marker_with_color(kind, x, y, in_3d, place_color());
            project_write.selection.select_only(id);
        }
        let mode = if in_3d { "3D VR" } else { "2D" };
        set_status(
            format!("Added {} marker in {mode} mode", kind.label()),
            StatusTone::Info,
        );
    };

    let select_marker = move |(id, additive): (uuid::Uuid, bool)| {
        let mut project_write = project.write();
        if additive {
            project_write.selection.toggle(id);
        } else {
            project_write.selection.select_only(id);
        }
    };

    // Drag reports a start event before the first movement, so one
    // snapshot covers the whole gesture
    let drag_start = move |_id: uuid::Uuid| {
        record_history();
    };

    let drag_move = move |(id, x, y): (uuid::Uuid, f64, f64)| {
        project.write().move_marker(id, x, y);
    };

    let update_marker = move |(id, update): (uuid::Uuid, MarkerUpdate)| {
        // A rejected link commit leaves the marker untouched
        if let Some(url) = update.url.as_deref() {
            if !url.trim().is_empty() && !media::is_plausible_url(url) {
                set_status(
                    format!("\"{}\" is not a usable link", url.trim()),
                    StatusTone::Error,
                );
                return;
            }
        }
        // Skip no-op commits so blur events don't pollute the undo stack
        {
            let project_read = project.read();
            let Some(marker) = project_read.find_marker(id) else {
                return;
            };
            let mut probe = marker.clone();
            probe.apply(&update);
            if probe == *marker {
                return;
            }
        }
        record_history();
        project.write().update_marker(id, &update);
    };

    let move_marker = move |(id, x, y): (uuid::Uuid, f64, f64)| {
        {
            let project_read = project.read();
            let Some(marker) = project_read.find_marker(id) else {
                return;
            };
            let unchanged = (marker.x - x.clamp(0.0, 100.0)).abs() < 1e-9
                && (marker.y - y.clamp(0.0, 100.0)).abs() < 1e-9;
            if unchanged {
                return;
            }
        }
        record_history();
        project.write().move_marker(id, x, y);
    };

    let toggle_marker_3d = move |id: uuid::Uuid| {
        record_history();
        let mut project_write = project.write();
        if let Some(marker) = project_write.find_marker_mut(id) {
            marker.is_3d = !marker.is_3d;
        }
    };

    let delete_marker = move |id: uuid::Uuid| {
        record_history();
        if project.write().remove_marker(id) {
            set_status("Deleted marker".to_string(), StatusTone::Info);
        }
    };

    let mut delete_selected = move || {
        let ids = project.read().selection.marker_ids.clone();
        if ids.is_empty() {
            return;
        }
        record_history();
        let removed = project.write().remove_markers(&ids);
        if removed > 0 {
            let message = if removed == 1 {
                "Deleted marker".to_string()
            } else {
                format!("Deleted {removed} markers")
            };
            set_status(message, StatusTone::Info);
        }
    };

    let clear_all = move |_| {
        record_history();
        project.write().clear_markers();
        set_status("Cleared all markers".to_string(), StatusTone::Info);
    };

    // Derived view data, computed once per render
    let project_read = project.read();
    let image = project_read.image.clone();
    let markers = project_read.markers.clone();
    let selected_ids = project_read.selection.marker_ids.clone();
    let query = search_text();
    let filtered_markers: Vec<Marker> = project_read.query(&query).cloned().collect();
    let selected_markers: Vec<Marker> = selected_ids
        .iter()
        .filter_map(|id| project_read.find_marker(*id))
        .cloned()
        .collect();
    let marker_count = project_read.marker_count();
    let panorama = image.as_ref().map(|img| img.is_panorama()).unwrap_or(false);
    let has_image = image.is_some();
    let has_vr_markers = project_read.has_vr_markers();
    let image_label = image.as_ref().and_then(|img| {
        if img.width > 0 {
            Some(format!("{}\u{d7}{}", img.width, img.height))
        } else {
            None
        }
    });
    let project_label = image
        .as_ref()
        .map(|img| img.name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "No image loaded".to_string());
    drop(project_read);

    let can_undo = history.read().can_undo();
    let can_redo = history.read().can_redo();
    let can_export = has_image && marker_count > 0;
    let selected_count = selected_ids.len();
    let status_message = status().map(|(_, text, tone)| (text, tone));
    let recommended_export = if (vr_mode() || has_vr_markers) && panorama {
        ExportKind::Vr
    } else {
        ExportKind::Html2d
    };

    rsx! {
        style {
            r#"
            * {{
                box-sizing: border-box;
            }}
            html, body {{
                margin: 0;
                padding: 0;
                overflow: hidden;
            }}
            ::-webkit-scrollbar {{
                width: 6px;
                height: 6px;
            }}
            ::-webkit-scrollbar-track {{
                background: transparent;
            }}
            ::-webkit-scrollbar-thumb {{
                background: #3a3a3a;
                border-radius: 3px;
            }}
            ::-webkit-scrollbar-thumb:hover {{
                background: #4a4a4a;
            }}
            .collapse-btn {{
                opacity: 0.6;
                transition: opacity 0.15s, background 0.15s;
            }}
            .collapse-btn:hover {{
                opacity: 1;
                background: {BG_HOVER} !important;
            }}
            "#
        }

        div {
            style: "width: 100vw; height: 100vh; position: fixed; top: 0; left: 0; display: flex; flex-direction: column; background: {BG_BASE}; color: {TEXT_PRIMARY}; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; font-size: 13px; outline: none;",
            tabindex: "0",

            onkeydown: move |e| {
                if e.key() == Key::Escape && show_export_modal() {
                    show_export_modal.set(false);
                    return;
                }
                let modifiers = e.modifiers();
                let context = HotkeyContext {
                    input_focused: input_focused(),
                    has_selection: !project.read().selection.is_empty(),
                };
                match handle_hotkey(
                    &e.key(),
                    modifiers.shift(),
                    modifiers.ctrl(),
                    modifiers.alt(),
                    modifiers.meta(),
                    &context,
                ) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        match action {
                            HotkeyAction::Undo => do_undo(),
                            HotkeyAction::Redo => do_redo(),
                            HotkeyAction::SaveProject => save_project(),
                            HotkeyAction::DeleteSelection => delete_selected(),
                            HotkeyAction::ClearSelection => {
                                project.write().selection.clear();
                            }
                        }
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            TitleBar {
                project_label: project_label,
                can_undo: can_undo,
                can_redo: can_redo,
                can_export: can_export,
                on_load_image: load_image,
                on_open_project: open_project,
                on_save_project: move |_| save_project(),
                on_export: move |_| show_export_modal.set(true),
                on_undo: move |_| do_undo(),
                on_redo: move |_| do_redo(),
            }

            div {
                style: "flex: 1; display: flex; flex-direction: row; min-height: 0;",

                CanvasPanel {
                    image: image,
                    markers: markers,
                    selected: selected_ids.clone(),
                    active_tool: active_tool(),
                    canvas_size: canvas_size(),
                    on_place: place_marker,
                    on_deselect_all: move |_| project.write().selection.clear(),
                    on_marker_select: select_marker,
                    on_marker_drag_start: drag_start,
                    on_marker_move: drag_move,
                    on_marker_delete: delete_marker,
                }

                SidePanel {
                    title: "Markers",
                    width: SIDE_PANEL_WIDTH,
                    collapsed: side_collapsed(),
                    on_toggle: move |_| {
                        let collapsed = side_collapsed();
                        side_collapsed.set(!collapsed);
                    },
                    on_focus_change: move |focused| input_focused.set(focused),

                    ToolPanel {
                        active_tool: active_tool(),
                        place_color: place_color(),
                        vr_mode: vr_mode(),
                        panorama: panorama,
                        has_markers: marker_count > 0,
                        on_tool_select: move |kind: Option<MarkerKind>| {
                            // Arming a tool resets the swatch to its default
                            if let Some(kind) = kind {
                                place_color.set(kind.default_color().to_string());
                            }
                            active_tool.set(kind);
                        },
                        on_color_change: move |value: String| {
                            let current = place_color();
                            place_color.set(normalize_hex_color(&value, &current));
                        },
                        on_toggle_vr: move |_| {
                            let enabled = vr_mode();
                            vr_mode.set(!enabled);
                        },
                        on_clear_all: clear_all,
                    }

                    MarkerList {
                        markers: filtered_markers,
                        total_count: marker_count,
                        search_text: search_text(),
                        selected: selected_ids,
                        on_search: move |text| search_text.set(text),
                        on_select: select_marker,
                        on_delete: delete_marker,
                    }

                    PropertiesPanel {
                        selected_markers: selected_markers,
                        on_update: update_marker,
                        on_move: move_marker,
                        on_toggle_3d: toggle_marker_3d,
                        on_delete_selected: move |_| delete_selected(),
                    }
                }
            }

            StatusBar {
                message: status_message,
                image_label: image_label,
                marker_count: marker_count,
                selected_count: selected_count,
                panorama: panorama,
            }

            ExportModal {
                show: show_export_modal,
                recommended: recommended_export,
                on_export: run_export,
            }
        }
    }
}
