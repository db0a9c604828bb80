use crate::constants::*;
use crate::utils::parse_f64_input;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared frame for form fields: a muted caption above the input.
#[component]
fn FieldShell(label: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; min-width: 0;",
            span {
                style: "font-size: 10px; color: {TEXT_MUTED};",
                "{label}"
            }
            {children}
        }
    }
}

fn clamped(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let mut out = value;
    if let Some(min) = min {
        out = out.max(min);
    }
    if let Some(max) = max {
        out = out.min(max);
    }
    out
}

/// Numeric input that keeps a local draft and only commits on blur or
/// Enter, so half-typed values never round-trip through the project.
#[component]
pub fn NumericField(
    label: String,
    value: f64,
    step: &'static str,
    clamp_min: Option<f64>,
    clamp_max: Option<f64>,
    on_commit: EventHandler<f64>,
) -> Element {
    let mut draft = use_signal(|| format!("{value:.2}"));
    let mut synced = use_signal(|| value);

    // Refresh the draft when the committed value changes under us,
    // without clobbering an edit in progress
    use_effect(move || {
        if (value - synced()).abs() > 0.0001 {
            draft.set(format!("{value:.2}"));
            synced.set(value);
        }
    });

    let commit = move || {
        let parsed = clamped(parse_f64_input(&draft(), value), clamp_min, clamp_max);
        on_commit.call(parsed);
        draft.set(format!("{parsed:.2}"));
        synced.set(parsed);
    };
    let mut commit_on_blur = commit;
    let mut commit_on_enter = commit;

    rsx! {
        FieldShell {
            label: label,
            input {
                r#type: "number",
                step: "{step}",
                value: "{draft()}",
                style: "width: 100%; min-width: 0; box-sizing: border-box; padding: 6px 8px; font-size: 12px; background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; outline: none; user-select: text;",
                oninput: move |e| draft.set(e.value()),
                onblur: move |_| commit_on_blur(),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        commit_on_enter();
                    }
                },
            }
        }
    }
}

/// Single-line text input with the same commit-on-blur/Enter contract as
/// [`NumericField`].
#[component]
pub fn TextField(label: String, value: String, on_commit: EventHandler<String>) -> Element {
    let mut draft = use_signal(|| value.clone());
    let mut synced = use_signal(|| value.clone());

    use_effect(move || {
        if value != synced() {
            draft.set(value.clone());
            synced.set(value.clone());
        }
    });

    let commit = move || {
        let next = draft();
        on_commit.call(next.clone());
        synced.set(next);
    };
    let mut commit_on_blur = commit;
    let mut commit_on_enter = commit;

    rsx! {
        FieldShell {
            label: label,
            input {
                r#type: "text",
                value: "{draft()}",
                style: "width: 100%; min-width: 0; box-sizing: border-box; padding: 6px 8px; font-size: 12px; background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; outline: none; user-select: text;",
                oninput: move |e| draft.set(e.value()),
                onblur: move |_| commit_on_blur(),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        commit_on_enter();
                    }
                },
            }
        }
    }
}

struct TextDraft {
    text: String,
    dirty: bool,
}

/// Multi-line text input. The draft lives outside the signal graph so a
/// re-render mid-edit cannot clobber what the user is typing; commits
/// happen on blur only.
#[component]
pub fn TextAreaField(
    label: String,
    value: String,
    rows: u32,
    on_commit: EventHandler<String>,
) -> Element {
    let draft = use_hook(|| {
        Rc::new(RefCell::new(TextDraft {
            text: value.clone(),
            dirty: false,
        }))
    });
    let mut is_focused = use_signal(|| false);

    {
        let draft = draft.clone();
        let value = value.clone();
        use_effect(move || {
            if is_focused() {
                return;
            }
            let mut state = draft.borrow_mut();
            if !state.dirty && state.text != value {
                state.text = value.clone();
            } else if state.dirty && state.text == value {
                state.dirty = false;
            }
        });
    }

    let draft_oninput = draft.clone();
    let draft_onblur = draft.clone();
    let shown = draft.borrow().text.clone();

    rsx! {
        FieldShell {
            label: label,
            textarea {
                rows: "{rows}",
                value: "{shown}",
                style: "width: 100%; min-width: 0; box-sizing: border-box; padding: 6px 8px; font-size: 12px; line-height: 1.4; background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; outline: none; resize: vertical; user-select: text;",
                oninput: move |e| {
                    let mut state = draft_oninput.borrow_mut();
                    state.text = e.value();
                    state.dirty = true;
                },
                onfocus: move |_| is_focused.set(true),
                onblur: move |_| {
                    is_focused.set(false);
                    on_commit.call(draft_onblur.borrow().text.clone());
                },
            }
        }
    }
}
