//! Shared UI constants such as colors, panel sizing, and timings.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_PRIMARY: &str = "#3b82f6";
pub const ACCENT_DANGER: &str = "#ef4444";
pub const ACCENT_WARNING: &str = "#f97316";
pub const ACCENT_SUCCESS: &str = "#22c55e";

pub const SIDE_PANEL_WIDTH: f64 = 300.0;

/// Marker dots on the canvas render at this diameter in CSS pixels.
pub const MARKER_DOT_SIZE: f64 = 20.0;

/// Status-bar messages clear themselves after this long.
pub const STATUS_DISMISS_MS: u64 = 4000;

/// Reports the rendered size of the marker canvas to the app. The canvas
/// element is recreated whenever a new image loads, so the observer
/// re-attaches when its host leaves the document.
pub const CANVAS_HOST_SCRIPT: &str = r#"
const hostId = "marker-canvas";
let last = null;

function sendSize(host) {
    const rect = host.getBoundingClientRect();
    const next = {
        width: rect.width,
        height: rect.height
    };
    if (last &&
        Math.abs(last.width - next.width) < 0.5 &&
        Math.abs(last.height - next.height) < 0.5) {
        return;
    }
    last = next;
    dioxus.send(next);
}

function attach() {
    const host = document.getElementById(hostId);
    if (!host) {
        setTimeout(attach, 100);
        return;
    }
    const observer = new ResizeObserver(() => sendSize(host));
    observer.observe(host);
    const watchdog = setInterval(() => {
        if (!document.body.contains(host)) {
            observer.disconnect();
            clearInterval(watchdog);
            last = null;
            attach();
        }
    }, 250);
    window.addEventListener("resize", () => sendSize(host), { passive: true });
    sendSize(host);
}

attach();
await new Promise(() => {});
"#;
