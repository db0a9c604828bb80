//! Panomark
//!
//! A desktop editor for placing interactive markers on images and 360° panoramas,
//! with standalone HTML, WebVR and JSON export.

mod app;
mod canvas;
mod components;
mod constants;
mod core;
mod hotkeys;
mod providers;
mod state;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Panomark")
                .with_inner_size(LogicalSize::new(1280.0, 800.0))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
