//! UI components grouped by feature domain.
pub mod common;

mod export_modal;
mod marker_list;
mod properties_panel;
mod side_panel;
mod status_bar;
mod title_bar;
mod tool_panel;

pub use export_modal::ExportModal;
pub use marker_list::MarkerList;
pub use properties_panel::PropertiesPanel;
pub use side_panel::SidePanel;
pub use status_bar::{StatusBar, StatusTone};
pub use title_bar::TitleBar;
pub use tool_panel::ToolPanel;
