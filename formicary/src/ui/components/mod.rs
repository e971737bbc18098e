// Components for the UI system
mod dialog;
mod top_panel;

// Export components
pub use dialog::{DialogMode, DialogPopup, DialogResult};
pub use top_panel::TopPanel;
