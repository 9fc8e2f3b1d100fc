//! Dialog components for TUI

mod base;
mod error_dialog;
mod picker_dialog;

pub use error_dialog::render_error_dialog;
pub use picker_dialog::render_picker_dialog;
