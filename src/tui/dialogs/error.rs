//! Error popup
//!
//! Shown when a send is rejected

use ratatui::Frame;

use crate::tui::widgets::{error_dialog_area, ErrorDialog, ErrorInfo};

/// Render the error popup
pub fn render(frame: &mut Frame, error: &ErrorInfo) {
    let area = error_dialog_area(frame.area());
    frame.render_widget(ErrorDialog::new(error), area);
}
