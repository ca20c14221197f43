//! Receiver field
//!
//! Shows the typed receiver and, on the border, the amount that will be sent.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::tui::app::{App, Focus};

/// Render the send form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Receiver;
    let border_color = if focused { Color::Cyan } else { Color::White };

    let selection = app.wallet.selection();
    let title = if selection.is_zero() {
        " Send ".to_string()
    } else {
        format!(" Send {} coins ", selection)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(&app.screen.receiver, inner);
}
