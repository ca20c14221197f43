//! Loading popup
//!
//! Shown while a transfer waits out the network delay

use std::time::Instant;

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];
const SPINNER_STEP_MS: u128 = 120;

/// Render the loading popup
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(44, 7, frame.area());
    let now = Instant::now();

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Sending ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let remaining = app.wallet.remaining(now).unwrap_or_default();
    let spinner = spinner_frame(remaining.as_millis());

    let summary = match app.wallet.pending_request() {
        Some(request) => format!("{} coins to {}", request.amount, request.receiver),
        None => String::new(),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(Color::Yellow)),
            Span::raw(summary),
        ]),
        Line::from(Span::styled(
            format!("{:.1}s", remaining.as_secs_f64()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn spinner_frame(remaining_ms: u128) -> char {
    SPINNER[(remaining_ms / SPINNER_STEP_MS) as usize % SPINNER.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), '|');
        assert_eq!(spinner_frame(SPINNER_STEP_MS), '/');
        assert_eq!(spinner_frame(SPINNER_STEP_MS * 4), '|');
    }
}
