//! Transaction history panel

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the history, most recent first
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let panel = &app.screen.history;

    let block = Block::default()
        .title(format!(" History ({}) ", panel.lines.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if panel.placeholder_visible {
        let placeholder = Paragraph::new("No transactions yet")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = panel
        .lines
        .iter()
        .map(|line| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    line.receiver.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(line.amount.as_str(), Style::default().fg(Color::Red)),
                    Span::raw(" "),
                    Span::styled(line.time.as_str(), Style::default().fg(Color::DarkGray)),
                ]),
            ])
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
