//! Status bar view
//!
//! Shows the latest toast and key hints for the focused control

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Focus};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    if let Some(notification) = app.notifications.current() {
        let color = notification.notification_type.color();
        spans.push(Span::styled(
            format!(" {} ", notification.notification_type.icon()),
            Style::default().fg(Color::Black).bg(color),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            notification.message.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    } else {
        let sent = app.wallet.history().total_sent();
        spans.push(Span::styled(" Sent: ", Style::default().fg(Color::White)));
        spans.push(Span::styled(
            sent.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.focus {
        Focus::Presets => " 1-9:Pick  Enter:Select  Tab:Receiver  s:Send  ?:Help  q:Quit ",
        Focus::Receiver => " Enter:Send  Esc:Cards  Ctrl+c:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
