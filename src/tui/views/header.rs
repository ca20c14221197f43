//! Header view
//!
//! Profile picture slot and the animated balance

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::ProfilePicture;
use crate::tui::app::App;
use crate::tui::layout::HeaderLayout;

/// Render the header
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = HeaderLayout::new(area);

    render_profile(frame, &app.screen.profile, layout.profile);

    let balance_color = if app.wallet.is_animating() {
        Color::Yellow
    } else {
        Color::Green
    };

    let lines = vec![
        Line::from(Span::styled(
            "Available balance",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled(
                app.screen.balance_text.as_str(),
                Style::default()
                    .fg(balance_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" coins"),
        ]),
    ];

    let block = Block::default()
        .title(" Wallet ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), layout.balance);
}

fn render_profile(frame: &mut Frame, picture: &ProfilePicture, area: Rect) {
    let (text, style) = match picture {
        ProfilePicture::Image(_) => (picture.label(), Style::default().fg(Color::White)),
        // Neutral background in place of the picture
        ProfilePicture::Fallback => (String::new(), Style::default().bg(Color::DarkGray)),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}
