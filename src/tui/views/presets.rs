//! Preset amount cards
//!
//! Cards are laid out in a grid, `CARD_COLUMNS` per row. The selected card
//! is green, the card under the cursor is cyan, and cards above the balance
//! are dimmed.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, Focus, CARD_COLUMNS};

const CARD_HEIGHT: u16 = 3;

/// Render the card grid
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Presets;
    let border_color = if focused { Color::Cyan } else { Color::White };

    let block = Block::default()
        .title(" Amount ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.presets.is_empty() || inner.height < CARD_HEIGHT {
        return;
    }

    let rows = app.presets.len().div_ceil(CARD_COLUMNS);
    let visible_rows = (inner.height / CARD_HEIGHT) as usize;
    // Keep the cursor row on screen
    let cursor_row = app.card_cursor / CARD_COLUMNS;
    let first_row = cursor_row.saturating_sub(visible_rows.saturating_sub(1));

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(inner);

    let balance = app.wallet.balance();
    for (slot, row) in (first_row..rows).take(visible_rows).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, CARD_COLUMNS as u32); CARD_COLUMNS])
            .split(row_areas[slot]);

        for col in 0..CARD_COLUMNS {
            let index = row * CARD_COLUMNS + col;
            let Some(amount) = app.presets.get(index) else {
                break;
            };

            let selected = app.screen.selected_card == Some(index);
            let under_cursor = focused && app.card_cursor == index;
            let affordable = *amount <= balance;

            let mut style = Style::default();
            if !affordable {
                style = style.fg(Color::DarkGray);
            }
            let border = if selected {
                style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
                Style::default().fg(Color::Green)
            } else if under_cursor {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let title = if index < 9 {
                format!(" {} ", index + 1)
            } else {
                String::new()
            };

            let card = Paragraph::new(amount.to_string())
                .style(style)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border)
                        .title(title),
                );
            frame.render_widget(card, cells[col]);
        }
    }
}
