//! Layout definitions for the TUI
//!
//! Header with profile and balance, the send form beside the history
//! panel, and a status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the wallet screen
pub struct WalletLayout {
    /// Profile picture and balance
    pub header: Rect,
    /// Preset amount cards
    pub presets: Rect,
    /// Receiver input
    pub form: Rect,
    /// Transaction history
    pub history: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl WalletLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header
                Constraint::Min(8),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Cards
                Constraint::Length(3), // Receiver
            ])
            .split(body[0]);

        Self {
            header: vertical[0],
            presets: left[0],
            form: left[1],
            history: body[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the header
pub struct HeaderLayout {
    pub profile: Rect,
    pub balance: Rect,
}

impl HeaderLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(14), // Profile box
                Constraint::Min(20),    // Balance
            ])
            .split(area);

        Self {
            profile: chunks[0],
            balance: chunks[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_layout_regions() {
        let layout = WalletLayout::new(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header.height, 5);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.form.height, 3);
        assert_eq!(layout.presets.width, 60);
        assert_eq!(layout.history.width, 40);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let area = centered_rect_fixed(50, 10, Rect::new(0, 0, 40, 6));
        assert_eq!(area, Rect::new(0, 0, 40, 6));

        let area = centered_rect_fixed(20, 4, Rect::new(0, 0, 40, 10));
        assert_eq!(area, Rect::new(10, 3, 20, 4));
    }
}
