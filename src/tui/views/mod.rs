//! TUI Views module
//!
//! The wallet screen: header, preset cards, receiver field, history and
//! status bar, with overlays drawn on top.

pub mod header;
pub mod history;
pub mod presets;
pub mod send_form;
pub mod status_bar;

use ratatui::Frame;

use crate::services::PopupKind;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::WalletLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = WalletLayout::new(frame.area());

    header::render(frame, app, layout.header);
    presets::render(frame, app, layout.presets);
    send_form::render(frame, app, layout.form);
    history::render(frame, app, layout.history);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    // Wallet popups go last so they cover the help dialog
    if let Some(kind) = app.screen.popups.active() {
        render_popup(frame, app, kind);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}

fn render_popup(frame: &mut Frame, app: &App, kind: PopupKind) {
    match kind {
        PopupKind::Error => {
            if let Some(error) = &app.screen.popups.error {
                dialogs::error::render(frame, error);
            }
        }
        PopupKind::Loading => dialogs::loading::render(frame, app),
        PopupKind::Success => {
            if let Some(message) = &app.screen.popups.success {
                dialogs::success::render(frame, message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::ProfilePicture;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn test_app() -> App {
        let mut settings = Settings::default();
        settings.sound_enabled = false;
        App::new(settings, ProfilePicture::Fallback)
    }

    #[test]
    fn test_initial_screen() {
        let mut app = test_app();
        let text = draw(&mut app);
        assert!(text.contains("92,538,280"));
        assert!(text.contains("No transactions yet"));
        assert!(text.contains("100,000"));
    }

    #[test]
    fn test_error_popup_drawn() {
        let mut app = test_app();
        app.submit(Instant::now());
        let text = draw(&mut app);
        assert!(text.contains("Missing Input"));
    }

    #[test]
    fn test_help_drawn() {
        let mut app = test_app();
        app.open_dialog(ActiveDialog::Help);
        let text = draw(&mut app);
        assert!(text.contains("Amount Cards"));
    }
}
