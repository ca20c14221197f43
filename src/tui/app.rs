//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::time::Instant;

use crate::config::Settings;
use crate::error::TransferError;
use crate::models::Coins;
use crate::services::{PopupKind, ProfilePicture, Wallet};

use super::screen::Screen;
use super::widgets::{ErrorInfo, Notification, NotificationQueue};

/// Preset cards per grid row
pub const CARD_COLUMNS: usize = 3;

/// Which part of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Presets,
    Receiver,
}

/// Modal dialogs that are not driven by the wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App {
    /// Application settings
    pub settings: Settings,

    /// Amounts on the preset cards
    pub presets: Vec<Coins>,

    /// Session wallet
    pub wallet: Wallet,

    /// What the wallet has drawn
    pub screen: Screen,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which part of the form is focused
    pub focus: Focus,

    /// Card under the keyboard cursor
    pub card_cursor: usize,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Toasts shown in the status bar
    pub notifications: NotificationQueue,
}

impl App {
    /// Create a new App and paint the initial balance
    pub fn new(settings: Settings, profile: ProfilePicture) -> Self {
        let wallet = Wallet::from_settings(&settings);
        let mut screen = Screen::new(&settings);
        wallet.render_initial(&profile, &mut screen);

        Self {
            presets: settings.presets(),
            settings,
            wallet,
            screen,
            should_quit: false,
            focus: Focus::default(),
            card_cursor: 0,
            active_dialog: ActiveDialog::default(),
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        if let Some(request) = self.wallet.pending_request() {
            tracing::info!(receiver = %request.receiver, "quitting with a transfer pending");
        }
        self.should_quit = true;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Presets => Focus::Receiver,
            Focus::Receiver => Focus::Presets,
        };
        self.screen.receiver.focused = self.focus == Focus::Receiver;
    }

    pub fn focus_presets(&mut self) {
        self.focus = Focus::Presets;
        self.screen.receiver.focused = false;
    }

    /// Move the card cursor by whole cells, clamped to the grid
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        if self.presets.is_empty() {
            return;
        }
        let last = self.presets.len() - 1;
        let columns = CARD_COLUMNS as isize;
        let row = (self.card_cursor / CARD_COLUMNS) as isize;
        let col = (self.card_cursor % CARD_COLUMNS) as isize;

        let new_col = (col + dx).clamp(0, columns - 1);
        let new_row = (row + dy).max(0);
        let index = (new_row * columns + new_col) as usize;
        self.card_cursor = index.min(last);
    }

    /// Select the preset at `index`, if there is one
    pub fn select_card(&mut self, index: usize) {
        let Some(&amount) = self.presets.get(index) else {
            return;
        };
        self.card_cursor = index;
        self.screen.selected_card = Some(index);
        self.wallet.select(amount, &mut self.screen);
    }

    /// Submit the selected amount to the typed receiver
    pub fn submit(&mut self, now: Instant) {
        let receiver = self.screen.receiver.value().to_string();
        if let Err(err) = self.wallet.submit(&receiver, now, &mut self.screen) {
            self.show_rejection(&err);
        }
    }

    /// Replace the plain error popup with one carrying suggestions
    fn show_rejection(&mut self, err: &TransferError) {
        self.screen.popups.error = Some(ErrorInfo::from_transfer_error(err));
    }

    /// Cancel a pending transfer from the loading dialog
    pub fn cancel_pending(&mut self, now: Instant) {
        if self.wallet.cancel_pending(&mut self.screen) {
            self.notifications
                .push(Notification::warning("Transfer cancelled", now));
        }
    }

    /// Close the error or success popup
    pub fn dismiss_popup(&mut self) {
        if let Some(kind) = self.screen.popups.active() {
            if kind != PopupKind::Loading {
                self.wallet.dismiss(kind, &mut self.screen);
            }
        }
    }

    /// Advance timers by one frame
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(record) = self.wallet.tick(now, &mut self.screen) {
            self.notifications.push(Notification::success(
                format!("Sent {} coins to {}", record.amount, record.receiver),
                now,
            ));
            self.focus_presets();
        }
        self.notifications.remove_expired(now);
    }
}
