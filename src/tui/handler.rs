//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on which
//! overlay is open and which part of the form has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use crate::services::PopupKind;

use super::app::{ActiveDialog, App, Focus, CARD_COLUMNS};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event, now: Instant) {
    match event {
        Event::Key(key) => handle_key_event(app, key, now),
        Event::Tick => app.on_tick(now),
        Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // Wallet popups sit above everything else
    if let Some(kind) = app.screen.popups.active() {
        handle_popup_key(app, kind, key, now);
        return;
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    match app.focus {
        Focus::Presets => handle_presets_key(app, key, now),
        Focus::Receiver => handle_receiver_key(app, key, now),
    }
}

fn handle_popup_key(app: &mut App, kind: PopupKind, key: KeyEvent, now: Instant) {
    match (kind, key.code) {
        (PopupKind::Loading, KeyCode::Esc) => app.cancel_pending(now),
        (PopupKind::Loading, _) => {}
        (_, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')) => app.dismiss_popup(),
        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
}

/// Handle keys while the preset grid is focused
fn handle_presets_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('t') => app.toggle_focus(),

        KeyCode::Char('h') | KeyCode::Left => app.move_cursor(-1, 0),
        KeyCode::Char('l') | KeyCode::Right => app.move_cursor(1, 0),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(0, -1),
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(0, 1),
        KeyCode::Home | KeyCode::Char('g') => app.card_cursor = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.card_cursor = app.presets.len().saturating_sub(1);
        }

        KeyCode::Enter | KeyCode::Char(' ') => app.select_card(app.card_cursor),
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            app.select_card(index);
        }

        KeyCode::Char('s') => app.submit(now),
        _ => {}
    }
}

/// Handle keys while typing the receiver
fn handle_receiver_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Enter => app.submit(now),
        KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Char(c) => app.screen.receiver.insert(c),
        KeyCode::Backspace => app.screen.receiver.backspace(),
        KeyCode::Delete => app.screen.receiver.delete(),
        KeyCode::Left => app.screen.receiver.move_left(),
        KeyCode::Right => app.screen.receiver.move_right(),
        KeyCode::Home => app.screen.receiver.move_start(),
        KeyCode::End => app.screen.receiver.move_end(),
        // Back up into the last row of cards
        KeyCode::Up => {
            app.toggle_focus();
            let last_row = app.presets.len().saturating_sub(1) / CARD_COLUMNS;
            app.card_cursor = (last_row * CARD_COLUMNS).min(app.presets.len().saturating_sub(1));
        }
        _ => {}
    }
}
