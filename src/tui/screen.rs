//! On-screen state written by the wallet
//!
//! `Screen` is the TUI's implementation of the wallet surfaces. The wallet
//! pushes balance text, popups, history lines and cues into it; the views
//! only read from it.

use std::io::{self, Write};

use crate::config::Settings;
use crate::models::TransactionRecord;
use crate::services::{
    AudioSurface, DisplaySurface, HistorySurface, InputSurface, Popup, PopupKind, PopupSurface,
    ProfilePicture, SoundCue,
};

use super::widgets::{ErrorInfo, TextInput};

/// Visibility and payload of the three overlays
#[derive(Debug, Clone, Default)]
pub struct PopupState {
    pub error: Option<ErrorInfo>,
    pub loading: bool,
    pub success: Option<String>,
}

impl PopupState {
    /// Overlay that currently takes input, if any
    pub fn active(&self) -> Option<PopupKind> {
        if self.error.is_some() {
            Some(PopupKind::Error)
        } else if self.success.is_some() {
            Some(PopupKind::Success)
        } else if self.loading {
            Some(PopupKind::Loading)
        } else {
            None
        }
    }
}

/// One rendered history row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLine {
    pub receiver: String,
    pub amount: String,
    pub time: String,
}

/// Rendered history, most recent first
#[derive(Debug, Clone)]
pub struct HistoryPanel {
    pub lines: Vec<HistoryLine>,
    pub placeholder_visible: bool,
}

impl Default for HistoryPanel {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            placeholder_visible: true,
        }
    }
}

/// Everything the views draw
#[derive(Debug)]
pub struct Screen {
    pub balance_text: String,
    pub profile: ProfilePicture,
    pub popups: PopupState,
    pub history: HistoryPanel,
    pub receiver: TextInput,
    /// Index of the highlighted preset card
    pub selected_card: Option<usize>,
    pub last_cue: Option<SoundCue>,
    sound_enabled: bool,
    time_format: String,
}

impl Screen {
    pub fn new(settings: &Settings) -> Self {
        Self {
            balance_text: String::new(),
            profile: ProfilePicture::Fallback,
            popups: PopupState::default(),
            history: HistoryPanel::default(),
            receiver: TextInput::new()
                .label("To")
                .placeholder("receiver username"),
            selected_card: None,
            last_cue: None,
            sound_enabled: settings.sound_enabled,
            time_format: settings.time_format.clone(),
        }
    }
}

impl DisplaySurface for Screen {
    fn render_balance(&mut self, text: &str) {
        self.balance_text.clear();
        self.balance_text.push_str(text);
    }

    fn render_profile(&mut self, picture: &ProfilePicture) {
        self.profile = picture.clone();
    }
}

impl PopupSurface for Screen {
    fn show(&mut self, popup: Popup) {
        match popup {
            Popup::Error(message) => {
                self.popups.error = Some(ErrorInfo::simple("Send Failed", message));
            }
            Popup::Loading => self.popups.loading = true,
            Popup::Success(message) => self.popups.success = Some(message),
        }
    }

    fn hide(&mut self, kind: PopupKind) {
        match kind {
            PopupKind::Error => self.popups.error = None,
            PopupKind::Loading => self.popups.loading = false,
            PopupKind::Success => self.popups.success = None,
        }
    }
}

impl HistorySurface for Screen {
    fn prepend(&mut self, record: &TransactionRecord) {
        self.history.lines.insert(
            0,
            HistoryLine {
                receiver: record.receiver_label(),
                amount: record.amount_label(),
                time: format!("@ {}", record.time_label(&self.time_format)),
            },
        );
        self.history.placeholder_visible = false;
    }
}

impl InputSurface for Screen {
    fn reset_inputs(&mut self) {
        self.receiver.clear();
        self.selected_card = None;
    }
}

impl AudioSurface for Screen {
    fn play(&mut self, cue: SoundCue) {
        self.last_cue = Some(cue);
        if self.sound_enabled {
            // Terminal bell; nothing to do if the write fails
            let mut stdout = io::stdout();
            let _ = stdout.write_all(b"\x07").and_then(|_| stdout.flush());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coins;
    use chrono::NaiveTime;

    fn quiet_screen() -> Screen {
        let mut settings = Settings::default();
        settings.sound_enabled = false;
        Screen::new(&settings)
    }

    #[test]
    fn test_popup_priority() {
        let mut screen = quiet_screen();
        assert_eq!(screen.popups.active(), None);

        screen.show(Popup::Loading);
        assert_eq!(screen.popups.active(), Some(PopupKind::Loading));

        screen.show(Popup::Success("done".into()));
        assert_eq!(screen.popups.active(), Some(PopupKind::Success));

        screen.show(Popup::Error("bad".into()));
        assert_eq!(screen.popups.active(), Some(PopupKind::Error));

        screen.hide(PopupKind::Error);
        screen.hide(PopupKind::Success);
        screen.hide(PopupKind::Loading);
        assert_eq!(screen.popups.active(), None);
    }

    #[test]
    fn test_history_prepend_hides_placeholder() {
        let mut screen = quiet_screen();
        assert!(screen.history.placeholder_visible);

        let time = NaiveTime::from_hms_opt(8, 15, 0).unwrap();
        screen.prepend(&TransactionRecord::new("alice", Coins::new(100_000), time));
        screen.prepend(&TransactionRecord::new("bob", Coins::new(5_000), time));

        assert!(!screen.history.placeholder_visible);
        assert_eq!(screen.history.lines[0].receiver, "Sent to: bob");
        assert_eq!(
            screen.history.lines[1],
            HistoryLine {
                receiver: "Sent to: alice".into(),
                amount: "-100,000".into(),
                time: "@ 08:15".into(),
            }
        );
    }

    #[test]
    fn test_reset_inputs() {
        let mut screen = quiet_screen();
        screen.receiver.insert('a');
        screen.selected_card = Some(2);

        screen.reset_inputs();
        assert_eq!(screen.receiver.value(), "");
        assert_eq!(screen.selected_card, None);
    }

    #[test]
    fn test_play_records_cue() {
        let mut screen = quiet_screen();
        screen.play(SoundCue::Click);
        assert_eq!(screen.last_cue, Some(SoundCue::Click));
    }
}
