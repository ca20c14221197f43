//! Presentation surfaces driven by the send flow
//!
//! The core never draws anything itself. Front ends (the TUI screen, the
//! headless console) implement these traits and the wallet calls into them.

use super::profile::ProfilePicture;
use crate::models::TransactionRecord;

/// Balance and profile display
pub trait DisplaySurface {
    /// Show an already formatted balance, e.g. "92,538,280"
    fn render_balance(&mut self, text: &str);

    /// Show the profile picture, or its fallback
    fn render_profile(&mut self, picture: &ProfilePicture);
}

/// Which overlay a call refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopupKind {
    Error,
    Loading,
    Success,
}

/// An overlay and its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popup {
    Error(String),
    Loading,
    Success(String),
}

impl Popup {
    pub fn kind(&self) -> PopupKind {
        match self {
            Self::Error(_) => PopupKind::Error,
            Self::Loading => PopupKind::Loading,
            Self::Success(_) => PopupKind::Success,
        }
    }
}

/// Error / loading / success overlays, each shown and hidden independently
pub trait PopupSurface {
    fn show(&mut self, popup: Popup);
    fn hide(&mut self, kind: PopupKind);
}

/// Rendered transaction history
pub trait HistorySurface {
    /// Put a newly committed record above all earlier ones
    fn prepend(&mut self, record: &TransactionRecord);
}

/// Receiver field and preset card highlight
pub trait InputSurface {
    /// Empty the receiver field and drop the card highlight
    fn reset_inputs(&mut self);
}

/// Sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Click,
    Success,
}

/// Fire-and-forget audio; failures are swallowed by the implementation
pub trait AudioSurface {
    fn play(&mut self, cue: SoundCue);
}

/// Everything the wallet drives
pub trait Surfaces:
    DisplaySurface + PopupSurface + HistorySurface + InputSurface + AudioSurface
{
}

impl<T> Surfaces for T where
    T: DisplaySurface + PopupSurface + HistorySurface + InputSurface + AudioSurface
{
}

#[cfg(test)]
pub(crate) mod recording {
    //! In-memory surfaces for tests

    use super::*;

    #[derive(Debug, Default)]
    pub struct RecordingSurfaces {
        pub balance_frames: Vec<String>,
        pub profile: Option<ProfilePicture>,
        pub shown: Vec<Popup>,
        pub hidden: Vec<PopupKind>,
        pub history: Vec<TransactionRecord>,
        pub resets: usize,
        pub cues: Vec<SoundCue>,
    }

    impl RecordingSurfaces {
        pub fn last_balance(&self) -> Option<&str> {
            self.balance_frames.last().map(String::as_str)
        }

        pub fn last_shown(&self) -> Option<&Popup> {
            self.shown.last()
        }
    }

    impl DisplaySurface for RecordingSurfaces {
        fn render_balance(&mut self, text: &str) {
            self.balance_frames.push(text.to_string());
        }

        fn render_profile(&mut self, picture: &ProfilePicture) {
            self.profile = Some(picture.clone());
        }
    }

    impl PopupSurface for RecordingSurfaces {
        fn show(&mut self, popup: Popup) {
            self.shown.push(popup);
        }

        fn hide(&mut self, kind: PopupKind) {
            self.hidden.push(kind);
        }
    }

    impl HistorySurface for RecordingSurfaces {
        fn prepend(&mut self, record: &TransactionRecord) {
            self.history.insert(0, record.clone());
        }
    }

    impl InputSurface for RecordingSurfaces {
        fn reset_inputs(&mut self) {
            self.resets += 1;
        }
    }

    impl AudioSurface for RecordingSurfaces {
        fn play(&mut self, cue: SoundCue) {
            self.cues.push(cue);
        }
    }
}
