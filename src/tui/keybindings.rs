//! Keybinding definitions
//!
//! Every shortcut the wallet screen answers to, grouped by context. The
//! help dialog is rendered from this table.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Preset grid focused
    Presets,
    /// Receiver field focused
    Receiver,
    /// Error or success popup open
    Popup,
    /// Transfer in flight
    Sending,
}

impl KeyContext {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Presets => "Amount Cards",
            Self::Receiver => "Receiver Field",
            Self::Popup => "Popups",
            Self::Sending => "While Sending",
        }
    }
}

const fn bind(
    key: KeyCode,
    modifiers: KeyModifiers,
    description: &'static str,
    context: KeyContext,
) -> Keybinding {
    Keybinding {
        key,
        modifiers,
        description,
        context,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    bind(KeyCode::Char('c'), KeyModifiers::CONTROL, "Quit", KeyContext::Global),
    bind(KeyCode::Tab, KeyModifiers::NONE, "Switch between cards and receiver", KeyContext::Global),
    // Presets
    bind(KeyCode::Char('q'), KeyModifiers::NONE, "Quit", KeyContext::Presets),
    bind(KeyCode::Char('?'), KeyModifiers::NONE, "Show/hide help", KeyContext::Presets),
    bind(KeyCode::Char('h'), KeyModifiers::NONE, "Move left", KeyContext::Presets),
    bind(KeyCode::Char('l'), KeyModifiers::NONE, "Move right", KeyContext::Presets),
    bind(KeyCode::Char('k'), KeyModifiers::NONE, "Move up", KeyContext::Presets),
    bind(KeyCode::Char('j'), KeyModifiers::NONE, "Move down", KeyContext::Presets),
    bind(KeyCode::Enter, KeyModifiers::NONE, "Select amount", KeyContext::Presets),
    bind(KeyCode::Char('1'), KeyModifiers::NONE, "Select card 1 (up to 9)", KeyContext::Presets),
    bind(KeyCode::Char('s'), KeyModifiers::NONE, "Send", KeyContext::Presets),
    // Receiver
    bind(KeyCode::Enter, KeyModifiers::NONE, "Send", KeyContext::Receiver),
    bind(KeyCode::Esc, KeyModifiers::NONE, "Back to cards", KeyContext::Receiver),
    bind(KeyCode::Up, KeyModifiers::NONE, "Back to cards", KeyContext::Receiver),
    // Popups
    bind(KeyCode::Enter, KeyModifiers::NONE, "Close", KeyContext::Popup),
    bind(KeyCode::Esc, KeyModifiers::NONE, "Close", KeyContext::Popup),
    // Sending
    bind(KeyCode::Esc, KeyModifiers::NONE, "Cancel transfer", KeyContext::Sending),
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match kb.key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(&key_str);
    parts.join("+")
}
