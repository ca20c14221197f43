//! Terminal User Interface module
//!
//! The wallet screen, built on ratatui. `Screen` implements the wallet
//! surfaces; views render it, the handler maps keys onto `App` actions.

pub mod app;
pub mod event;
pub mod handler;
pub mod screen;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
