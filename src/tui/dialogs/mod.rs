//! Dialog modules for the TUI
//!
//! The three wallet popups plus the help overlay

pub mod error;
pub mod help;
pub mod loading;
pub mod success;
