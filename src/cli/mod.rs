//! CLI command handlers
//!
//! Bridges clap argument parsing with the wallet services.

pub mod presets;
pub mod send;

pub use presets::handle_presets_command;
pub use send::{handle_send_command, SendArgs, SendOutcome};
