//! Configuration module for coinsend
//!
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CoinSendPaths;
pub use settings::Settings;
