//! coinsend - a terminal "send coins" wallet
//!
//! This library provides the send flow behind the `coinsend` binary: pick a
//! preset amount, name a receiver, wait out a simulated network delay, then
//! watch the balance count down to its new value.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: File-backed tracing setup
//! - `models`: Coin amounts, transaction records, wallet state
//! - `services`: Send flow, balance animation and the surfaces they drive
//! - `cli`: Headless subcommands
//! - `tui`: The interactive wallet screen
//!
//! # Example
//!
//! ```rust,ignore
//! use coinsend::config::{CoinSendPaths, Settings};
//! use coinsend::services::Wallet;
//!
//! let paths = CoinSendPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let wallet = Wallet::from_settings(&settings);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{CoinSendError, TransferError};
