//! Core data models for coinsend
//!
//! Coin amounts, transaction records and the per-session wallet state.

pub mod coins;
pub mod ids;
pub mod transaction;
pub mod wallet;

pub use coins::{Coins, CoinsParseError};
pub use ids::RecordId;
pub use transaction::{TransactionLog, TransactionRecord};
pub use wallet::WalletState;
