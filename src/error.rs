//! Custom error types for coinsend
//!
//! Validation failures of the send flow are modelled by [`TransferError`];
//! everything else (configuration, I/O, terminal) goes through
//! [`CoinSendError`].

use thiserror::Error;

use crate::models::Coins;

/// Reasons a transfer request is rejected at submit time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// Receiver is empty or no amount has been selected
    #[error("Please enter a receiver username and select a coin amount to proceed.")]
    MissingInput,

    /// The selected amount exceeds the current balance
    #[error("You only have {balance} coins. The selected amount ({attempted}) is too high.")]
    InsufficientBalance { attempted: Coins, balance: Coins },

    /// Another transfer is still waiting on the network
    #[error("A transfer is already in progress. Wait for it to finish or cancel it.")]
    InFlight,
}

impl TransferError {
    /// Short headline used as a dialog title
    pub fn title(&self) -> &'static str {
        match self {
            Self::MissingInput => "Missing Input",
            Self::InsufficientBalance { .. } => "Insufficient Balance",
            Self::InFlight => "Transfer In Progress",
        }
    }
}

/// The main error type for coinsend operations
#[derive(Error, Debug)]
pub enum CoinSendError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected transfer
    #[error(transparent)]
    Transfer(#[from] TransferError),
}

impl CoinSendError {
    /// Check if this is a rejected transfer
    pub fn is_transfer(&self) -> bool {
        matches!(self, Self::Transfer(_))
    }
}

impl From<std::io::Error> for CoinSendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CoinSendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for coinsend operations
pub type CoinSendResult<T> = Result<T, CoinSendError>;
