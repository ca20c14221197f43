//! Session wallet state
//!
//! Everything the send flow mutates lives here and is owned by the caller,
//! so two sessions never share a balance.

use super::{Coins, TransactionLog};

/// Authoritative state of one wallet session
#[derive(Debug, Clone, Default)]
pub struct WalletState {
    /// Authoritative balance
    pub balance: Coins,
    /// Amount chosen but not yet sent (zero when nothing is selected)
    pub selection: Coins,
    /// Committed transfers, most recent first
    pub history: TransactionLog,
}

impl WalletState {
    /// Create a session with a starting balance and no history
    pub fn new(balance: Coins) -> Self {
        Self {
            balance,
            selection: Coins::zero(),
            history: TransactionLog::new(),
        }
    }

    /// Whether a preset amount is currently selected
    pub fn has_selection(&self) -> bool {
        !self.selection.is_zero()
    }

    /// Clear the pending selection
    pub fn clear_selection(&mut self) {
        self.selection = Coins::zero();
    }
}
