//! Coin amount type
//!
//! Coins are whole units, so the amount is a plain `u64`. Formatting groups
//! digits in threes with commas, the way balances are shown everywhere in
//! the app.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A non-negative number of coins
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Coins(u64);

impl Coins {
    /// Create an amount from a raw coin count
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Zero coins
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw coin count
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtract, returning `None` if the result would be negative
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Parse an amount from user input
    ///
    /// Accepts plain digits ("100000") and comma-grouped digits ("100,000").
    pub fn parse(s: &str) -> Result<Self, CoinsParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CoinsParseError::Empty);
        }

        let digits: String = trimmed.chars().filter(|c| *c != ',').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoinsParseError::InvalidFormat(trimmed.to_string()));
        }

        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| CoinsParseError::InvalidFormat(trimmed.to_string()))
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        f.pad(&grouped)
    }
}

impl From<u64> for Coins {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl Add for Coins {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sub for Coins {
    type Output = Self;

    /// Saturates at zero; callers that must not underflow use `checked_sub`
    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Coins {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Coins::zero(), |acc, c| acc + c)
    }
}

/// Error type for coin parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoinsParseError {
    #[error("Amount is empty")]
    Empty,
    #[error("Invalid coin amount: {0}")]
    InvalidFormat(String),
}
