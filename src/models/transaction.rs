//! Transaction records and the session history log
//!
//! A record is created once per committed transfer and never changes
//! afterwards. The log keeps the most recent record first.

use chrono::{Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use super::{Coins, RecordId};

/// One committed transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: RecordId,
    pub receiver: String,
    pub amount: Coins,
    /// Wall-clock time of day the transfer committed (minute resolution)
    pub time: NaiveTime,
}

impl TransactionRecord {
    /// Create a record stamped with the given time of day
    pub fn new(receiver: impl Into<String>, amount: Coins, time: NaiveTime) -> Self {
        let time = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time);
        Self {
            id: RecordId::new(),
            receiver: receiver.into(),
            amount,
            time,
        }
    }

    /// Create a record stamped with the current local time
    pub fn now(receiver: impl Into<String>, amount: Coins) -> Self {
        Self::new(receiver, amount, Local::now().time())
    }

    /// "Sent to: alice"
    pub fn receiver_label(&self) -> String {
        format!("Sent to: {}", self.receiver)
    }

    /// "-100,000"
    pub fn amount_label(&self) -> String {
        format!("-{}", self.amount)
    }

    /// Time of day using a strftime pattern such as `%H:%M`
    pub fn time_label(&self, format: &str) -> String {
        self.time.format(format).to_string()
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} {}",
            self.receiver_label(),
            self.time_label("%H:%M"),
            self.amount_label()
        )
    }
}

/// In-memory history of committed transfers, most recent first
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    entries: VecDeque<TransactionRecord>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record in front of all earlier ones
    pub fn prepend(&mut self, record: TransactionRecord) {
        self.entries.push_front(record);
    }

    /// The most recent record
    pub fn latest(&self) -> Option<&TransactionRecord> {
        self.entries.front()
    }

    pub fn get(&self, index: usize) -> Option<&TransactionRecord> {
        self.entries.get(index)
    }

    /// Iterate most recent first
    pub fn iter(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total coins sent this session
    pub fn total_sent(&self) -> Coins {
        self.entries.iter().map(|r| r.amount).sum()
    }
}
