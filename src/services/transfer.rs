//! Send flow
//!
//! Validates a transfer, waits out a simulated network delay, then commits:
//! the balance is decremented, a history record is added and the balance
//! animation starts. Only one transfer may be pending at a time.

use std::time::{Duration, Instant};

use super::animator::BalanceAnimator;
use super::surface::{Popup, PopupKind, SoundCue, Surfaces};
use super::task::DelayedTask;
use crate::error::TransferError;
use crate::models::{Coins, TransactionRecord, WalletState};

/// Default simulated network round-trip
pub const DEFAULT_NETWORK_DELAY: Duration = Duration::from_millis(2500);

/// Notice appended to every success message
pub const DELIVERY_NOTICE: &str = "The recipient should receive the coins within 24 hours.";

/// A validated transfer waiting to commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub receiver: String,
    pub amount: Coins,
}

impl TransferRequest {
    /// Message shown once the transfer commits
    pub fn success_message(&self) -> String {
        format!(
            "{} coins successfully sent to {}!\n\n{}",
            self.amount, self.receiver, DELIVERY_NOTICE
        )
    }
}

/// Where the controller is in the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferPhase {
    Idle,
    Pending,
}

/// Check a transfer against the current balance
///
/// Pure: nothing is shown and nothing is mutated.
pub fn validate(receiver: &str, amount: Coins, balance: Coins) -> Result<TransferRequest, TransferError> {
    let receiver = receiver.trim();
    if receiver.is_empty() || amount.is_zero() {
        return Err(TransferError::MissingInput);
    }
    if amount > balance {
        return Err(TransferError::InsufficientBalance {
            attempted: amount,
            balance,
        });
    }
    Ok(TransferRequest {
        receiver: receiver.to_string(),
        amount,
    })
}

/// Drives one transfer at a time from submit to commit
#[derive(Debug)]
pub struct TransferController {
    delay: Duration,
    pending: Option<DelayedTask<TransferRequest>>,
}

impl TransferController {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn phase(&self) -> TransferPhase {
        if self.pending.as_ref().is_some_and(|t| !t.is_finished()) {
            TransferPhase::Pending
        } else {
            TransferPhase::Idle
        }
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == TransferPhase::Pending
    }

    /// The transfer waiting on the network, if any
    pub fn pending_request(&self) -> Option<&TransferRequest> {
        self.pending
            .as_ref()
            .filter(|t| !t.is_finished())
            .and_then(DelayedTask::payload)
    }

    /// Time left before the pending transfer commits
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .filter(|t| !t.is_finished())
            .map(|t| t.remaining(now))
    }

    /// Record the chosen preset amount
    pub fn select(&self, state: &mut WalletState, amount: Coins, surfaces: &mut impl Surfaces) {
        state.selection = amount;
        surfaces.play(SoundCue::Click);
        tracing::debug!(%amount, "amount selected");
    }

    /// Validate and start a transfer of the selected amount
    ///
    /// On rejection the error popup is shown and the error returned; state
    /// is left untouched. On success the loading popup is shown and the
    /// commit is scheduled `delay` after `now`.
    pub fn submit(
        &mut self,
        state: &WalletState,
        receiver: &str,
        now: Instant,
        surfaces: &mut impl Surfaces,
    ) -> Result<(), TransferError> {
        let result = if self.is_pending() {
            Err(TransferError::InFlight)
        } else {
            validate(receiver, state.selection, state.balance)
        };

        let request = match result {
            Ok(request) => request,
            Err(err) => {
                tracing::info!(error = %err, "transfer rejected");
                surfaces.show(Popup::Error(err.to_string()));
                return Err(err);
            }
        };

        tracing::info!(
            receiver = %request.receiver,
            amount = %request.amount,
            delay_ms = self.delay.as_millis() as u64,
            "transfer pending"
        );
        surfaces.show(Popup::Loading);
        self.pending = Some(DelayedTask::schedule(request, now, self.delay));
        Ok(())
    }

    /// Commit the pending transfer if its delay has expired
    pub fn poll(
        &mut self,
        state: &mut WalletState,
        animator: &mut BalanceAnimator,
        now: Instant,
        surfaces: &mut impl Surfaces,
    ) -> Option<TransactionRecord> {
        let request = self.pending.as_mut()?.poll(now)?;
        self.pending = None;
        Some(self.commit(state, animator, request, now, surfaces))
    }

    fn commit(
        &self,
        state: &mut WalletState,
        animator: &mut BalanceAnimator,
        request: TransferRequest,
        now: Instant,
        surfaces: &mut impl Surfaces,
    ) -> TransactionRecord {
        surfaces.hide(PopupKind::Loading);

        let record = TransactionRecord::now(request.receiver.as_str(), request.amount);
        state.history.prepend(record.clone());
        surfaces.prepend(&record);
        surfaces.show(Popup::Success(request.success_message()));

        // The pending lock keeps the balance unchanged since validation
        let new_balance = state.balance - request.amount;
        state.balance = new_balance;
        animator.animate_to(new_balance, now);

        surfaces.play(SoundCue::Success);

        state.clear_selection();
        surfaces.reset_inputs();

        tracing::info!(
            id = %record.id,
            receiver = %record.receiver,
            amount = %record.amount,
            balance = %new_balance,
            "transfer committed"
        );
        record
    }

    /// Abandon the pending transfer
    ///
    /// Returns `true` if a transfer was cancelled.
    pub fn cancel(&mut self, surfaces: &mut impl Surfaces) -> bool {
        let Some(task) = self.pending.take() else {
            return false;
        };
        if task.is_finished() {
            return false;
        }

        task.cancel();
        surfaces.hide(PopupKind::Loading);
        if let Some(request) = task.payload() {
            tracing::info!(
                receiver = %request.receiver,
                amount = %request.amount,
                "transfer cancelled"
            );
        }
        true
    }
}

impl Default for TransferController {
    fn default() -> Self {
        Self::new(DEFAULT_NETWORK_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::surface::recording::RecordingSurfaces;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn setup(balance: u64, selection: u64) -> (WalletState, BalanceAnimator, TransferController) {
        let mut state = WalletState::new(Coins::new(balance));
        state.selection = Coins::new(selection);
        let animator = BalanceAnimator::new(state.balance, ms(1000));
        (state, animator, TransferController::new(ms(2500)))
    }

    #[test]
    fn test_validate() {
        let balance = Coins::new(500);
        assert_eq!(
            validate("  ", Coins::new(10), balance),
            Err(TransferError::MissingInput)
        );
        assert_eq!(
            validate("bob", Coins::zero(), balance),
            Err(TransferError::MissingInput)
        );
        assert_eq!(
            validate("bob", Coins::new(1_000), balance),
            Err(TransferError::InsufficientBalance {
                attempted: Coins::new(1_000),
                balance,
            })
        );
        let request = validate(" bob ", Coins::new(500), balance).unwrap();
        assert_eq!(request.receiver, "bob");
        assert_eq!(request.amount, Coins::new(500));
    }

    #[test]
    fn test_missing_input_rejected_regardless_of_balance() {
        let (state, _, mut controller) = setup(u64::MAX, 0);
        let mut surfaces = RecordingSurfaces::default();
        let now = Instant::now();

        assert_eq!(
            controller.submit(&state, "alice", now, &mut surfaces),
            Err(TransferError::MissingInput)
        );

        let (state, _, mut controller) = setup(u64::MAX, 10);
        assert_eq!(
            controller.submit(&state, "", now, &mut surfaces),
            Err(TransferError::MissingInput)
        );
        assert!(!controller.is_pending());
        assert!(matches!(surfaces.last_shown(), Some(Popup::Error(_))));
    }

    #[test]
    fn test_insufficient_balance_leaves_state_alone() {
        let (mut state, mut animator, mut controller) = setup(500, 1_000);
        let mut surfaces = RecordingSurfaces::default();
        let now = Instant::now();

        let err = controller
            .submit(&state, "bob", now, &mut surfaces)
            .unwrap_err();
        assert_eq!(
            err,
            TransferError::InsufficientBalance {
                attempted: Coins::new(1_000),
                balance: Coins::new(500),
            }
        );
        assert_eq!(
            surfaces.last_shown(),
            Some(&Popup::Error(
                "You only have 500 coins. The selected amount (1,000) is too high.".to_string()
            ))
        );

        assert!(controller
            .poll(&mut state, &mut animator, now + ms(10_000), &mut surfaces)
            .is_none());
        assert_eq!(state.balance, Coins::new(500));
        assert!(state.history.is_empty());
        assert!(surfaces.history.is_empty());
    }

    #[test]
    fn test_commit_after_delay() {
        let (mut state, mut animator, mut controller) = setup(92_538_280, 100_000);
        let mut surfaces = RecordingSurfaces::default();
        let now = Instant::now();

        controller
            .submit(&state, "alice", now, &mut surfaces)
            .unwrap();
        assert!(controller.is_pending());
        assert_eq!(surfaces.last_shown(), Some(&Popup::Loading));
        assert_eq!(controller.remaining(now), Some(ms(2500)));

        assert!(controller
            .poll(&mut state, &mut animator, now + ms(2499), &mut surfaces)
            .is_none());
        assert_eq!(state.balance, Coins::new(92_538_280));

        let record = controller
            .poll(&mut state, &mut animator, now + ms(2500), &mut surfaces)
            .unwrap();
        assert_eq!(record.receiver_label(), "Sent to: alice");
        assert_eq!(record.amount_label(), "-100,000");

        assert_eq!(state.balance, Coins::new(92_438_280));
        assert_eq!(state.selection, Coins::zero());
        assert_eq!(state.history.latest(), Some(&record));
        assert_eq!(surfaces.history.first(), Some(&record));
        assert!(surfaces.hidden.contains(&PopupKind::Loading));
        assert_eq!(surfaces.cues, vec![SoundCue::Success]);
        assert_eq!(surfaces.resets, 1);
        assert!(!controller.is_pending());
        assert_eq!(animator.target(), Some(Coins::new(92_438_280)));

        match surfaces.last_shown() {
            Some(Popup::Success(message)) => {
                assert!(message.starts_with("100,000 coins successfully sent to alice!"));
                assert!(message.ends_with(DELIVERY_NOTICE));
            }
            other => panic!("expected success popup, got {:?}", other),
        }
    }

    #[test]
    fn test_second_submit_while_pending_is_rejected() {
        let (mut state, mut animator, mut controller) = setup(1_000, 100);
        let mut surfaces = RecordingSurfaces::default();
        let now = Instant::now();

        controller.submit(&state, "alice", now, &mut surfaces).unwrap();
        assert_eq!(
            controller.submit(&state, "bob", now + ms(10), &mut surfaces),
            Err(TransferError::InFlight)
        );
        assert_eq!(controller.pending_request().unwrap().receiver, "alice");

        controller.poll(&mut state, &mut animator, now + ms(5000), &mut surfaces);
        assert_eq!(state.balance, Coins::new(900));
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_cancel_pending() {
        let (mut state, mut animator, mut controller) = setup(1_000, 100);
        let mut surfaces = RecordingSurfaces::default();
        let now = Instant::now();

        assert!(!controller.cancel(&mut surfaces));
        controller.submit(&state, "alice", now, &mut surfaces).unwrap();
        assert!(controller.cancel(&mut surfaces));
        assert!(!controller.is_pending());
        assert_eq!(surfaces.hidden, vec![PopupKind::Loading]);

        assert!(controller
            .poll(&mut state, &mut animator, now + ms(5000), &mut surfaces)
            .is_none());
        assert_eq!(state.balance, Coins::new(1_000));
        assert_eq!(state.selection, Coins::new(100));
    }

    #[test]
    fn test_select_plays_click() {
        let (mut state, _, controller) = setup(1_000, 0);
        let mut surfaces = RecordingSurfaces::default();

        controller.select(&mut state, Coins::new(250), &mut surfaces);
        assert_eq!(state.selection, Coins::new(250));
        assert_eq!(surfaces.cues, vec![SoundCue::Click]);
    }
}
