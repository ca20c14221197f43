//! Wallet facade
//!
//! Bundles the session state, the send flow and the balance animation so a
//! front end drives a single object from its event loop.

use std::time::{Duration, Instant};

use super::animator::BalanceAnimator;
use super::profile::ProfilePicture;
use super::surface::{PopupKind, Surfaces};
use super::transfer::{TransferController, TransferRequest};
use crate::config::Settings;
use crate::error::TransferError;
use crate::models::{Coins, TransactionLog, TransactionRecord, WalletState};

/// One wallet session
#[derive(Debug)]
pub struct Wallet {
    state: WalletState,
    transfers: TransferController,
    animator: BalanceAnimator,
}

impl Wallet {
    pub fn new(balance: Coins, network_delay: Duration, animation: Duration) -> Self {
        Self {
            state: WalletState::new(balance),
            transfers: TransferController::new(network_delay),
            animator: BalanceAnimator::new(balance, animation),
        }
    }

    /// Build a wallet from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Coins::new(settings.initial_balance),
            settings.network_delay(),
            settings.animation_duration(),
        )
    }

    /// Paint the initial balance and profile picture
    pub fn render_initial(&self, picture: &ProfilePicture, surfaces: &mut impl Surfaces) {
        surfaces.render_balance(&self.animator.displayed().to_string());
        surfaces.render_profile(picture);
    }

    /// Authoritative balance
    pub fn balance(&self) -> Coins {
        self.state.balance
    }

    /// Balance currently on screen
    pub fn displayed_balance(&self) -> Coins {
        self.animator.displayed()
    }

    pub fn selection(&self) -> Coins {
        self.state.selection
    }

    pub fn history(&self) -> &TransactionLog {
        &self.state.history
    }

    pub fn is_pending(&self) -> bool {
        self.transfers.is_pending()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Nothing pending and nothing animating
    pub fn is_settled(&self) -> bool {
        !self.is_pending() && !self.is_animating()
    }

    pub fn pending_request(&self) -> Option<&TransferRequest> {
        self.transfers.pending_request()
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.transfers.remaining(now)
    }

    /// Select a preset amount
    pub fn select(&mut self, amount: Coins, surfaces: &mut impl Surfaces) {
        self.transfers.select(&mut self.state, amount, surfaces);
    }

    /// Send the selected amount to `receiver`
    pub fn submit(
        &mut self,
        receiver: &str,
        now: Instant,
        surfaces: &mut impl Surfaces,
    ) -> Result<(), TransferError> {
        self.transfers.submit(&self.state, receiver, now, surfaces)
    }

    /// Advance the flow by one frame
    ///
    /// Commits a transfer whose delay has expired, then renders one
    /// animation frame. Returns the record when a commit happened.
    pub fn tick(&mut self, now: Instant, surfaces: &mut impl Surfaces) -> Option<TransactionRecord> {
        let committed = self
            .transfers
            .poll(&mut self.state, &mut self.animator, now, surfaces);
        self.animator.tick(now, surfaces);
        committed
    }

    /// Abandon the pending transfer
    pub fn cancel_pending(&mut self, surfaces: &mut impl Surfaces) -> bool {
        self.transfers.cancel(surfaces)
    }

    /// Close the error or success popup
    pub fn dismiss(&self, kind: PopupKind, surfaces: &mut impl Surfaces) {
        if kind != PopupKind::Loading {
            surfaces.hide(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::surface::recording::RecordingSurfaces;
    use crate::services::surface::{Popup, SoundCue};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn run_until_settled(wallet: &mut Wallet, start: Instant, surfaces: &mut RecordingSurfaces) {
        let mut now = start;
        while !wallet.is_settled() {
            now += ms(16);
            wallet.tick(now, surfaces);
        }
    }

    #[test]
    fn test_send_scenario() {
        let mut wallet = Wallet::new(Coins::new(92_538_280), ms(2500), ms(1000));
        let mut surfaces = RecordingSurfaces::default();
        let start = Instant::now();

        wallet.select(Coins::new(100_000), &mut surfaces);
        wallet.submit("alice", start, &mut surfaces).unwrap();
        run_until_settled(&mut wallet, start, &mut surfaces);

        assert_eq!(wallet.balance(), Coins::new(92_438_280));
        assert_eq!(wallet.displayed_balance(), Coins::new(92_438_280));
        assert_eq!(surfaces.last_balance(), Some("92,438,280"));

        let top = wallet.history().latest().unwrap();
        assert_eq!(top.receiver_label(), "Sent to: alice");
        assert_eq!(top.amount_label(), "-100,000");
        assert_eq!(surfaces.cues, vec![SoundCue::Click, SoundCue::Success]);
    }

    #[test]
    fn test_rejected_scenario() {
        let mut wallet = Wallet::new(Coins::new(500), ms(2500), ms(1000));
        let mut surfaces = RecordingSurfaces::default();
        let start = Instant::now();

        wallet.select(Coins::new(1_000), &mut surfaces);
        let err = wallet.submit("bob", start, &mut surfaces).unwrap_err();
        assert!(matches!(err, TransferError::InsufficientBalance { .. }));

        wallet.tick(start + ms(3000), &mut surfaces);
        assert_eq!(wallet.balance(), Coins::new(500));
        assert!(wallet.history().is_empty());
        assert!(wallet.is_settled());
    }

    #[test]
    fn test_history_order_across_transfers() {
        let mut wallet = Wallet::new(Coins::new(1_000), ms(100), ms(50));
        let mut surfaces = RecordingSurfaces::default();
        let mut now = Instant::now();

        wallet.select(Coins::new(100), &mut surfaces);
        wallet.submit("first", now, &mut surfaces).unwrap();
        now += ms(100);
        assert!(wallet.tick(now, &mut surfaces).is_some());

        // A second transfer may start while the first animation still runs
        wallet.select(Coins::new(200), &mut surfaces);
        wallet.submit("second", now, &mut surfaces).unwrap();
        run_until_settled(&mut wallet, now, &mut surfaces);

        let receivers: Vec<_> = wallet.history().iter().map(|r| r.receiver.as_str()).collect();
        assert_eq!(receivers, vec!["second", "first"]);
        assert_eq!(wallet.balance(), Coins::new(700));
        assert_eq!(wallet.displayed_balance(), Coins::new(700));
    }

    #[test]
    fn test_render_initial_and_dismiss() {
        let wallet = Wallet::new(Coins::new(92_538_280), ms(10), ms(10));
        let mut surfaces = RecordingSurfaces::default();

        wallet.render_initial(&ProfilePicture::Fallback, &mut surfaces);
        assert_eq!(surfaces.last_balance(), Some("92,538,280"));
        assert_eq!(surfaces.profile, Some(ProfilePicture::Fallback));

        wallet.dismiss(PopupKind::Error, &mut surfaces);
        wallet.dismiss(PopupKind::Loading, &mut surfaces);
        assert_eq!(surfaces.hidden, vec![PopupKind::Error]);
    }

    #[test]
    fn test_cancel_pending_keeps_balance() {
        let mut wallet = Wallet::new(Coins::new(1_000), ms(100), ms(50));
        let mut surfaces = RecordingSurfaces::default();
        let now = Instant::now();

        wallet.select(Coins::new(100), &mut surfaces);
        wallet.submit("alice", now, &mut surfaces).unwrap();
        assert_eq!(surfaces.last_shown(), Some(&Popup::Loading));
        assert!(wallet.cancel_pending(&mut surfaces));

        wallet.tick(now + ms(500), &mut surfaces);
        assert_eq!(wallet.balance(), Coins::new(1_000));
        assert!(wallet.history().is_empty());
        assert!(wallet.is_settled());
    }
}
