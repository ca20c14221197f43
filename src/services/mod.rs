//! Service layer for coinsend
//!
//! The send flow, the balance animation and the surfaces they drive. Nothing
//! in here touches the terminal directly.

pub mod animator;
pub mod profile;
pub mod surface;
pub mod task;
pub mod transfer;
pub mod wallet;

pub use animator::{BalanceAnimator, DEFAULT_DURATION};
pub use profile::ProfilePicture;
pub use surface::{
    AudioSurface, DisplaySurface, HistorySurface, InputSurface, Popup, PopupKind, PopupSurface,
    SoundCue, Surfaces,
};
pub use task::{CancelToken, DelayedTask};
pub use transfer::{TransferController, TransferPhase, TransferRequest, DEFAULT_NETWORK_DELAY};
pub use wallet::Wallet;
