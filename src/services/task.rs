//! Cancellable scheduled work
//!
//! The app runs on a single tick-driven loop, so nothing here spawns
//! threads. A [`DelayedTask`] is polled with the current instant and hands
//! out its payload exactly once, unless its [`CancelToken`] was tripped
//! first.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared cancellation flag
///
/// Clones observe the same flag, so a handle kept by the owner can cancel
/// work held elsewhere.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the flag; further checks report cancelled
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// A one-shot task due at a fixed instant
#[derive(Debug)]
pub struct DelayedTask<T> {
    due: Instant,
    payload: Option<T>,
    token: CancelToken,
}

impl<T> DelayedTask<T> {
    /// Schedule `payload` to fire `delay` after `now`
    pub fn schedule(payload: T, now: Instant, delay: Duration) -> Self {
        Self {
            due: now + delay,
            payload: Some(payload),
            token: CancelToken::new(),
        }
    }

    /// Instant at which the task fires
    pub fn due(&self) -> Instant {
        self.due
    }

    /// Time left before the task fires
    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }

    /// Handle that can cancel this task
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Peek at the payload while it has not fired
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Fired or cancelled
    pub fn is_finished(&self) -> bool {
        self.payload.is_none() || self.token.is_cancelled()
    }

    /// Take the payload if the deadline has passed
    ///
    /// Returns `Some` at most once over the task's lifetime and never after
    /// cancellation.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.token.is_cancelled() || now < self.due {
            return None;
        }
        self.payload.take()
    }
}
