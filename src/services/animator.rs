//! Balance counter animation
//!
//! Moves the displayed balance from where it currently is to a new target
//! over a fixed duration with an ease-out quadratic curve. Each call to
//! [`BalanceAnimator::tick`] renders one frame; the last frame lands exactly
//! on the target.

use std::time::{Duration, Instant};

use super::surface::DisplaySurface;
use super::task::CancelToken;
use crate::models::Coins;

/// Default animation length
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);

/// Ease-out quadratic: fast start, slow finish
pub fn ease_out_quad(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p) * (1.0 - p)
}

/// One rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub value: Coins,
    /// This is the last frame of the session
    pub done: bool,
}

/// One run of the counter from a start value to a target
#[derive(Debug)]
pub struct AnimationSession {
    start: Coins,
    target: Coins,
    started_at: Instant,
    duration: Duration,
    token: CancelToken,
    finished: bool,
}

impl AnimationSession {
    pub fn new(start: Coins, target: Coins, started_at: Instant, duration: Duration) -> Self {
        Self {
            start,
            target,
            started_at,
            duration,
            token: CancelToken::new(),
            finished: false,
        }
    }

    pub fn start(&self) -> Coins {
        self.start
    }

    pub fn target(&self) -> Coins {
        self.target
    }

    /// Handle that stops this session
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Finished or cancelled
    pub fn is_over(&self) -> bool {
        self.finished || self.token.is_cancelled()
    }

    /// Fraction of the duration elapsed at `now`, clamped to `[0, 1]`
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Value shown at `now`
    pub fn value_at(&self, now: Instant) -> Coins {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.target;
        }

        let start = self.start.get() as f64;
        let target = self.target.get() as f64;
        let value = (start - (start - target) * ease_out_quad(progress)).floor();
        Coins::new(value.max(0.0) as u64)
    }

    /// Produce the frame for `now`, or `None` once the session is over
    pub fn next_frame(&mut self, now: Instant) -> Option<Frame> {
        if self.is_over() {
            return None;
        }

        let done = self.progress(now) >= 1.0;
        if done {
            self.finished = true;
        }
        Some(Frame {
            value: self.value_at(now),
            done,
        })
    }
}

/// Owns the displayed balance and at most one running session
#[derive(Debug)]
pub struct BalanceAnimator {
    /// Value the display settled on after the last finished session
    settled: Coins,
    /// Value of the most recent frame
    shown: Coins,
    duration: Duration,
    session: Option<AnimationSession>,
}

impl BalanceAnimator {
    pub fn new(initial: Coins, duration: Duration) -> Self {
        Self {
            settled: initial,
            shown: initial,
            duration,
            session: None,
        }
    }

    /// Value the display settled on; only changes when a session completes
    pub fn settled(&self) -> Coins {
        self.settled
    }

    /// Value currently on screen
    pub fn displayed(&self) -> Coins {
        self.shown
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_animating(&self) -> bool {
        self.session.as_ref().is_some_and(|s| !s.is_over())
    }

    /// Target of the running session
    pub fn target(&self) -> Option<Coins> {
        self.session
            .as_ref()
            .filter(|s| !s.is_over())
            .map(AnimationSession::target)
    }

    /// Start animating toward `target` with the default duration
    pub fn animate_to(&mut self, target: Coins, now: Instant) -> CancelToken {
        self.animate_to_with(target, self.duration, now)
    }

    /// Start animating toward `target`
    ///
    /// Any running session is cancelled; the new one starts from the value
    /// currently on screen.
    pub fn animate_to_with(&mut self, target: Coins, duration: Duration, now: Instant) -> CancelToken {
        if let Some(previous) = self.session.take() {
            if !previous.is_over() {
                tracing::debug!(
                    to = %previous.target(),
                    "replacing running balance animation"
                );
                previous.token().cancel();
            }
        }

        let session = AnimationSession::new(self.shown, target, now, duration);
        tracing::debug!(from = %self.shown, to = %target, ?duration, "balance animation started");
        let token = session.token();
        self.session = Some(session);
        token
    }

    /// Render the frame for `now`
    ///
    /// Returns the frame value, or `None` when nothing is animating.
    pub fn tick(&mut self, now: Instant, display: &mut impl DisplaySurface) -> Option<Coins> {
        let session = self.session.as_mut()?;
        let Some(frame) = session.next_frame(now) else {
            self.session = None;
            return None;
        };

        self.shown = frame.value;
        display.render_balance(&frame.value.to_string());

        if frame.done {
            self.settled = frame.value;
            self.session = None;
            tracing::debug!(balance = %frame.value, "balance animation finished");
        }
        Some(frame.value)
    }

    /// Jump straight to `value` without animating
    pub fn snap_to(&mut self, value: Coins, display: &mut impl DisplaySurface) {
        if let Some(session) = self.session.take() {
            session.token().cancel();
        }
        self.settled = value;
        self.shown = value;
        display.render_balance(&value.to_string());
    }
}
