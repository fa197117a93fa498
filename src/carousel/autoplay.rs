//! Deadline-based autoplay scheduling.
//!
//! Autoplay is a single repeating deadline rather than a detached timer:
//! the owner polls [`AutoPlay::fire`] from its tick, and cancelling is a
//! matter of clearing the deadline. Nothing can fire after a stop, and
//! nothing outlives the owner.

use std::time::{Duration, Instant};

/// Repeating advance timer with suspend/resume and permanent stop.
///
/// `suspended` and `enabled` are distinct on purpose: hover and
/// page-hidden pause autoplay without forgetting that it was on, while
/// `stop` (teardown, or the user turning it off) is final.
#[derive(Debug)]
pub struct AutoPlay {
    interval: Duration,
    enabled: bool,
    suspended: bool,
    next_fire: Option<Instant>,
}

impl AutoPlay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            enabled: false,
            suspended: false,
            next_fire: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start (or restart) the repeating timer.
    ///
    /// Any pending deadline is replaced, so there is never more than one
    /// schedule regardless of how often this is called.
    pub fn start(&mut self, now: Instant) {
        self.enabled = true;
        self.suspended = false;
        self.next_fire = Some(now + self.interval);
    }

    /// Permanently stop and cancel the pending deadline.
    pub fn stop(&mut self) {
        self.enabled = false;
        self.suspended = false;
        self.next_fire = None;
    }

    /// Pause without losing the enabled state.
    pub fn suspend(&mut self) {
        if self.enabled {
            self.suspended = true;
            self.next_fire = None;
        }
    }

    /// Undo a suspension. The next fire lands one full period from `now`.
    /// Has no effect when stopped or already running.
    pub fn resume(&mut self, now: Instant) {
        if self.enabled && self.suspended {
            self.suspended = false;
            self.next_fire = Some(now + self.interval);
        }
    }

    /// Check the deadline; returns `true` when an advance is due and
    /// reschedules the next one.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next_fire {
            Some(deadline) if now >= deadline => {
                self.next_fire = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enabled and not currently suspended.
    pub fn is_running(&self) -> bool {
        self.enabled && !self.suspended
    }
}
