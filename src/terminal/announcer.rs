//! Announcement line: the live-region analogue.
//!
//! Slide changes are announced in plain text on their own line, and each
//! announcement is dropped after a short TTL, the way a screen-reader
//! live region node is removed once it has been spoken.

use std::time::{Duration, Instant};

/// How long an announcement stays on screen.
pub const ANNOUNCEMENT_TTL: Duration = Duration::from_millis(1000);

/// Holds the most recent announcement until it expires.
#[derive(Debug, Default)]
pub struct Announcer {
    message: Option<(String, Instant)>,
}

impl Announcer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a new announcement, replacing any current one.
    pub fn announce(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some((message.into(), now));
    }

    /// The current announcement, if it hasn't expired.
    pub fn current(&self, now: Instant) -> Option<&str> {
        match &self.message {
            Some((text, since)) if now.duration_since(*since) < ANNOUNCEMENT_TTL => {
                Some(text.as_str())
            }
            _ => None,
        }
    }

    /// Drop an expired announcement. Called from the tick so the line
    /// clears even without further input.
    pub fn sweep(&mut self, now: Instant) {
        if self.current(now).is_none() {
            self.message = None;
        }
    }
}
