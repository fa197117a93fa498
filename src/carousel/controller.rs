//! The carousel controller: slide index, transition lock, and autoplay.
//!
//! The controller owns its state exclusively; external code requests
//! changes through [`Carousel::apply`] and drives time through
//! [`Carousel::poll`]. Both take an explicit `now` so tests can run the
//! machine against synthetic clocks.

use std::time::{Duration, Instant};

use super::autoplay::AutoPlay;
use crate::deck::Deck;

/// Duration of the slide transition. This single value drives both the
/// visual animation and the input lock, so the two cannot drift apart.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);

/// Default autoplay period between automatic advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// A navigation request. Every input source produces one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Advance one slide (wraps to the first slide past the end)
    Next,
    /// Go back one slide (wraps to the last slide before the start)
    Prev,
    /// Jump to the first slide
    First,
    /// Jump to the last slide
    Last,
    /// Jump to an arbitrary index; out-of-range values wrap modulo N
    Goto(isize),
}

/// Observable output of an accepted state change.
///
/// The event loop forwards these to the renderer and the announcer; the
/// controller itself never touches the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The active slide changed. `offset_percent` is the horizontal track
    /// offset of the new slide (`-index * 100`).
    SlideChanged { index: usize, offset_percent: i32 },
    /// Text for the accessibility announcement line
    Announce(String),
    /// The transition lock was released
    TransitionEnded,
}

/// Timing parameters for a carousel instance.
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    pub transition: Duration,
    pub autoplay_interval: Duration,
    pub autoplay_enabled: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            transition: TRANSITION_DURATION,
            autoplay_interval: AUTOPLAY_INTERVAL,
            autoplay_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Transitioning { from: usize, until: Instant },
}

/// Snapshot of an in-flight transition, for rendering interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideAnimation {
    /// Index the transition started from
    pub from: usize,
    /// 0.0 at the start of the transition window, 1.0 at the end
    pub progress: f32,
    /// Whether the slide is moving forward (next) or backward (prev)
    pub forward: bool,
}

/// Carousel state machine.
///
/// States: `Idle` and `Transitioning`. An accepted navigation request
/// while `Idle` moves to `Transitioning` until a fixed deadline; requests
/// received while `Transitioning` are silently dropped (no queueing).
#[derive(Debug)]
pub struct Carousel {
    deck: Deck,
    index: usize,
    phase: Phase,
    autoplay: AutoPlay,
    transition: Duration,
}

impl Carousel {
    /// Build a controller over a deck.
    ///
    /// Returns `None` when the deck has no slides: the feature is simply
    /// absent and the caller carries on without carousel behavior.
    pub fn new(deck: Deck, tuning: Tuning, now: Instant) -> Option<Self> {
        if deck.is_empty() {
            return None;
        }
        let mut autoplay = AutoPlay::new(tuning.autoplay_interval);
        if tuning.autoplay_enabled {
            autoplay.start(now);
        }
        Some(Self {
            deck,
            index: 0,
            phase: Phase::Idle,
            autoplay,
            transition: tuning.transition,
        })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Number of slides (always > 0 once constructed).
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Index of the active slide, always in `[0, len)`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Horizontal track offset of the active slide, in percent.
    pub fn offset_percent(&self) -> i32 {
        -(self.index as i32) * 100
    }

    /// In-flight transition details, or `None` while idle.
    pub fn animation(&self, now: Instant) -> Option<SlideAnimation> {
        match self.phase {
            Phase::Idle => None,
            Phase::Transitioning { from, until } => {
                let remaining = until.saturating_duration_since(now);
                let progress =
                    1.0 - remaining.as_secs_f32() / self.transition.as_secs_f32().max(f32::EPSILON);
                Some(SlideAnimation {
                    from,
                    progress: progress.clamp(0.0, 1.0),
                    forward: self.is_forward(from),
                })
            }
        }
    }

    fn is_forward(&self, from: usize) -> bool {
        let n = self.len();
        if (from + 1) % n == self.index {
            true
        } else if (self.index + 1) % n == from {
            false
        } else {
            self.index > from
        }
    }

    /// Single command entry point for every input source.
    pub fn apply(&mut self, command: Command, now: Instant) -> Vec<Effect> {
        let target = match command {
            Command::Next => self.index as isize + 1,
            Command::Prev => self.index as isize - 1,
            Command::First => 0,
            Command::Last => self.len() as isize - 1,
            Command::Goto(index) => index,
        };
        self.goto(target, now)
    }

    /// Normalize and perform a slide change.
    ///
    /// Dropped while a transition is in flight. Targets wrap with
    /// signed-safe modulo, so any integer is a valid request.
    fn goto(&mut self, target: isize, now: Instant) -> Vec<Effect> {
        if self.is_transitioning() {
            log::trace!("navigation to {} dropped: transition in flight", target);
            return Vec::new();
        }

        let target = target.rem_euclid(self.len() as isize) as usize;
        if target == self.index {
            return Vec::new();
        }

        let from = self.index;
        self.index = target;
        self.phase = Phase::Transitioning {
            from,
            until: now + self.transition,
        };
        log::debug!("slide {} -> {}", from, target);

        let title = &self.deck.slides()[target].title;
        vec![
            Effect::SlideChanged {
                index: target,
                offset_percent: self.offset_percent(),
            },
            Effect::Announce(format!("Now showing: {}", title)),
        ]
    }

    /// Advance time: release an expired transition lock and fire a due
    /// autoplay deadline. Called from the event loop's tick.
    pub fn poll(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();

        if let Phase::Transitioning { until, .. } = self.phase {
            if now >= until {
                self.phase = Phase::Idle;
                effects.push(Effect::TransitionEnded);
            }
        }

        if self.autoplay.fire(now) {
            effects.extend(self.goto(self.index as isize + 1, now));
        }

        effects
    }

    /// (Re)start autoplay. Replaces any pending deadline, so calling it
    /// twice never results in two schedules.
    pub fn start_autoplay(&mut self, now: Instant) {
        self.autoplay.start(now);
    }

    /// Permanently stop autoplay and cancel the pending deadline.
    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    /// Pause autoplay without forgetting that it was on (hover, hidden).
    pub fn suspend_autoplay(&mut self) {
        self.autoplay.suspend();
    }

    /// Undo a suspension; the next advance lands one period from `now`.
    pub fn resume_autoplay(&mut self, now: Instant) {
        self.autoplay.resume(now);
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay.is_enabled()
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Tear down: autoplay must not survive the view.
    pub fn shutdown(&mut self) {
        self.autoplay.stop();
        log::debug!("carousel shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    fn carousel(n: usize) -> (Carousel, Instant) {
        let deck = Deck::with_titles((0..n).map(|i| format!("Slide {}", i)));
        let now = Instant::now();
        let c = Carousel::new(deck, Tuning::default(), now).expect("non-empty deck");
        (c, now)
    }

    fn settle(c: &mut Carousel, now: Instant) -> Instant {
        let later = now + TRANSITION_DURATION;
        c.poll(later);
        later
    }

    #[test]
    fn test_starts_idle_at_index_zero() {
        let (c, _) = carousel(3);
        assert_eq!(c.index(), 0);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn test_empty_deck_abstains() {
        let deck = Deck::with_titles(std::iter::empty::<String>());
        assert!(Carousel::new(deck, Tuning::default(), Instant::now()).is_none());
    }

    #[test]
    fn test_next_enters_transition() {
        let (mut c, now) = carousel(3);
        let effects = c.apply(Command::Next, now);
        assert_eq!(c.index(), 1);
        assert!(c.is_transitioning());
        assert!(effects.contains(&Effect::SlideChanged {
            index: 1,
            offset_percent: -100,
        }));
        assert!(effects.contains(&Effect::Announce("Now showing: Slide 1".into())));
    }

    #[test]
    fn test_requests_dropped_while_transitioning() {
        let (mut c, now) = carousel(3);
        c.apply(Command::Next, now);
        assert_eq!(c.index(), 1);

        // Anything during the lock window is a no-op, regardless of source.
        assert!(c.apply(Command::Next, now).is_empty());
        assert!(c.apply(Command::Goto(0), now).is_empty());
        assert!(c.apply(Command::Last, now).is_empty());
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_transition_ends_exactly_once() {
        let (mut c, now) = carousel(3);
        c.stop_autoplay();
        c.apply(Command::Next, now);

        let before = now + TRANSITION_DURATION - Duration::from_millis(1);
        assert!(c.poll(before).is_empty());
        assert!(c.is_transitioning());

        let at = now + TRANSITION_DURATION;
        assert_eq!(c.poll(at), vec![Effect::TransitionEnded]);
        assert!(!c.is_transitioning());

        // No double fire.
        assert!(c.poll(at + Duration::from_millis(1)).is_empty());
    }

    #[test]
    fn test_wraparound_is_signed_modulo() {
        let n = 3isize;
        for k in -7..=7 {
            let (mut c, now) = carousel(n as usize);
            c.apply(Command::Goto(k), now);
            assert_eq!(c.index() as isize, ((k % n) + n) % n, "k = {}", k);
        }
    }

    #[test]
    fn test_goto_minus_one_from_zero_wraps_to_last() {
        let (mut c, now) = carousel(3);
        c.apply(Command::Goto(-1), now);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_goto_same_index_is_noop() {
        let (mut c, now) = carousel(3);
        assert!(c.apply(Command::Goto(0), now).is_empty());
        assert!(!c.is_transitioning(), "no timer churn for redundant target");
    }

    #[test]
    fn test_next_three_times_wraps() {
        let (mut c, mut now) = carousel(3);
        for expected in [1, 2, 0] {
            c.apply(Command::Next, now);
            assert_eq!(c.index(), expected);
            now = settle(&mut c, now);
        }
    }

    #[test]
    fn test_prev_from_zero_wraps_to_last() {
        let (mut c, now) = carousel(3);
        c.apply(Command::Prev, now);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_first_and_last() {
        let (mut c, mut now) = carousel(4);
        c.apply(Command::Last, now);
        assert_eq!(c.index(), 3);
        now = settle(&mut c, now);
        c.apply(Command::First, now);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_autoplay_advances_after_interval() {
        let (mut c, now) = carousel(3);
        assert!(c.poll(now + AUTOPLAY_INTERVAL - Duration::from_millis(1)).is_empty());

        let effects = c.poll(now + AUTOPLAY_INTERVAL);
        assert_eq!(c.index(), 1);
        assert!(effects.iter().any(|e| matches!(e, Effect::SlideChanged { index: 1, .. })));
    }

    #[test]
    fn test_autoplay_start_is_idempotent() {
        let (mut c, now) = carousel(3);
        c.start_autoplay(now);
        c.start_autoplay(now);

        // One pending deadline: a full period later exactly one advance fired.
        c.poll(now + AUTOPLAY_INTERVAL);
        let later = now + AUTOPLAY_INTERVAL + TRANSITION_DURATION;
        c.poll(later);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_hover_suspends_and_resumes_autoplay() {
        let (mut c, now) = carousel(3);
        c.suspend_autoplay();

        // Hovered: no change for well over a period.
        let hovered_until = now + AUTOPLAY_INTERVAL * 2;
        c.poll(hovered_until);
        assert_eq!(c.index(), 0);

        // After resume the next change lands within one period.
        c.resume_autoplay(hovered_until);
        c.poll(hovered_until + AUTOPLAY_INTERVAL);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_stop_is_permanent() {
        let (mut c, now) = carousel(3);
        c.stop_autoplay();
        c.resume_autoplay(now);
        c.poll(now + AUTOPLAY_INTERVAL * 3);
        assert_eq!(c.index(), 0, "resume must not revive a stopped autoplay");
    }

    #[test]
    fn test_shutdown_cancels_autoplay() {
        let (mut c, now) = carousel(3);
        c.shutdown();
        assert!(!c.autoplay_enabled());
        c.poll(now + AUTOPLAY_INTERVAL * 2);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_animation_reports_direction_and_progress() {
        let (mut c, now) = carousel(3);
        c.apply(Command::Next, now);

        let anim = c.animation(now).expect("transition in flight");
        assert_eq!(anim.from, 0);
        assert!(anim.forward);
        assert!(anim.progress < 0.01);

        let anim = c
            .animation(now + TRANSITION_DURATION / 2)
            .expect("still in flight");
        assert!((anim.progress - 0.5).abs() < 0.05);

        assert!(c.animation(now).is_some());
        c.poll(now + TRANSITION_DURATION);
        assert!(c.animation(now + TRANSITION_DURATION).is_none());
    }

    #[test]
    fn test_animation_forward_across_wrap() {
        let (mut c, mut now) = carousel(3);
        c.apply(Command::Goto(2), now);
        now = settle(&mut c, now);

        // 2 -> 0 via Next is forward motion even though the index decreases.
        c.apply(Command::Next, now);
        assert!(c.animation(now).expect("in flight").forward);
    }
}
