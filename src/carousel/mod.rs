//! Carousel state machine, autoplay scheduling, and swipe recognition.
//!
//! All navigation inputs (buttons, keys, indicators, swipes, the autoplay
//! timer) funnel through a single `Carousel::apply` entry point, which is
//! the only place the transition guard is checked.

mod autoplay;
mod controller;
mod gesture;

pub use autoplay::AutoPlay;
pub use controller::{
    Carousel, Command, Effect, SlideAnimation, Tuning, AUTOPLAY_INTERVAL, TRANSITION_DURATION,
};
pub use gesture::{Swipe, SwipeTracker, MIN_SWIPE_DISTANCE};
