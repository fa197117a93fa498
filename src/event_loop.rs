//! Async event loop coordinating input, timers, and rendering.
//!
//! Single-threaded and cooperative: every stimulus (key, mouse, focus
//! change, tick) is handled to completion before the next one is
//! dispatched, which is what makes the carousel's transition flag a
//! sufficient guard. All timing is deadline-based and polled from the
//! tick arm, so nothing can fire after the loop tears down.

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use std::time::{Duration, Instant};

use crate::carousel::{Carousel, Effect};
use crate::input::{InputAction, InputState};
use crate::terminal::{render_app, stage_rect, Announcer, StatusBar, Tui};

/// Redraw / deadline-poll cadence (~30 FPS).
const TICK: Duration = Duration::from_millis(33);

/// Run the main event loop until the user quits.
///
/// `carousel` may be `None` when the deck had no slides; the loop then
/// only renders the placeholder and waits for quit.
pub async fn run(
    tui: &mut Tui,
    mut carousel: Option<Carousel>,
    mut status_bar: StatusBar,
    min_swipe_distance: i32,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut event_stream = EventStream::new();
    let mut input = InputState::new(min_swipe_distance);
    let mut announcer = Announcer::new();

    let mut tick = tokio::time::interval(TICK);
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // Track terminal size for the stage bounds used by hover and swipe.
    let (mut term_cols, mut term_rows) = crossterm::terminal::size().unwrap_or((80, 24));

    loop {
        let now = Instant::now();
        tui.terminal().draw(|frame| {
            render_app(frame, carousel.as_ref(), &status_bar, &announcer, now)
        })?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        if let Event::Resize(cols, rows) = event {
                            term_cols = cols;
                            term_rows = rows;
                            continue;
                        }

                        let area = ratatui::layout::Rect {
                            x: 0,
                            y: 0,
                            width: term_cols,
                            height: term_rows,
                        };
                        let stage = stage_rect(area, status_bar.visible);
                        let action = input.handle_event(&event, stage);
                        let now = Instant::now();

                        match action {
                            InputAction::Quit => break,
                            InputAction::Navigate(command) => {
                                if let Some(c) = carousel.as_mut() {
                                    let effects = c.apply(command, now);
                                    apply_effects(effects, &mut announcer, now);
                                }
                            }
                            InputAction::ToggleAutoplay => {
                                if let Some(c) = carousel.as_mut() {
                                    if c.autoplay_enabled() {
                                        c.stop_autoplay();
                                    } else {
                                        c.start_autoplay(now);
                                    }
                                }
                            }
                            InputAction::ToggleStatusBar => status_bar.toggle(),
                            InputAction::HoverEnter | InputAction::Hidden => {
                                if let Some(c) = carousel.as_mut() {
                                    c.suspend_autoplay();
                                }
                            }
                            InputAction::HoverLeave | InputAction::Visible => {
                                if let Some(c) = carousel.as_mut() {
                                    c.resume_autoplay(now);
                                }
                            }
                            InputAction::None => {}
                        }
                    }
                    Some(Err(e)) => {
                        return Err(Box::new(e));
                    }
                    None => {
                        // Event stream ended - shouldn't happen normally
                        break;
                    }
                }
            }

            _ = tick.tick() => {
                let now = Instant::now();
                if let Some(c) = carousel.as_mut() {
                    let effects = c.poll(now);
                    apply_effects(effects, &mut announcer, now);
                }
                announcer.sweep(now);
            }
        }
    }

    // The autoplay deadline must not outlive the view.
    if let Some(c) = carousel.as_mut() {
        c.shutdown();
    }

    Ok(())
}

/// Forward controller effects to their sinks.
fn apply_effects(effects: Vec<Effect>, announcer: &mut Announcer, now: Instant) {
    for effect in effects {
        match effect {
            Effect::SlideChanged {
                index,
                offset_percent,
            } => {
                log::debug!("active slide {} (track offset {}%)", index, offset_percent);
            }
            Effect::Announce(message) => announcer.announce(message, now),
            Effect::TransitionEnded => {}
        }
    }
}
