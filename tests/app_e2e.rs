//! End-to-end tests wiring input events through the carousel to the
//! announcement line and status bar, without a real terminal.

use std::io::Write;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use showcase::carousel::{Carousel, Command, Effect, Tuning, TRANSITION_DURATION};
use showcase::deck::Deck;
use showcase::input::{InputAction, InputState};
use showcase::terminal::{stage_rect, Announcer, StatusBar, ANNOUNCEMENT_TTL};

fn full_area() -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 30,
    }
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Feed one event through the fan-in and the carousel, like the event
/// loop does, collecting effects.
fn dispatch(
    input: &mut InputState,
    carousel: &mut Carousel,
    event: Event,
    stage: Rect,
    now: Instant,
) -> Vec<Effect> {
    match input.handle_event(&event, stage) {
        InputAction::Navigate(command) => carousel.apply(command, now),
        InputAction::HoverEnter | InputAction::Hidden => {
            carousel.suspend_autoplay();
            Vec::new()
        }
        InputAction::HoverLeave | InputAction::Visible => {
            carousel.resume_autoplay(now);
            Vec::new()
        }
        _ => Vec::new(),
    }
}

#[test]
fn arrow_key_navigates_and_announces() {
    let now = Instant::now();
    let mut carousel = Carousel::new(Deck::sample(), Tuning::default(), now).unwrap();
    let mut input = InputState::new(50);
    let mut announcer = Announcer::new();
    let stage = stage_rect(full_area(), true);

    let effects = dispatch(&mut input, &mut carousel, key(KeyCode::Right), stage, now);
    assert_eq!(carousel.index(), 1);

    for effect in effects {
        if let Effect::Announce(message) = effect {
            announcer.announce(message, now);
        }
    }
    assert_eq!(
        announcer.current(now),
        Some("Now showing: Harbor Analytics")
    );
    assert!(announcer.current(now + ANNOUNCEMENT_TTL).is_none());
}

#[test]
fn swipe_across_the_stage_changes_slides() {
    let now = Instant::now();
    let mut carousel = Carousel::new(Deck::sample(), Tuning::default(), now).unwrap();
    let mut input = InputState::new(50);
    let stage = stage_rect(full_area(), true);

    // Drag leftward by 60 cells, 10 rows of vertical noise: a swipe left,
    // which navigates to the next slide.
    dispatch(
        &mut input,
        &mut carousel,
        mouse(MouseEventKind::Down(MouseButton::Left), 80, 10),
        stage,
        now,
    );
    dispatch(
        &mut input,
        &mut carousel,
        mouse(MouseEventKind::Up(MouseButton::Left), 20, 20),
        stage,
        now,
    );
    assert_eq!(carousel.index(), 1);

    // A 40-cell drag stays below the threshold: no change.
    let later = now + TRANSITION_DURATION;
    carousel.poll(later);
    dispatch(
        &mut input,
        &mut carousel,
        mouse(MouseEventKind::Down(MouseButton::Left), 20, 10),
        stage,
        later,
    );
    dispatch(
        &mut input,
        &mut carousel,
        mouse(MouseEventKind::Up(MouseButton::Left), 60, 20),
        stage,
        later,
    );
    assert_eq!(carousel.index(), 1);
}

#[test]
fn hover_and_focus_gate_autoplay() {
    let now = Instant::now();
    let tuning = Tuning::default();
    let mut carousel = Carousel::new(Deck::sample(), tuning, now).unwrap();
    let mut input = InputState::new(50);
    let stage = stage_rect(full_area(), true);

    // Pointer over the stage suspends autoplay.
    dispatch(
        &mut input,
        &mut carousel,
        mouse(MouseEventKind::Moved, 10, 5),
        stage,
        now,
    );
    assert!(!carousel.autoplay_running());
    let hovered = now + tuning.autoplay_interval * 2;
    carousel.poll(hovered);
    assert_eq!(carousel.index(), 0);

    // Pointer leaving resumes it.
    dispatch(
        &mut input,
        &mut carousel,
        mouse(MouseEventKind::Moved, 10, 29),
        stage,
        hovered,
    );
    assert!(carousel.autoplay_running());
    carousel.poll(hovered + tuning.autoplay_interval);
    assert_eq!(carousel.index(), 1);

    // Focus loss behaves like hiding the page.
    let t = hovered + tuning.autoplay_interval;
    dispatch(&mut input, &mut carousel, Event::FocusLost, stage, t);
    assert!(!carousel.autoplay_running());
    dispatch(&mut input, &mut carousel, Event::FocusGained, stage, t);
    assert!(carousel.autoplay_running());
}

#[test]
fn all_input_sources_share_the_transition_guard() {
    let now = Instant::now();
    let mut carousel = Carousel::new(Deck::sample(), Tuning::default(), now).unwrap();
    let mut input = InputState::new(50);
    let stage = stage_rect(full_area(), true);

    dispatch(&mut input, &mut carousel, key(KeyCode::Right), stage, now);
    assert_eq!(carousel.index(), 1);

    // Key, indicator digit, and swipe all bounce off the lock.
    dispatch(&mut input, &mut carousel, key(KeyCode::Left), stage, now);
    dispatch(&mut input, &mut carousel, key(KeyCode::Char('3')), stage, now);
    dispatch(
        &mut input,
        &mut carousel,
        mouse(MouseEventKind::Down(MouseButton::Left), 80, 10),
        stage,
        now,
    );
    dispatch(
        &mut input,
        &mut carousel,
        mouse(MouseEventKind::Up(MouseButton::Left), 10, 10),
        stage,
        now,
    );
    assert_eq!(carousel.index(), 1);
}

#[test]
fn status_bar_reflects_carousel_state() {
    let now = Instant::now();
    let mut carousel = Carousel::new(Deck::sample(), Tuning::default(), now).unwrap();
    let bar = StatusBar::new();

    assert!(bar.format(&carousel).contains("slide 1/3"));

    carousel.apply(Command::Last, now);
    let text = bar.format(&carousel);
    assert!(text.contains("slide 3/3"));
    assert!(text.contains("Field Notes"));
}

#[test]
fn deck_file_drives_the_carousel() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
title = "Client Work"

[[slide]]
title = "Alpha"

[[slide]]
title = "Beta"
"#
    )
    .unwrap();

    let deck = Deck::load(file.path()).unwrap();
    let now = Instant::now();
    let mut carousel = Carousel::new(deck, Tuning::default(), now).unwrap();

    let effects = carousel.apply(Command::Next, now);
    assert!(effects.contains(&Effect::Announce("Now showing: Beta".to_string())));
}

#[test]
fn quit_keys_map_to_quit() {
    let mut input = InputState::new(50);
    let stage = stage_rect(full_area(), true);
    for event in [
        key(KeyCode::Char('q')),
        key(KeyCode::Esc),
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
    ] {
        assert_eq!(input.handle_event(&event, stage), InputAction::Quit);
    }
}
