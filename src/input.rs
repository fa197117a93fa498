//! Input fan-in: terminal events to carousel actions.
//!
//! This module handles:
//! - Mapping key presses to navigation commands
//! - Tracking mouse drags through the swipe recognizer
//! - Hover enter/leave over the stage and focus (visibility) changes
//!
//! Every source ends up as an [`InputAction`], so the caller has a single
//! dispatch point and the carousel a single entry.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::carousel::{Command, Swipe, SwipeTracker};

/// Result of interpreting one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Request a slide transition
    Navigate(Command),
    /// Turn autoplay on/off for the session
    ToggleAutoplay,
    /// Show/hide the status bar
    ToggleStatusBar,
    /// Pointer entered the stage (suspend autoplay)
    HoverEnter,
    /// Pointer left the stage (resume autoplay)
    HoverLeave,
    /// Terminal lost focus (suspend autoplay)
    Hidden,
    /// Terminal regained focus (resume autoplay)
    Visible,
    /// Exit the application
    Quit,
    /// Nothing to do
    None,
}

/// Transient input state: the in-flight gesture and the hover flag.
#[derive(Debug)]
pub struct InputState {
    swipe: SwipeTracker,
    hovering: bool,
}

impl InputState {
    pub fn new(min_swipe_distance: i32) -> Self {
        Self {
            swipe: SwipeTracker::new(min_swipe_distance),
            hovering: false,
        }
    }

    /// Interpret a terminal event against the current stage area.
    pub fn handle_event(&mut self, event: &Event, stage: Rect) -> InputAction {
        match event {
            Event::Key(key) => map_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse, stage),
            Event::FocusLost => InputAction::Hidden,
            Event::FocusGained => InputAction::Visible,
            _ => InputAction::None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, stage: Rect) -> InputAction {
        let pos = Position::new(mouse.column, mouse.row);
        let (x, y) = (mouse.column as i32, mouse.row as i32);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if stage.contains(pos) {
                    self.swipe.begin(x, y);
                }
                InputAction::None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                // While claimed as horizontal, the drag is navigation
                // intent; hover state is left alone.
                self.swipe.update(x, y);
                InputAction::None
            }
            MouseEventKind::Up(MouseButton::Left) => match self.swipe.finish(x, y) {
                Some(Swipe::Right) => InputAction::Navigate(Command::Prev),
                Some(Swipe::Left) => InputAction::Navigate(Command::Next),
                None => InputAction::None,
            },
            MouseEventKind::Moved => self.update_hover(stage.contains(pos)),
            _ => InputAction::None,
        }
    }

    fn update_hover(&mut self, inside: bool) -> InputAction {
        if inside && !self.hovering {
            self.hovering = true;
            InputAction::HoverEnter
        } else if !inside && self.hovering {
            self.hovering = false;
            InputAction::HoverLeave
        } else {
            InputAction::None
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }
}

/// Map a key press to an action.
///
/// Arrow keys, Home and End follow the original carousel bindings;
/// digits act as indicator clicks; `p`/`n` mirror the prev/next buttons.
pub fn map_key(event: KeyEvent) -> InputAction {
    let KeyEvent {
        code, modifiers, ..
    } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => InputAction::Quit,
            _ => InputAction::None,
        };
    }

    match code {
        KeyCode::Left => InputAction::Navigate(Command::Prev),
        KeyCode::Right => InputAction::Navigate(Command::Next),
        KeyCode::Home => InputAction::Navigate(Command::First),
        KeyCode::End => InputAction::Navigate(Command::Last),
        KeyCode::Char('p') | KeyCode::Char('P') => InputAction::Navigate(Command::Prev),
        KeyCode::Char('n') | KeyCode::Char('N') => InputAction::Navigate(Command::Next),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as isize - '1' as isize;
            InputAction::Navigate(Command::Goto(index))
        }
        KeyCode::Char('a') | KeyCode::Char('A') => InputAction::ToggleAutoplay,
        KeyCode::Char('s') | KeyCode::Char('S') => InputAction::ToggleStatusBar,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
        _ => InputAction::None,
    }
}
