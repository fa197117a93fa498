//! TUI wrapper that manages the ratatui terminal with crossterm backend.
//!
//! Handles raw mode, alternate screen, mouse capture, and focus-change
//! reporting, and restores all of it on drop or panic.

use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

/// Static flag to track if raw mode is active (for the panic handler).
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Terminal lifecycle guard.
///
/// Creating one enters raw mode, the alternate screen, focus reporting,
/// and (optionally) mouse capture. Dropping it, or calling
/// [`Tui::restore`], undoes all of that — including on panic, via an
/// installed hook.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse: bool,
    active: bool,
}

impl Tui {
    /// Enter raw mode and set up the terminal.
    ///
    /// `mouse` controls whether mouse capture is enabled; without it
    /// there are no swipe or hover events, but the terminal keeps its
    /// native text selection.
    pub fn new(mouse: bool) -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);

        let mut stdout = io::stdout();
        crossterm::execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
        if mouse {
            crossterm::execute!(stdout, EnableMouseCapture)?;
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            mouse,
            active: true,
        })
    }

    /// The underlying ratatui terminal, for drawing.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal to its original state. After this, drop is a
    /// no-op.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);

            if self.mouse {
                crossterm::execute!(self.terminal.backend_mut(), DisableMouseCapture)?;
            }
            crossterm::execute!(
                self.terminal.backend_mut(),
                DisableFocusChange,
                LeaveAlternateScreen,
            )?;
            disable_raw_mode()?;
            self.terminal.show_cursor()?;
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Best-effort cleanup during drop.
        let _ = self.restore();
    }
}

/// Install a panic hook that restores terminal state before the panic
/// message prints. Installed once.
fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if RAW_MODE_ACTIVE.load(Ordering::SeqCst) {
            let _ = crossterm::execute!(
                io::stdout(),
                DisableMouseCapture,
                DisableFocusChange,
                LeaveAlternateScreen,
            );
            let _ = disable_raw_mode();
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);
        }

        original_hook(panic_info);
    }));
}
