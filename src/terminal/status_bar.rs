//! Status bar showing carousel state at the bottom of the screen.

use crate::carousel::Carousel;

/// Status bar for the bottom line of the screen.
///
/// Shows: autoplay on/off | slide position | active slide title
#[derive(Debug, Clone)]
pub struct StatusBar {
    /// Whether the status bar is visible
    pub visible: bool,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    /// Create a new status bar with default settings (visible).
    pub fn new() -> Self {
        Self { visible: true }
    }

    /// Create a status bar with the specified visibility.
    pub fn with_visibility(visible: bool) -> Self {
        Self { visible }
    }

    /// Toggle visibility.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Format the status bar text from the carousel state.
    ///
    /// Format: " autoplay:on/off | slide i/N | title "
    pub fn format(&self, carousel: &Carousel) -> String {
        let title = carousel
            .deck()
            .get(carousel.index())
            .map(|s| s.title.as_str())
            .unwrap_or("");
        format!(
            " {} | slide {}/{} | {} ",
            if carousel.autoplay_running() {
                "autoplay:on"
            } else {
                "autoplay:off"
            },
            carousel.index() + 1,
            carousel.len(),
            title,
        )
    }
}
