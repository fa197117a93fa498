//! Swipe gesture recognition for pointer drags.
//!
//! A drag is classified as a horizontal swipe only when the horizontal
//! displacement dominates the vertical one and exceeds a minimum
//! distance. Anything else is discarded with no state change.

/// Minimum horizontal displacement for a drag to count as a swipe,
/// in event-source coordinate units.
pub const MIN_SWIPE_DISTANCE: i32 = 50;

/// Outcome of a completed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Drag moved leftward (negative delta-x): navigate to the next slide
    Left,
    /// Drag moved rightward (positive delta-x): navigate to the previous slide
    Right,
}

/// Transient capture state for one pointer gesture.
///
/// `begin` records the start point, `update` claims the gesture as
/// horizontal once |dx| > |dy| (the point at which a browser would
/// suppress scrolling), and `finish` classifies and discards it.
#[derive(Debug)]
pub struct SwipeTracker {
    min_distance: i32,
    origin: Option<(i32, i32)>,
    claimed: bool,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(MIN_SWIPE_DISTANCE)
    }
}

impl SwipeTracker {
    pub fn new(min_distance: i32) -> Self {
        Self {
            min_distance,
            origin: None,
            claimed: false,
        }
    }

    /// Record the start of a gesture, replacing any unfinished one.
    pub fn begin(&mut self, x: i32, y: i32) {
        self.origin = Some((x, y));
        self.claimed = false;
    }

    /// Track movement. Returns `true` while the gesture is claimed as a
    /// horizontal swipe, i.e. its horizontal delta dominates.
    pub fn update(&mut self, x: i32, y: i32) -> bool {
        if let Some((sx, sy)) = self.origin {
            if (x - sx).abs() > (y - sy).abs() {
                self.claimed = true;
            }
        }
        self.claimed
    }

    /// Whether a gesture is being tracked right now.
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Complete the gesture and classify it. Capture state is discarded
    /// either way.
    pub fn finish(&mut self, x: i32, y: i32) -> Option<Swipe> {
        let (sx, sy) = self.origin.take()?;
        self.claimed = false;

        let dx = x - sx;
        let dy = y - sy;
        if dx.abs() > dy.abs() && dx.abs() > self.min_distance {
            if dx > 0 {
                Some(Swipe::Right)
            } else {
                Some(Swipe::Left)
            }
        } else {
            None
        }
    }

    /// Abandon the current gesture without classifying it.
    pub fn cancel(&mut self) {
        self.origin = None;
        self.claimed = false;
    }
}
