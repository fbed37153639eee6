//! Scroll offset tracker for the conversation list.
//!
//! The host reports the origin of the list content on every layout pass.  The
//! first report seeds the initial origin; later ones move `current`.  Only a
//! change of the *rounded* delta is surfaced, which keeps sub-unit layout
//! jitter from re-running the transition machine.

use super::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffset {
    pub initial: Point,
    pub current: Point,
}

impl ScrollOffset {
    /// Positive when the content has moved up (scrolled down).  Unclamped.
    pub fn delta_y(&self) -> f64 {
        self.initial.y - self.current.y
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollOffsetTracker {
    offset: Option<ScrollOffset>,
}

impl ScrollOffsetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a layout origin.  Returns the new rounded delta when it differs
    /// from the previous one, `None` otherwise.
    pub fn on_layout(&mut self, origin: Point) -> Option<f64> {
        let before = self.delta_y();
        match self.offset.as_mut() {
            Some(offset) => offset.current = origin,
            None => {
                self.offset = Some(ScrollOffset {
                    initial: origin,
                    current: origin,
                })
            }
        }
        let after = self.delta_y();
        (after != before).then_some(after)
    }

    /// Rounded delta, or 0 before the first layout.
    pub fn delta_y(&self) -> f64 {
        self.offset.map_or(0.0, |o| o.delta_y()).round()
    }

    pub fn offset(&self) -> Option<ScrollOffset> {
        self.offset
    }
}
