//! Matched geometry with exponential ease-out.
//!
//! Every avatar is placed under an identity (its story id).  When an
//! animated commit starts, the rectangles drawn in the previous frame become
//! the starting points; each frame an identity that has a starting point is
//! drawn part-way between it and its new target.  The remaining distance
//! decays toward zero every tick, so motion decelerates visibly.

use std::collections::HashMap;

use crate::core::geometry::Rect;

#[derive(Debug, Clone)]
pub struct MatchedGeometry {
    /// Rects drawn in the last completed frame.
    last: HashMap<String, Rect>,
    /// Rects being drawn in the current frame.
    next: HashMap<String, Rect>,
    /// Starting points of the running animation.
    from: HashMap<String, Rect>,
    /// 1.0 at the start of an animation, 0.0 when settled.
    remaining: f64,
    /// Damping: `remaining *= (1 - speed)` each tick.
    speed: f64,
}

impl MatchedGeometry {
    pub fn new(speed: f64) -> Self {
        Self {
            last: HashMap::new(),
            next: HashMap::new(),
            from: HashMap::new(),
            remaining: 0.0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Start animating from whatever was on screen last frame.  Supersedes a
    /// running animation.
    pub fn begin(&mut self) {
        self.from = self.last.clone();
        self.remaining = 1.0;
    }

    /// Decay toward the targets.  Call once per tick.
    pub fn tick(&mut self) {
        self.remaining *= 1.0 - self.speed;
        if self.remaining < 0.02 {
            self.remaining = 0.0;
            self.from.clear();
        }
    }

    pub fn is_animating(&self) -> bool {
        self.remaining > 0.0
    }

    /// Eased completion of the running animation, in [0, 1].
    pub fn progress(&self) -> f64 {
        1.0 - self.remaining
    }

    /// Where to draw `id` this frame given its layout `target`.
    pub fn place(&mut self, id: &str, target: Rect) -> Rect {
        let drawn = match self.from.get(id) {
            Some(from) if self.is_animating() => from.lerp(&target, self.progress()),
            _ => target,
        };
        self.next.insert(id.to_string(), drawn);
        drawn
    }

    /// Close the frame: what was placed becomes the new "last".
    pub fn end_frame(&mut self) {
        self.last = std::mem::take(&mut self.next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(matched: &mut MatchedGeometry, id: &str, target: Rect) -> Rect {
        let drawn = matched.place(id, target);
        matched.end_frame();
        drawn
    }

    #[test]
    fn without_animation_targets_are_drawn_as_is() {
        let mut matched = MatchedGeometry::new(0.5);
        let target = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert_eq!(frame(&mut matched, "story_0", target), target);
        assert!(!matched.is_animating());
    }

    #[test]
    fn animation_slides_from_previous_frame() {
        let mut matched = MatchedGeometry::new(0.5);
        let start = Rect::new(0.0, 0.0, 80.0, 80.0);
        let end = Rect::new(100.0, 0.0, 16.0, 16.0);
        frame(&mut matched, "story_0", start);

        matched.begin();
        assert_eq!(frame(&mut matched, "story_0", end), start);

        matched.tick();
        let mid = frame(&mut matched, "story_0", end);
        assert_eq!(mid, start.lerp(&end, 0.5));

        for _ in 0..10 {
            matched.tick();
        }
        assert!(!matched.is_animating());
        assert_eq!(frame(&mut matched, "story_0", end), end);
    }

    #[test]
    fn unknown_identity_appears_in_place() {
        let mut matched = MatchedGeometry::new(0.5);
        frame(&mut matched, "story_0", Rect::new(0.0, 0.0, 10.0, 10.0));
        matched.begin();
        let target = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert_eq!(frame(&mut matched, "none_2", target), target);
    }

    #[test]
    fn new_begin_supersedes_running_animation() {
        let mut matched = MatchedGeometry::new(0.5);
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(100.0, 0.0, 10.0, 10.0);
        frame(&mut matched, "s", a);
        matched.begin();
        matched.tick();
        let mid = frame(&mut matched, "s", b);

        // Reverse mid-flight: the new animation starts where we are now.
        matched.begin();
        assert_eq!(frame(&mut matched, "s", a), mid);
    }
}
