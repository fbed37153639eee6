//! Transition geometry — where avatars go while the header morphs.
//!
//! Two regimes:
//!
//! * **Mini cluster** — steady layout of the small overlapping avatars next
//!   to the title, fanned out vertically until `progress` reaches 1.
//! * **Morph group** — before the threshold flips the mode, every carousel
//!   item still on screen is drawn as one rigid row anchored at a single
//!   shared point, contracting toward the header as the list scrolls.

use super::error::ConfigError;
use super::frames::FrameAggregator;
use super::geometry::{Point, Rect, Size};
use super::story::StoryId;

// ───────────────────────────────────────── mini cluster ──────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterMetrics {
    size: f64,
    h_step: f64,
    v_step: f64,
}

impl ClusterMetrics {
    pub fn new(size: f64, h_step: f64, v_step: f64) -> Result<Self, ConfigError> {
        for (name, value) in [("mini avatar size", size), ("horizontal step", h_step)] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveMetric { name, value });
            }
        }
        // A flat cluster (no fan-out) is fine.
        if !(v_step >= 0.0) {
            return Err(ConfigError::NonPositiveMetric {
                name: "vertical step",
                value: v_step,
            });
        }
        Ok(Self { size, h_step, v_step })
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Centre of the avatar in slot `index` for collapse `progress`.
    pub fn position(&self, index: usize, progress: f64) -> Point {
        let i = index as f64;
        Point::new(
            self.size / 2.0 + i * self.h_step,
            self.size / 2.0 + i * self.v_step * (1.0 - progress),
        )
    }

    /// Square frame of the avatar in slot `index`, cluster-local.
    pub fn frame(&self, index: usize, progress: f64) -> Rect {
        Rect::centered(
            self.position(index, progress),
            Size::new(self.size, self.size),
        )
    }

    /// Width of a cluster of `count` avatars.  Never smaller than one avatar.
    pub fn width(&self, count: usize) -> f64 {
        self.size + self.h_step * count.saturating_sub(1) as f64
    }

    /// Height the cluster occupies at `progress` (fan-out included).
    pub fn height(&self, count: usize, progress: f64) -> f64 {
        self.size + self.v_step * count.saturating_sub(1) as f64 * (1.0 - progress)
    }
}

impl Default for ClusterMetrics {
    fn default() -> Self {
        Self {
            size: 16.0,
            h_step: 12.0,
            v_step: 8.0,
        }
    }
}

// ───────────────────────────────────────── morph group ───────

/// Shared target of the whole carousel during the pre-threshold slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphAnchor {
    /// Centre of the group, in the carousel's coordinate space.
    pub x: f64,
    pub y: f64,
    /// Height available to the group.
    pub height: f64,
    /// Natural (unscaled) width of the group: frames plus spacing.
    pub estimated_width: f64,
}

/// The items that move together, left to right, and where they are anchored.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphGroup {
    pub anchor: MorphAnchor,
    pub members: Vec<(StoryId, Rect)>,
}

/// Frames that overlap `viewport`, sorted by left edge.  The sort is stable,
/// so equal x keeps insertion order.
pub fn visible_frames(frames: &FrameAggregator, viewport: &Rect) -> Vec<(StoryId, Rect)> {
    let mut visible: Vec<(StoryId, Rect)> = frames
        .snapshot()
        .iter()
        .filter(|(_, rect)| viewport.intersects(rect))
        .cloned()
        .collect();
    visible.sort_by(|a, b| a.1.min_x().total_cmp(&b.1.min_x()));
    visible
}

/// Compute the morph group for scroll `delta_y`.  `viewport` is the carousel's
/// own bounds; its height is the full carousel height.  Returns `None` when no
/// measured frame is on screen.
pub fn morph_group(
    frames: &FrameAggregator,
    viewport: &Rect,
    delta_y: f64,
    spacing: f64,
) -> Option<MorphGroup> {
    let members = visible_frames(frames, viewport);
    let first = members.first()?.1;

    let gaps = members.len().saturating_sub(1) as f64;
    let estimated_width = members.iter().map(|(_, r)| r.width()).sum::<f64>() + spacing * gaps;
    let viewport_height = viewport.height();

    let anchor = MorphAnchor {
        x: estimated_width / 2.0 + first.min_x(),
        y: viewport_height / 2.0 + delta_y / 2.0,
        height: (viewport_height - delta_y).max(0.0),
        estimated_width,
    };
    Some(MorphGroup { anchor, members })
}

impl MorphGroup {
    /// Per-member rectangles laid out as one row around the anchor, scaled
    /// uniformly so the group fits `anchor.height`.  `full_height` is the
    /// height the group had at `delta_y == 0`.
    pub fn member_frames(&self, full_height: f64, spacing: f64) -> Vec<(StoryId, Rect)> {
        let scale = if full_height > 0.0 {
            (self.anchor.height / full_height).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let scaled_width = self.members.iter().map(|(_, r)| r.width() * scale).sum::<f64>()
            + spacing * self.members.len().saturating_sub(1) as f64;

        let mut x = self.anchor.x - scaled_width / 2.0;
        self.members
            .iter()
            .map(|(id, rect)| {
                let width = rect.width() * scale;
                let height = rect.height() * scale;
                let center_y = self.anchor.y + (rect.center().y - full_height / 2.0) * scale;
                let frame = Rect::new(x, center_y - height / 2.0, width, height);
                x += width + spacing;
                (id.clone(), frame)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ITEM: f64 = 80.0;
    const SPACING: f64 = 10.0;
    const HEIGHT: f64 = 110.0;

    /// Carousel with items laid out from `x0`, `ITEM` wide, `SPACING` apart.
    fn carousel(count: usize, x0: f64) -> FrameAggregator {
        let mut frames = FrameAggregator::new();
        for i in 0..count {
            let x = x0 + i as f64 * (ITEM + SPACING);
            frames.report(format!("story_{i}"), Rect::new(x, 5.0, ITEM, 100.0));
        }
        frames
    }

    #[test]
    fn cluster_positions() {
        let metrics = ClusterMetrics::default();
        assert_eq!(metrics.position(0, 0.0), Point::new(8.0, 8.0));
        assert_eq!(metrics.position(2, 0.0), Point::new(32.0, 24.0));
        assert_eq!(metrics.position(2, 0.5), Point::new(32.0, 16.0));
        for i in 0..6 {
            assert_eq!(metrics.position(i, 1.0).y, 8.0);
        }
    }

    #[test]
    fn cluster_width() {
        let metrics = ClusterMetrics::default();
        assert_eq!(metrics.width(0), 16.0);
        assert_eq!(metrics.width(1), 16.0);
        assert_eq!(metrics.width(3), 40.0);
        assert_eq!(metrics.height(3, 0.0), 32.0);
        assert_eq!(metrics.height(3, 1.0), 16.0);
    }

    #[test]
    fn cluster_metrics_validation() {
        assert!(ClusterMetrics::new(0.0, 12.0, 8.0).is_err());
        assert!(ClusterMetrics::new(16.0, -1.0, 8.0).is_err());
        assert!(ClusterMetrics::new(16.0, 12.0, 0.0).is_ok());
    }

    #[test]
    fn group_filters_to_viewport_and_sorts() {
        let mut frames = FrameAggregator::new();
        frames.report("story_2", Rect::new(190.0, 5.0, ITEM, 100.0));
        frames.report("story_0", Rect::new(10.0, 5.0, ITEM, 100.0));
        frames.report("story_1", Rect::new(100.0, 5.0, ITEM, 100.0));
        // Stale entry scrolled far off to the left.
        frames.report("story_9", Rect::new(-500.0, 5.0, ITEM, 100.0));

        let viewport = Rect::new(0.0, 0.0, 200.0, HEIGHT);
        let group = morph_group(&frames, &viewport, 20.0, SPACING).unwrap();
        let ids: Vec<&str> = group.members.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["story_0", "story_1", "story_2"]);
        assert_eq!(group.anchor.estimated_width, 3.0 * ITEM + 2.0 * SPACING);
        assert_eq!(group.anchor.x, 130.0 + 10.0);
        assert_eq!(group.anchor.y, 65.0);
        assert_eq!(group.anchor.height, 90.0);
    }

    #[test]
    fn equal_x_keeps_insertion_order() {
        let mut frames = FrameAggregator::new();
        frames.report("b", Rect::new(10.0, 0.0, 10.0, 10.0));
        frames.report("a", Rect::new(10.0, 0.0, 10.0, 10.0));
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let ids: Vec<String> = visible_frames(&frames, &viewport)
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn nothing_visible_means_no_group() {
        let frames = carousel(3, 1_000.0);
        let viewport = Rect::new(0.0, 0.0, 300.0, HEIGHT);
        assert_eq!(morph_group(&frames, &viewport, 10.0, SPACING), None);
        assert_eq!(morph_group(&FrameAggregator::new(), &viewport, 10.0, SPACING), None);
    }

    #[test]
    fn anchor_at_rest_matches_carousel_center() {
        let frames = carousel(3, 10.0);
        let viewport = Rect::new(0.0, 0.0, 400.0, HEIGHT);
        let group = morph_group(&frames, &viewport, 0.0, SPACING).unwrap();

        let row = Rect::new(10.0, 0.0, 3.0 * ITEM + 2.0 * SPACING, HEIGHT);
        assert_eq!(Point::new(group.anchor.x, group.anchor.y), row.center());
        assert_eq!(group.anchor.height, HEIGHT);

        // Members land exactly on their measured frames: no jump.
        for (id, rect) in group.member_frames(HEIGHT, SPACING) {
            assert_eq!(Some(rect), frames.get(&id));
        }
    }

    #[test]
    fn members_shrink_with_anchor_height() {
        let frames = carousel(2, 10.0);
        let viewport = Rect::new(0.0, 0.0, 400.0, HEIGHT);
        let group = morph_group(&frames, &viewport, 55.0, SPACING).unwrap();
        let members = group.member_frames(HEIGHT, SPACING);
        assert_eq!(members[0].1.width(), ITEM / 2.0);
        assert_eq!(members[0].1.max_x() + SPACING, members[1].1.min_x());
    }

    #[test]
    fn anchor_height_never_negative() {
        let frames = carousel(2, 10.0);
        let viewport = Rect::new(0.0, 0.0, 400.0, HEIGHT);
        let group = morph_group(&frames, &viewport, 300.0, SPACING).unwrap();
        assert_eq!(group.anchor.height, 0.0);
    }

    proptest! {
        #[test]
        fn cluster_width_is_at_least_one_avatar(n in 0usize..1_000) {
            let metrics = ClusterMetrics::default();
            prop_assert!(metrics.width(n) >= metrics.size());
        }
    }
}
