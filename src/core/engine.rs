//! `HeaderEngine` — the stories header as one object the host drives.
//!
//! Per layout pass the host must, in order:
//!
//! 1. start a measurement pass ([`HeaderEngine::begin_measurement`]),
//! 2. report every rendered carousel item's frame ([`HeaderEngine::report_measured_frame`]),
//! 3. report the list content origin ([`HeaderEngine::on_scroll_layout`]),
//! 4. read geometry ([`HeaderEngine::morph_group`], [`HeaderEngine::cluster_layout`]).
//!
//! Geometry in step 4 therefore only sees frames measured in this pass.

use super::catalog::{CatalogChanges, CatalogConfig, StoryCatalog};
use super::frames::FrameAggregator;
use super::geometry::{Point, Rect};
use super::morph::{self, ClusterMetrics, MorphAnchor, MorphGroup};
use super::scroll::ScrollOffsetTracker;
use super::source::StorySource;
use super::story::StoryId;
use super::transition::{Commit, TransitionConfig, TransitionMachine, ViewState};

/// Horizontal gap between carousel items, in units.
pub const INTER_STORY_SPACING: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct HeaderEngine {
    catalog: StoryCatalog,
    frames: FrameAggregator,
    scroll: ScrollOffsetTracker,
    machine: TransitionMachine,
    metrics: ClusterMetrics,
    carousel_width: f64,
}

impl HeaderEngine {
    pub fn new(transition: TransitionConfig, metrics: ClusterMetrics) -> Self {
        Self {
            catalog: StoryCatalog::new(),
            frames: FrameAggregator::new(),
            scroll: ScrollOffsetTracker::new(),
            machine: TransitionMachine::new(transition),
            metrics,
            carousel_width: 0.0,
        }
    }

    // ── story catalog ───────────────────────────────────────────

    pub fn reload_data(&mut self, config: CatalogConfig, source: &dyn StorySource) {
        self.catalog.reload(config, source);
    }

    pub fn reconfigure(&mut self, config: CatalogConfig, source: &dyn StorySource) -> CatalogChanges {
        self.catalog.reconfigure(config, source)
    }

    pub fn set_leading_visible(&mut self, id: Option<StoryId>) {
        self.catalog.set_leading_visible(id);
    }

    pub fn reset_leading_visible(&mut self) {
        self.catalog.reset_leading_visible();
    }

    pub fn catalog(&self) -> &StoryCatalog {
        &self.catalog
    }

    // ── measurement ─────────────────────────────────────────────

    /// Drop the previous pass's frames.  Items that are no longer realised
    /// would otherwise keep positions from an older carousel scroll.
    pub fn begin_measurement(&mut self) {
        self.frames.clear();
    }

    /// Frame of a rendered carousel item, in carousel-local units.
    pub fn report_measured_frame(&mut self, id: impl Into<StoryId>, rect: Rect) {
        self.frames.report(id, rect);
    }

    /// Width of the carousel viewport; its height is the carousel height.
    pub fn set_carousel_width(&mut self, width: f64) {
        self.carousel_width = width.max(0.0);
    }

    // ── scrolling ───────────────────────────────────────────────

    /// Feed the list content origin.  Returns `None` when the rounded delta
    /// did not move, otherwise what the state machine committed.
    pub fn on_scroll_layout(&mut self, origin: Point) -> Option<Commit> {
        let delta_y = self.scroll.on_layout(origin)?;
        tracing::debug!(delta_y, "scroll delta changed");
        Some(self.machine.apply(delta_y))
    }

    pub fn delta_y(&self) -> f64 {
        self.scroll.delta_y()
    }

    // ── read-only geometry ──────────────────────────────────────

    pub fn current_view_state(&self) -> ViewState {
        self.machine.state()
    }

    pub fn transition_config(&self) -> &TransitionConfig {
        self.machine.config()
    }

    pub fn cluster_metrics(&self) -> &ClusterMetrics {
        &self.metrics
    }

    /// Centre of mini slot `index` for the current progress (fully fanned
    /// out while in `Stories`).
    pub fn cluster_layout(&self, index: usize) -> Point {
        let progress = self.current_view_state().progress().unwrap_or(0.0);
        self.metrics.position(index, progress)
    }

    pub fn cluster_width(&self) -> f64 {
        self.metrics.width(self.catalog.mini_stories().len())
    }

    pub fn carousel_viewport(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.carousel_width,
            self.machine.config().carousel_height(),
        )
    }

    /// The rigid group sliding toward the header.  Only exists mid-scroll
    /// while still in `Stories`; members unknown to the catalog are dropped.
    pub fn morph_group(&self) -> Option<MorphGroup> {
        let delta_y = self.delta_y();
        if self.current_view_state().is_mini() || delta_y == 0.0 || self.catalog.is_empty() {
            return None;
        }
        let mut group = morph::morph_group(
            &self.frames,
            &self.carousel_viewport(),
            delta_y,
            INTER_STORY_SPACING,
        )?;
        group.members.retain(|(id, _)| self.catalog.story(id).is_some());
        Some(group)
    }

    pub fn morph_anchor(&self) -> Option<MorphAnchor> {
        self.morph_group().map(|g| g.anchor)
    }
}

impl Default for HeaderEngine {
    fn default() -> Self {
        Self::new(TransitionConfig::default(), ClusterMetrics::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::MockSource;

    const LIST_TOP: f64 = 110.0;

    fn engine(stories_count: usize, mini_stories_bound: usize) -> HeaderEngine {
        let mut engine = HeaderEngine::default();
        engine.reload_data(
            CatalogConfig {
                stories_count,
                mini_stories_bound,
            },
            &MockSource,
        );
        engine.set_carousel_width(400.0);
        engine
    }

    fn scroll_to(engine: &mut HeaderEngine, delta: f64) -> Option<Commit> {
        engine.on_scroll_layout(Point::new(0.0, LIST_TOP - delta))
    }

    fn assert_progress(state: ViewState, expected: f64) {
        match state {
            ViewState::MiniStories { progress } => {
                assert!((progress - expected).abs() < 1e-3, "{progress} != {expected}")
            }
            ViewState::Stories => panic!("expected mini stories, got {state:?}"),
        }
    }

    #[test]
    fn scroll_down_and_back_scenario() {
        let mut engine = engine(5, 3);

        assert_eq!(scroll_to(&mut engine, 0.0), None);
        assert_eq!(engine.current_view_state(), ViewState::Stories);

        assert_eq!(scroll_to(&mut engine, 20.0), Some(Commit::Unchanged));
        assert_eq!(engine.current_view_state(), ViewState::Stories);

        let commit = scroll_to(&mut engine, 33.0).unwrap();
        assert!(commit.is_animated());
        assert_eq!(engine.current_view_state(), ViewState::MiniStories { progress: 0.0 });

        let commit = scroll_to(&mut engine, 80.0).unwrap();
        assert!(!commit.is_animated());
        assert_progress(engine.current_view_state(), 0.6104);

        let commit = scroll_to(&mut engine, 110.0).unwrap();
        assert!(!commit.is_animated());
        assert_eq!(engine.current_view_state(), ViewState::MiniStories { progress: 1.0 });

        let commit = scroll_to(&mut engine, 60.0).unwrap();
        assert!(!commit.is_animated());
        assert_progress(engine.current_view_state(), 0.3506);

        let commit = scroll_to(&mut engine, 0.0).unwrap();
        assert!(commit.is_animated());
        assert_eq!(engine.current_view_state(), ViewState::Stories);
    }

    #[test]
    fn repeated_origin_is_gated() {
        let mut engine = engine(5, 3);
        scroll_to(&mut engine, 0.0);
        assert!(scroll_to(&mut engine, 50.0).is_some());
        assert_eq!(scroll_to(&mut engine, 50.0), None);
        assert_eq!(scroll_to(&mut engine, 50.3), None);
    }

    #[test]
    fn morph_group_only_mid_scroll_in_stories() {
        let mut engine = engine(5, 3);
        for i in 0..5 {
            let x = 10.0 + i as f64 * 90.0;
            engine.report_measured_frame(format!("story_{i}"), Rect::new(x, 5.0, 80.0, 100.0));
        }
        scroll_to(&mut engine, 0.0);
        assert_eq!(engine.morph_group(), None);

        scroll_to(&mut engine, 20.0);
        let group = engine.morph_group().unwrap();
        // story_4 starts at x = 370 and still overlaps the 400-wide viewport.
        assert_eq!(group.members.len(), 5);
        assert_eq!(engine.morph_anchor().map(|a| a.height), Some(90.0));

        scroll_to(&mut engine, 40.0);
        assert_eq!(engine.morph_group(), None);
    }

    #[test]
    fn morph_group_drops_ids_outside_catalog() {
        let mut engine = engine(2, 3);
        engine.report_measured_frame("story_0", Rect::new(10.0, 5.0, 80.0, 100.0));
        engine.report_measured_frame("story_7", Rect::new(100.0, 5.0, 80.0, 100.0));
        scroll_to(&mut engine, 0.0);
        scroll_to(&mut engine, 10.0);
        let group = engine.morph_group().unwrap();
        assert_eq!(group.members.len(), 1);
        assert_eq!(group.members[0].0, "story_0");
    }

    #[test]
    fn new_measurement_pass_forgets_old_frames() {
        let mut engine = engine(5, 3);
        engine.report_measured_frame("story_0", Rect::new(10.0, 5.0, 80.0, 100.0));
        engine.report_measured_frame("story_1", Rect::new(100.0, 5.0, 80.0, 100.0));
        engine.begin_measurement();
        engine.report_measured_frame("story_3", Rect::new(10.0, 5.0, 80.0, 100.0));
        scroll_to(&mut engine, 0.0);
        scroll_to(&mut engine, 10.0);
        let ids: Vec<String> = engine
            .morph_group()
            .unwrap()
            .members
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, ["story_3"]);
    }

    #[test]
    fn empty_catalog_never_morphs() {
        let mut engine = engine(0, 3);
        engine.report_measured_frame("story_0", Rect::new(10.0, 5.0, 80.0, 100.0));
        scroll_to(&mut engine, 0.0);
        scroll_to(&mut engine, 10.0);
        assert_eq!(engine.morph_group(), None);
        assert_eq!(engine.cluster_width(), 16.0);
    }

    #[test]
    fn cluster_layout_follows_progress() {
        let mut engine = engine(5, 3);
        assert_eq!(engine.cluster_layout(2), Point::new(32.0, 24.0));
        scroll_to(&mut engine, 0.0);
        scroll_to(&mut engine, 110.0);
        assert_eq!(engine.cluster_layout(2), Point::new(32.0, 8.0));
        assert_eq!(engine.cluster_width(), 40.0);
    }
}
