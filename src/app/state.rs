//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect as CellRect;

use crate::config::AppConfig;
use crate::core::geometry::Point;
use crate::ui::carousel::CarouselLayout;
use crate::ui::conversations::ROW_HEIGHT;
use crate::ui::layout::ChatsLayout;
use crate::ui::matched::MatchedGeometry;
use crate::ui::scene::{Scene, SceneInput};
use crate::ui::units::{area_to_units, UNITS_PER_ROW};

use super::model::{ChatsModel, DebugConfig};

/// Height of one conversation row, in units.
const CONVERSATION_ROW_UNITS: f64 = ROW_HEIGHT as f64 * UNITS_PER_ROW;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Chats,
    DebugMenu,
}

/// Top-level application state.
pub struct AppState {
    pub model: ChatsModel,
    /// How far the list content has scrolled up, in units.
    pub list_scroll: f64,
    /// Leading (snapped) story of the carousel.
    pub carousel_index: usize,
    pub matched: MatchedGeometry,
    /// Output of the last layout pass.
    pub scene: Scene,
    /// Regions of the last layout pass.
    pub layout: ChatsLayout,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// User-configurable keybindings and animation tuning.
    pub config: AppConfig,
    /// Currently highlighted item in the debug menu.
    pub debug_selected: usize,
}

impl AppState {
    pub fn new(model: ChatsModel, config: AppConfig) -> Self {
        Self {
            model,
            list_scroll: 0.0,
            carousel_index: 0,
            matched: MatchedGeometry::new(config.animation_speed),
            scene: Scene::default(),
            layout: ChatsLayout::from_area(CellRect::default()),
            should_quit: false,
            status_message: None,
            active_view: ActiveView::default(),
            config,
            debug_selected: 0,
        }
    }

    // ── layout pass ─────────────────────────────────────────────

    /// Measure, feed the engine, and compose the scene for `area`.
    pub fn layout_pass(&mut self, area: CellRect) {
        self.layout = ChatsLayout::from_area(area);
        self.list_scroll = self.list_scroll.clamp(0.0, self.max_list_scroll());
        let list = area_to_units(self.layout.list_area);
        let engine = &mut self.model.engine;

        engine.set_carousel_width(list.width());
        let carousel = CarouselLayout::new(
            list.width(),
            engine.catalog().stories().len(),
            self.carousel_index,
        );
        self.carousel_index = carousel.scroll_index;
        engine.begin_measurement();
        for index in carousel.realised_range() {
            let Some(story) = engine.catalog().stories().get(index) else {
                continue;
            };
            let id = story.story_id.clone();
            engine.report_measured_frame(id, carousel.item_frame(index));
        }

        // Origin of the first conversation row: the carousel sits above it.
        let carousel_height = engine.transition_config().carousel_height();
        let origin = Point::new(list.min_x(), list.min_y() + carousel_height - self.list_scroll);
        if let Some(commit) = engine.on_scroll_layout(origin) {
            if commit.is_animated() {
                self.matched.begin();
            }
        }

        self.scene = Scene::compose(
            SceneInput {
                engine: &self.model.engine,
                layout: &self.layout,
                carousel: &carousel,
                demystify: self.model.debug_config().demystify_transitions,
            },
            &mut self.matched,
        );
    }

    // ── list scrolling ──────────────────────────────────────────

    fn content_height(&self) -> f64 {
        self.model.engine.transition_config().carousel_height()
            + self.model.conversations().len() as f64 * CONVERSATION_ROW_UNITS
    }

    pub fn max_list_scroll(&self) -> f64 {
        let viewport = area_to_units(self.layout.list_area).height();
        (self.content_height() - viewport).max(0.0)
    }

    fn scroll_step(&self) -> f64 {
        if self.model.debug_config().snap_to_rows {
            CONVERSATION_ROW_UNITS
        } else {
            UNITS_PER_ROW
        }
    }

    /// Scroll by `steps` rows (or lines); positive moves content up.
    pub fn scroll_list(&mut self, steps: i32) {
        let target = self.list_scroll + f64::from(steps) * self.scroll_step();
        self.list_scroll = target.clamp(0.0, self.max_list_scroll());
    }

    pub fn scroll_to_top(&mut self) {
        self.list_scroll = 0.0;
    }

    /// Whole rows of list content hidden above the list area.
    pub fn list_scroll_rows(&self) -> u16 {
        (self.list_scroll / UNITS_PER_ROW).round() as u16
    }

    // ── carousel ────────────────────────────────────────────────

    /// Snap the carousel `steps` stories forward (or back) and record the
    /// newly leading story.
    pub fn step_carousel(&mut self, steps: isize) {
        let count = self.model.engine.catalog().stories().len();
        let max = CarouselLayout::max_scroll_index(count);
        let index = self.carousel_index.saturating_add_signed(steps).min(max);
        if index == self.carousel_index {
            return;
        }
        self.carousel_index = index;
        let id = self
            .model
            .engine
            .catalog()
            .stories()
            .get(index)
            .map(|story| story.story_id.clone());
        self.model.engine.set_leading_visible(id);
    }

    // ── debug menu ──────────────────────────────────────────────

    pub fn apply_debug_config(&mut self, config: DebugConfig) {
        let changes = self.model.set_debug_config(config);
        if changes.leading_reset {
            self.carousel_index = 0;
        }
        self.list_scroll = self.list_scroll.clamp(0.0, self.max_list_scroll());
        tracing::info!(?config, ?changes, "debug config applied");
    }

    // ── animation ───────────────────────────────────────────────

    /// Advance the running animation.  Returns `true` while frames are still
    /// needed.
    pub fn tick(&mut self) -> bool {
        let animating = self.matched.is_animating();
        self.matched.tick();
        animating
    }
}
