//! Per-frame composition of every avatar on screen.
//!
//! The engine hands out geometry in local coordinates (carousel-local for
//! the morph group, cluster-local for the mini avatars).  Composition moves
//! everything into screen units and routes each placement through the
//! matched-geometry animator so items keep their identity across a mode flip.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect as CellRect},
    widgets::{Paragraph, Widget},
};

use crate::core::engine::{HeaderEngine, INTER_STORY_SPACING};
use crate::core::geometry::{Point, Rect};
use crate::core::story::Story;
use crate::core::transition::ViewState;

use super::avatar::{AvatarKind, StoryAvatar};
use super::carousel::{CarouselLayout, ITEM_HEIGHT, VERTICAL_PADDING};
use super::layout::ChatsLayout;
use super::matched::MatchedGeometry;
use super::theme::Theme;
use super::units::{area_to_units, to_cells, UNITS_PER_COL, UNITS_PER_ROW};

/// Gap between the mini cluster and the title.
const TITLE_SPACING: f64 = 4.0;
pub const TITLE: &str = "Chats";

/// Bottom padding of the header box.
const HEADER_PADDING_BOTTOM: f64 = UNITS_PER_ROW;

#[derive(Debug, Clone, PartialEq)]
pub struct AvatarDraw {
    pub story: Story,
    /// Screen units.
    pub rect: Rect,
    pub dimmed: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    /// Full carousel, clipped to the list.
    pub carousel: Vec<AvatarDraw>,
    /// Morph group; drawn over header and list.
    pub morph: Vec<AvatarDraw>,
    /// Mini cluster; drawn above the header.
    pub cluster: Vec<AvatarDraw>,
    /// Top-left of the carousel row, screen units.
    pub carousel_origin: Point,
    /// Left edge of the title, screen units.
    pub title_x: f64,
    /// Centre line of the header content, screen units.
    pub title_y: f64,
    pub header_opaque: bool,
    pub stories_empty: bool,
}

pub struct SceneInput<'a> {
    pub engine: &'a HeaderEngine,
    pub layout: &'a ChatsLayout,
    pub carousel: &'a CarouselLayout,
    pub demystify: bool,
}

impl Scene {
    pub fn compose(input: SceneInput<'_>, matched: &mut MatchedGeometry) -> Scene {
        let SceneInput {
            engine,
            layout,
            carousel,
            demystify,
        } = input;
        let catalog = engine.catalog();
        let state = engine.current_view_state();
        let delta_y = engine.delta_y();

        let list = area_to_units(layout.list_area);
        let header = area_to_units(layout.header_area);
        let carousel_origin = Point::new(list.min_x(), list.min_y() - delta_y);
        let to_screen = |r: Rect| {
            Rect::new(
                r.min_x() + carousel_origin.x,
                r.min_y() + carousel_origin.y,
                r.width(),
                r.height(),
            )
        };

        let mut scene = Scene {
            carousel_origin,
            header_opaque: state == ViewState::MiniStories { progress: 1.0 },
            stories_empty: catalog.is_empty(),
            ..Scene::default()
        };

        // ── header: [cluster] + title, centred as one row ──────────
        let minis = catalog.mini_stories();
        let progress = state.progress();
        let show_cluster = progress.is_some() && !minis.is_empty();
        let metrics = engine.cluster_metrics();
        let cluster_width = if show_cluster {
            engine.cluster_width() + TITLE_SPACING
        } else {
            0.0
        };
        let title_width = TITLE.len() as f64 * UNITS_PER_COL;
        let row_left = header.center().x - (cluster_width + title_width) / 2.0;
        let content_height = header.height() - HEADER_PADDING_BOTTOM;
        scene.title_y = header.min_y() + content_height / 2.0;
        scene.title_x = row_left + cluster_width;

        // ── full carousel ──────────────────────────────────────────
        let at_rest = delta_y == 0.0;
        if at_rest || demystify {
            for index in carousel.realised_range() {
                let Some(story) = catalog.stories().get(index) else {
                    continue;
                };
                let target = to_screen(carousel.item_frame(index));
                // Only the resting carousel is an identity source; while
                // demystifying mid-scroll the morph group owns the ids.
                let rect = if at_rest {
                    matched.place(&story.story_id, target)
                } else {
                    target
                };
                scene.carousel.push(AvatarDraw {
                    story: story.clone(),
                    rect,
                    dimmed: demystify,
                });
            }
        }

        // ── morph group (Stories, mid-scroll) ──────────────────────
        if let Some(group) = engine.morph_group() {
            let full_height = engine.transition_config().carousel_height();
            for (id, frame) in group.member_frames(full_height, INTER_STORY_SPACING) {
                let Some(story) = catalog.story(&id) else {
                    continue;
                };
                let rect = matched.place(&id, to_screen(frame));
                scene.morph.push(AvatarDraw {
                    story: story.clone(),
                    rect,
                    dimmed: false,
                });
            }
        }

        // ── mini cluster (MiniStories) ─────────────────────────────
        if let (true, Some(progress)) = (show_cluster, progress) {
            let cluster_top = scene.title_y - metrics.size() / 2.0;
            for (index, story) in minis.iter().enumerate() {
                let local = metrics.frame(index, progress);
                let target = Rect::new(
                    row_left + local.min_x(),
                    cluster_top + local.min_y(),
                    local.width(),
                    local.height(),
                );
                let rect = matched.place(&catalog.mini_slot_identity(index), target);
                scene.cluster.push(AvatarDraw {
                    story: story.clone(),
                    rect,
                    dimmed: false,
                });
            }
        }

        matched.end_frame();
        scene
    }

    // ── rendering ──────────────────────────────────────────────

    /// Full carousel (or its empty state), clipped to the list.
    pub fn render_carousel(&self, list_area: CellRect, buf: &mut Buffer) {
        if self.stories_empty {
            let row = ((self.carousel_origin.y + ITEM_CENTER_Y) / UNITS_PER_ROW).floor() as i32;
            if row >= i32::from(list_area.top()) && row < i32::from(list_area.bottom()) {
                Paragraph::new("No stories 😰")
                    .style(Theme::empty_state_style())
                    .alignment(Alignment::Center)
                    .render(
                        CellRect {
                            y: row as u16,
                            height: 1,
                            ..list_area
                        },
                        buf,
                    );
            }
            return;
        }
        render_avatars(&self.carousel, AvatarKind::Carousel, list_area, buf);
    }

    /// Morph group and mini cluster.  `clip` is everything above the status bar.
    pub fn render_floating(&self, clip: CellRect, buf: &mut Buffer) {
        render_avatars(&self.morph, AvatarKind::Carousel, clip, buf);
        render_avatars(&self.cluster, AvatarKind::Mini, clip, buf);
    }
}

/// Vertical centre of a carousel item, carousel-local.
const ITEM_CENTER_Y: f64 = VERTICAL_PADDING + ITEM_HEIGHT / 2.0;

fn render_avatars(draws: &[AvatarDraw], kind: AvatarKind, clip: CellRect, buf: &mut Buffer) {
    for draw in draws {
        let Some(cells) = to_cells(&draw.rect, clip) else {
            continue;
        };
        StoryAvatar::new(&draw.story, kind)
            .dimmed(draw.dimmed)
            .render(cells, buf);
    }
}
