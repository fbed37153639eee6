//! Stories carousel geometry — where each full-size story sits inside the
//! carousel row, and which items are realised (and therefore measured) in a
//! layout pass.

use std::ops::Range;

use crate::core::engine::INTER_STORY_SPACING;
use crate::core::geometry::Rect;

pub const HORIZONTAL_PADDING: f64 = 10.0;
pub const VERTICAL_PADDING: f64 = 5.0;
/// Avatar plus author name.
pub const ITEM_WIDTH: f64 = 80.0;
pub const ITEM_HEIGHT: f64 = 100.0;

const ITEM_STRIDE: f64 = ITEM_WIDTH + INTER_STORY_SPACING;

/// Carousel row for `count` stories scrolled so that story `scroll_index`
/// is the leading one.  All coordinates are carousel-local units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselLayout {
    pub viewport_width: f64,
    pub count: usize,
    pub scroll_index: usize,
}

impl CarouselLayout {
    pub fn new(viewport_width: f64, count: usize, scroll_index: usize) -> Self {
        Self {
            viewport_width,
            count,
            scroll_index: scroll_index.min(Self::max_scroll_index(count)),
        }
    }

    /// Last index the carousel can snap to.
    pub fn max_scroll_index(count: usize) -> usize {
        count.saturating_sub(1)
    }

    pub fn content_width(&self) -> f64 {
        if self.count == 0 {
            return 2.0 * HORIZONTAL_PADDING;
        }
        2.0 * HORIZONTAL_PADDING + self.count as f64 * ITEM_STRIDE - INTER_STORY_SPACING
    }

    /// Content narrower than the viewport is centred.
    fn centering_offset(&self) -> f64 {
        ((self.viewport_width - self.content_width()) / 2.0).max(0.0)
    }

    fn scroll_x(&self) -> f64 {
        self.scroll_index as f64 * ITEM_STRIDE
    }

    pub fn item_frame(&self, index: usize) -> Rect {
        let x = self.centering_offset() + HORIZONTAL_PADDING + index as f64 * ITEM_STRIDE
            - self.scroll_x();
        Rect::new(x, VERTICAL_PADDING, ITEM_WIDTH, ITEM_HEIGHT)
    }

    /// Items a lazy stack would have realised: the visible ones plus one
    /// viewport's worth on either side.  Items that just left the screen keep
    /// reporting fresh (off-screen) frames.
    pub fn realised_range(&self) -> Range<usize> {
        if self.count == 0 {
            return 0..0;
        }
        let base = self.centering_offset() + HORIZONTAL_PADDING - self.scroll_x();
        let first = ((-self.viewport_width - base) / ITEM_STRIDE).floor().max(0.0) as usize;
        let last = ((2.0 * self.viewport_width - base) / ITEM_STRIDE).ceil().max(0.0) as usize;
        first.min(self.count)..last.min(self.count)
    }
}
