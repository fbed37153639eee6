//! "Chats" header bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Widget},
};

use super::scene::{Scene, TITLE};
use super::theme::Theme;
use super::units::{UNITS_PER_COL, UNITS_PER_ROW};

pub struct HeaderBar<'a> {
    pub scene: &'a Scene,
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Transparent until the cluster has fully collapsed: the carousel
        // scrolling underneath stays visible.
        if self.scene.header_opaque {
            Block::default()
                .style(Theme::header_opaque_style())
                .render(area, buf);
        }

        let x = (self.scene.title_x / UNITS_PER_COL).round().max(0.0) as u16;
        let y = (self.scene.title_y / UNITS_PER_ROW).floor().max(0.0) as u16;
        if x >= area.right() || y >= area.bottom() || y < area.y {
            return;
        }
        let x = x.max(area.x);
        buf.set_stringn(
            x,
            y,
            TITLE,
            usize::from(area.right() - x),
            Theme::title_style(),
        );
    }
}
