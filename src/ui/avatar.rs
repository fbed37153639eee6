//! Story avatar — ringed placeholder image, optionally with the author's
//! name underneath.
//!
//! Image loading lives outside this app, so every avatar shows the
//! placeholder: the author's initials on a grey fill.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::core::story::Story;

use super::theme::Theme;

/// Size class of an avatar; picks border weight and whether a name fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarKind {
    /// Full-size carousel item: thick ring, name below.
    Carousel,
    /// Small avatar in the header cluster: thin ring, no name.
    Mini,
}

pub struct StoryAvatar<'a> {
    pub story: &'a Story,
    pub kind: AvatarKind,
    pub dimmed: bool,
}

impl<'a> StoryAvatar<'a> {
    pub fn new(story: &'a Story, kind: AvatarKind) -> Self {
        Self {
            story,
            kind,
            dimmed: false,
        }
    }

    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }

    fn dim(&self, style: Style) -> Style {
        if self.dimmed {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    /// Stories are always drawn unseen.
    fn ring_colors(&self) -> (Style, Style) {
        let (start, end) = Theme::unseen_ring();
        (
            self.dim(Style::default().fg(start)),
            self.dim(Style::default().fg(end)),
        )
    }

    /// One-row rendition for areas too small to hold a ring.
    fn render_compact(&self, area: Rect, buf: &mut Buffer) {
        let (start, end) = self.ring_colors();
        let row = area.y + area.height / 2;
        let initial = self.story.initials().chars().next().unwrap_or('•');
        let mut spans = Vec::new();
        if area.width >= 3 {
            spans.push(Span::styled("(", start));
        }
        spans.push(Span::styled(
            initial.to_string(),
            self.dim(Theme::image_placeholder_style()),
        ));
        if area.width >= 3 {
            spans.push(Span::styled(")", end));
        }
        let line = Line::from(spans);
        let width = line.width() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        buf.set_line(x, row, &line, area.width);
    }
}

impl Widget for StoryAvatar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let with_name = self.kind == AvatarKind::Carousel && area.height >= 5;
        let ring_area = if with_name {
            Rect {
                height: area.height - 2,
                ..area
            }
        } else {
            area
        };

        if ring_area.width < 5 || ring_area.height < 3 {
            self.render_compact(ring_area, buf);
        } else {
            let (start, end) = self.ring_colors();
            let border_type = match self.kind {
                AvatarKind::Carousel => BorderType::Thick,
                AvatarKind::Mini => BorderType::Rounded,
            };
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(start)
                .render(ring_area, buf);
            // Gradient: the bottom and right edges take the end colour.
            let bottom_edge = Rect {
                y: ring_area.bottom() - 1,
                height: 1,
                ..ring_area
            };
            let right_edge = Rect {
                x: ring_area.right() - 1,
                width: 1,
                ..ring_area
            };
            buf.set_style(bottom_edge, end);
            buf.set_style(right_edge, end);

            let inner = Block::default().borders(Borders::ALL).inner(ring_area);
            let placeholder = self.dim(Theme::image_placeholder_style());
            buf.set_style(inner, placeholder);
            let text_row = Rect {
                y: inner.y + inner.height / 2,
                height: 1,
                ..inner
            };
            Paragraph::new(self.story.initials())
                .style(placeholder)
                .alignment(Alignment::Center)
                .render(text_row, buf);
        }

        if with_name {
            let name_row = Rect {
                y: area.y + area.height - 1,
                height: 1,
                ..area
            };
            Paragraph::new(self.story.author_name.as_str())
                .style(self.dim(Theme::author_name_style()))
                .alignment(Alignment::Center)
                .render(name_row, buf);
        }
    }
}
