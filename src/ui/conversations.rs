//! Conversation list — the scrolling body below the stories carousel.
//!
//! The list content starts with a blank band the height of the carousel
//! (the carousel itself is painted on top of it by the scene), followed by
//! one fixed-height row per conversation.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::core::story::ConversationSummary;

use super::theme::Theme;

/// Terminal rows per conversation: name + date, last message, spacer.
pub const ROW_HEIGHT: u16 = 3;
/// Width of the icon placeholder column.
const ICON_WIDTH: u16 = 4;

pub struct ConversationList<'a> {
    pub conversations: &'a [ConversationSummary],
    /// Rows of list content above the first conversation.
    pub leading_rows: u16,
    /// Rows scrolled off the top.
    pub scroll_rows: u16,
}

impl ConversationList<'_> {
    fn render_row(conversation: &ConversationSummary, area: Rect, buf: &mut Buffer) {
        let icon = Rect {
            width: ICON_WIDTH.min(area.width),
            height: 2.min(area.height),
            ..area
        };
        buf.set_style(icon, Theme::image_placeholder_style());
        let initial = conversation
            .conversation_name
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();
        buf.set_string(
            icon.x + icon.width / 2,
            icon.y,
            initial,
            Theme::image_placeholder_style(),
        );

        let text_x = area.x + ICON_WIDTH + 1;
        if text_x >= area.right() {
            return;
        }
        let text = Rect {
            x: text_x,
            width: area.right() - text_x,
            height: 1,
            ..area
        };

        let date = conversation.last_message_date().unwrap_or_default();
        Paragraph::new(Line::from(Span::styled(
            date,
            Theme::conversation_detail_style(),
        )))
        .alignment(Alignment::Right)
        .render(text, buf);
        buf.set_stringn(
            text.x,
            text.y,
            &conversation.conversation_name,
            text.width as usize,
            Theme::conversation_name_style(),
        );

        if area.height > 1 {
            buf.set_stringn(
                text.x,
                text.y + 1,
                conversation.last_message_text(),
                text.width as usize,
                Theme::conversation_detail_style(),
            );
        }
    }
}

impl Widget for ConversationList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.conversations.is_empty() {
            let top = i32::from(area.y) + i32::from(self.leading_rows) - i32::from(self.scroll_rows);
            if top >= i32::from(area.y) && top < i32::from(area.bottom()) {
                let row = Rect {
                    y: top as u16,
                    height: 1,
                    ..area
                };
                Paragraph::new("No Conversations 😨")
                    .style(Theme::empty_state_style())
                    .alignment(Alignment::Center)
                    .render(row, buf);
            }
            return;
        }

        for (index, conversation) in self.conversations.iter().enumerate() {
            let content_top = i32::from(self.leading_rows) + index as i32 * i32::from(ROW_HEIGHT);
            let top = i32::from(area.y) + content_top - i32::from(self.scroll_rows);
            let bottom = top + i32::from(ROW_HEIGHT);
            if bottom <= i32::from(area.y) {
                continue;
            }
            if top >= i32::from(area.bottom()) {
                break;
            }
            // Rows are only drawn when their first line is on screen; a row
            // half-hidden under the header is skipped.
            if top < i32::from(area.y) {
                continue;
            }
            let row = Rect {
                y: top as u16,
                height: (ROW_HEIGHT - 1).min(area.bottom() - top as u16),
                ..area
            };
            Self::render_row(conversation, row, buf);
        }
    }
}
