//! Popup overlay for the debug menu.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::app::model::DebugConfig;
use crate::app::settings::{DebugItem, DEBUG_ITEMS};

use super::theme::Theme;

/// Debug menu popup overlay.
pub struct DebugPopup<'a> {
    pub selected: usize,
    pub config: &'a DebugConfig,
}

impl Widget for DebugPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (DEBUG_ITEMS.len() as u16) + 6;
        let popup = centered_fixed(46, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Debug ")
            .title_style(Theme::popup_title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::popup_border_style());

        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        for (i, item) in DEBUG_ITEMS.iter().enumerate() {
            let (prefix, style) = if i == self.selected {
                (" ▸ ", Theme::selected_style())
            } else {
                ("   ", Style::default().fg(Color::White))
            };

            let value = item.value(self.config);
            let (value, value_style) = match item {
                DebugItem::Stepper { .. } => {
                    (format!("◂ {value} ▸"), Style::default().fg(Color::Yellow))
                }
                DebugItem::Toggle { get, .. } if get(self.config) => {
                    (format!("[{value}]"), Style::default().fg(Color::Green))
                }
                DebugItem::Toggle { .. } => {
                    (format!("[{value}]"), Style::default().fg(Color::DarkGray))
                }
            };

            // Label left, value right.
            let label_col = format!("{prefix}{:<24}", item.label());
            let value_width = (inner.width as usize)
                .saturating_sub(label_col.chars().count())
                .max(1);
            lines.push(Line::from(vec![
                Span::styled(label_col, style),
                Span::styled(format!("{value:>value_width$}"), value_style),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  ←/→: adjust  Enter: toggle  Esc: close",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

// ───────────────────────────────────────── helpers ───────────

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
