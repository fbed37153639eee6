//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows reserved for the "Chats" header (title, mini cluster, padding).
pub const HEADER_ROWS: u16 = 4;

/// Chats screen: fixed header, scrolling list, one-line status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatsLayout {
    pub header_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
}

impl ChatsLayout {
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_ROWS),
                Constraint::Min(3),    // list takes all remaining space
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            list_area: chunks[1],
            status_area: chunks[2],
        }
    }
}
