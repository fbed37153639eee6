//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── header ─────────────────────────────────────────────────
    pub fn title_style() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    /// Header backdrop once the mini cluster has fully collapsed.
    pub fn header_opaque_style() -> Style {
        Style::default().bg(Color::Rgb(40, 40, 46))
    }

    // ── stories ────────────────────────────────────────────────
    /// Ring of a story the user has not opened yet.  The two colours are the
    /// ends of the gradient: top/left edge and bottom/right edge.
    pub fn unseen_ring() -> (Color, Color) {
        (Color::Cyan, Color::Magenta)
    }

    /// Stand-in for an image that has not loaded.
    pub fn image_placeholder_style() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn author_name_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    // ── conversations ──────────────────────────────────────────
    pub fn conversation_name_style() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn conversation_detail_style() -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
    }

    pub fn empty_state_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn popup_border_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn popup_title_style() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn selected_style() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }
}
