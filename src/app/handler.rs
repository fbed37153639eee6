//! Input handling — maps key/mouse events to state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::config::Action;

use super::settings::DEBUG_ITEMS;
use super::state::{ActiveView, AppState};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Chats => handle_chats_key(state, key),
        ActiveView::DebugMenu => handle_debug_key(state, key),
    }
}

// ── Chats view (configurable bindings) ──────────────────────────

fn handle_chats_key(state: &mut AppState, key: KeyEvent) {
    let Some(action) = state.config.match_key(key) else {
        return;
    };
    state.status_message = None;

    match action {
        Action::Quit => state.should_quit = true,
        Action::OpenDebug => {
            state.active_view = ActiveView::DebugMenu;
            state.debug_selected = 0;
        }
        Action::ScrollDown => state.scroll_list(1),
        Action::ScrollUp => state.scroll_list(-1),
        Action::StoriesNext => state.step_carousel(1),
        Action::StoriesPrev => state.step_carousel(-1),
        Action::ScrollTop => state.scroll_to_top(),
    }
}

// ── Debug menu (hardcoded navigation) ───────────────────────────

fn handle_debug_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            state.active_view = ActiveView::Chats;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.debug_selected = state.debug_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.debug_selected + 1 < DEBUG_ITEMS.len() {
                state.debug_selected += 1;
            }
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => adjust_selected(state, -1),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('+')
        | KeyCode::Enter
        | KeyCode::Char(' ') => adjust_selected(state, 1),
        _ => {}
    }
}

fn adjust_selected(state: &mut AppState, delta: isize) {
    let Some(item) = DEBUG_ITEMS.get(state.debug_selected) else {
        return;
    };
    let current = state.model.debug_config();
    let next = item.adjust(&current, delta);
    if next != current {
        state.apply_debug_config(next);
        state.status_message = Some(format!("{}: {}", item.label(), item.value(&next)));
    }
}

// ── Mouse ───────────────────────────────────────────────────────

/// Process a mouse event.  Wheel scrolls the list; horizontal wheel (or
/// shift+wheel) pages the carousel.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view != ActiveView::Chats {
        return;
    }
    let horizontal = mouse.modifiers.contains(KeyModifiers::SHIFT);

    match mouse.kind {
        MouseEventKind::ScrollDown if horizontal => state.step_carousel(1),
        MouseEventKind::ScrollUp if horizontal => state.step_carousel(-1),
        MouseEventKind::ScrollDown => state.scroll_list(1),
        MouseEventKind::ScrollUp => state.scroll_list(-1),
        MouseEventKind::ScrollRight => state.step_carousel(1),
        MouseEventKind::ScrollLeft => state.step_carousel(-1),
        _ => {}
    }
}
