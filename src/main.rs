//! A chats screen whose stories carousel collapses into a mini avatar
//! cluster in the header as the conversation list scrolls.
//!
//! Run with `RUST_LOG=story_header=debug 2>trace.log` to watch scroll deltas
//! and view-state commits.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    model::{ChatsModel, DebugConfig},
    state::{ActiveView, AppState},
};
use crate::core::engine::HeaderEngine;
use crate::core::source::MockSource;
use crate::ui::{
    conversations::ConversationList, header::HeaderBar, popup::DebugPopup, theme::Theme,
    units::UNITS_PER_ROW,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Stories header that morphs as you scroll")]
struct Cli {
    /// Number of stories in the carousel.
    #[arg(long, default_value_t = 20)]
    stories: usize,

    /// Upper bound on avatars in the collapsed header cluster.
    #[arg(long = "mini-stories", default_value_t = 3)]
    mini_stories: usize,

    /// Number of conversations in the list.
    #[arg(long, default_value_t = 30)]
    conversations: usize,

    /// Keep the full carousel visible (dimmed) while it morphs.
    #[arg(long)]
    demystify: bool,

    /// Scroll the list line by line instead of a whole row at a time.
    #[arg(long = "no-snap")]
    no_snap: bool,
}

impl Cli {
    fn debug_config(&self) -> DebugConfig {
        DebugConfig {
            stories_count: self.stories,
            visible_mini_stories_count: self.mini_stories,
            conversations_count: self.conversations,
            demystify_transitions: self.demystify,
            snap_to_rows: !self.no_snap,
        }
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // the UI owns stdout
        .init();

    let cli = Cli::parse();

    // ── data ──────────────────────────────────────────────────
    let mut model = ChatsModel::new(
        HeaderEngine::default(),
        cli.debug_config(),
        Box::new(MockSource),
    );
    model.reload_data();
    let user_config = config::AppConfig::load();
    let frame = Duration::from_millis(user_config.frame_ms);
    let mut state = AppState::new(model, user_config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(frame);
    let mut needs_draw = true;

    // ── event loop ────────────────────────────────────────────
    loop {
        if needs_draw {
            needs_draw = false;
            terminal.draw(|frame| {
                let area = frame.area();
                state.layout_pass(area);
                let layout = state.layout;

                // Back to front: list, carousel, header, floating avatars.
                let carousel_height = state.model.engine.transition_config().carousel_height();
                frame.render_widget(
                    ConversationList {
                        conversations: state.model.conversations(),
                        leading_rows: (carousel_height / UNITS_PER_ROW).round() as u16,
                        scroll_rows: state.list_scroll_rows(),
                    },
                    layout.list_area,
                );
                state.scene.render_carousel(layout.list_area, frame.buffer_mut());
                frame.render_widget(HeaderBar { scene: &state.scene }, layout.header_area);
                state
                    .scene
                    .render_floating(layout.header_area.union(layout.list_area), frame.buffer_mut());

                let hint = state.config.status_bar_hint();
                let status_text = match state.active_view {
                    ActiveView::Chats => state.status_message.as_deref().unwrap_or(&hint),
                    ActiveView::DebugMenu => "",
                };
                let status = Paragraph::new(status_text).style(Theme::status_bar_style());
                frame.render_widget(status, layout.status_area);

                if state.active_view == ActiveView::DebugMenu {
                    let config = state.model.debug_config();
                    frame.render_widget(
                        DebugPopup {
                            selected: state.debug_selected,
                            config: &config,
                        },
                        area,
                    );
                }
            })?;
        }

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => {
                handler::handle_key(&mut state, k);
                needs_draw = true;
            }
            AppEvent::Mouse(m) => {
                handler::handle_mouse(&mut state, m);
                needs_draw = true;
            }
            AppEvent::Resize(_, _) => needs_draw = true,
            AppEvent::Tick => needs_draw = state.tick(),
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
