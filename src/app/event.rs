//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background task that
//! forwards them over a channel so the main loop stays non-blocking.  The
//! same task emits a [`AppEvent::Tick`] every frame interval, which drives
//! the matched-geometry animation.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Spawns a background task that polls the terminal for events and sends them
/// through the returned channel.  Ticks keep a steady cadence even while
/// input is streaming in.
pub fn spawn_event_reader(frame: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || {
        let mut next_tick = Instant::now() + frame;
        loop {
            let now = Instant::now();
            let app_event = if now >= next_tick {
                next_tick = now + frame;
                AppEvent::Tick
            } else {
                match event::poll(next_tick - now) {
                    Ok(true) => match event::read() {
                        // Release/repeat events only arrive with the kitty
                        // protocol; one press is one step.
                        Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => AppEvent::Key(k),
                        Ok(CtEvent::Mouse(m)) => AppEvent::Mouse(m),
                        Ok(CtEvent::Resize(w, h)) => AppEvent::Resize(w, h),
                        Ok(_) => continue,
                        Err(err) => {
                            tracing::warn!("terminal read failed: {err}");
                            continue;
                        }
                    },
                    Ok(false) => continue,
                    Err(err) => {
                        tracing::warn!("terminal poll failed: {err}");
                        break;
                    }
                }
            };
            if tx.send(app_event).is_err() {
                break; // receiver dropped
            }
        }
    });

    rx
}
