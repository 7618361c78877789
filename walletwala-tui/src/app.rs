//! Terminal setup and the main event loop.
//!
//! Input is read on a dedicated thread and fed through a channel; a
//! `tokio::select!` loop multiplexes it with the carousel timer and a
//! periodic refresh. Every event is handled synchronously and
//! independently, so high-frequency mouse drags apply one update each
//! with no queueing beyond the channel itself.

use std::{io, thread, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::{sync::mpsc, time};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::{
    config::Config,
    ui::{
        events::{is_interrupt_event, is_quit_event},
        views::{make_view, View},
    },
};

/// Runs the app until the user quits.
#[tracing::instrument(skip(config))]
pub async fn run(config: &Config, view_name: &str) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut term = Terminal::new(backend)?;
    term.clear()?;

    // Input thread: blocks on crossterm, stops when the token is
    // cancelled or the channel closes.
    let cancel = CancellationToken::new();
    let (tx, rx) = mpsc::unbounded_channel::<Event>();
    let input_cancel = cancel.clone();
    let input_thread = thread::spawn(move || read_input(tx, input_cancel));

    let mut view = make_view(view_name);
    info!(view = view_name, "ui started");

    let result = event_loop(config, &mut term, view.as_mut(), rx).await;

    cancel.cancel();
    restore_terminal(&mut term, config.mouse);
    input_thread.join().ok();
    info!("ui stopped");
    result
}

async fn event_loop(
    config: &Config,
    term: &mut Terminal<CrosstermBackend<io::Stdout>>,
    view: &mut dyn View,
    mut rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    // The first interval tick fires immediately; skip it so the carousel
    // holds its opening message for a full period.
    let start = time::Instant::now();
    let mut carousel_tick = time::interval_at(
        start + Duration::from_millis(config.carousel_ms),
        Duration::from_millis(config.carousel_ms),
    );
    let mut refresh_tick = time::interval(Duration::from_millis(config.tick_ms));
    refresh_tick.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

    term.draw(|f| view.draw(f, f.area()))?;

    loop {
        tokio::select! {
            ev = rx.recv() => {
                let Some(ev) = ev else {
                    // Input thread is gone; nothing more to react to.
                    return Ok(());
                };
                if is_interrupt_event(&ev) || (is_quit_event(&ev) && !view.captures_input()) {
                    return Ok(());
                }
                let needs_redraw = match ev {
                    Event::Resize(_, _) => {
                        term.autoresize().ok();
                        true
                    }
                    _ => view.on_event(&ev),
                };
                if needs_redraw {
                    term.draw(|f| view.draw(f, f.area()))?;
                }
            }

            _ = carousel_tick.tick() => {
                if view.on_tick() {
                    term.draw(|f| view.draw(f, f.area()))?;
                }
            }

            _ = refresh_tick.tick() => {
                term.draw(|f| view.draw(f, f.area()))?;
            }
        }
    }
}

/// Blocking input reader. Polls so it can notice cancellation between
/// events.
fn read_input(tx: mpsc::UnboundedSender<Event>, cancel: CancellationToken) {
    while !cancel.is_cancelled() {
        match event::poll(Duration::from_millis(100)) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "failed to read input event");
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                warn!(error = %e, "input poll failed");
                break;
            }
        }
    }
}

/// Leaves the terminal the way we found it, on every exit path.
fn restore_terminal(term: &mut Terminal<CrosstermBackend<io::Stdout>>, mouse: bool) {
    if mouse {
        execute!(term.backend_mut(), DisableMouseCapture).ok();
    }
    execute!(term.backend_mut(), LeaveAlternateScreen).ok();
    disable_raw_mode().ok();
    term.show_cursor().ok();
}
