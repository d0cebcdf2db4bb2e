//! The live display: one control loop, several event producers
//!
//! The ticker, the standard-input reader, the signal listener and the reload
//! timer each own a sender on the same channel. Only the control loop below
//! touches the [`AppState`], so every mutation and every render is sequenced.

use std::time::Duration as StdDuration;

use chrono::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use super::{
    events::{LiveCommand, RenderHint, SessionEvent, TickGate},
    producers::{input_reader_task, periodic_task, signal_task},
};
use crate::{
    services::{deliver_notification, terminal, TerminalSession},
    state::{trigger::guard_margin, AppState},
};

/// Redraw cadence of the live display
pub const TICK_INTERVAL: StdDuration = StdDuration::from_secs(1);
/// How often both records are re-read to pick up changes from other invocations
pub const RELOAD_INTERVAL: StdDuration = StdDuration::from_secs(5);

const CHANNEL_CAPACITY: usize = 32;

/// Why the control loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    Interrupted,
    /// Every producer went away
    Closed,
}

/// Run the live display until the user quits or a signal arrives.
pub async fn run_live_session(app: AppState) -> SessionEnd {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

    tokio::spawn(periodic_task(tx.clone(), TICK_INTERVAL, SessionEvent::Tick));
    tokio::spawn(periodic_task(tx.clone(), RELOAD_INTERVAL, SessionEvent::Reload));
    tokio::spawn(input_reader_task(tx.clone()));
    tokio::spawn(signal_task(tx));

    let mut terminal = TerminalSession::enter().await;
    let end = control_loop(app, rx).await;
    terminal.restore().await;
    info!("Live session ended: {:?}", end);
    end
}

/// Drain events until quit, interrupt, or every sender is dropped.
pub async fn control_loop(mut app: AppState, mut rx: mpsc::Receiver<SessionEvent>) -> SessionEnd {
    let window = tick_window();
    let mut gate = TickGate::new();

    render_tick(&mut app, window);

    while let Some(event) = rx.recv().await {
        match event {
            SessionEvent::Tick => {
                if gate.take() == RenderHint::Skip {
                    debug!("Tick skipped after input");
                    continue;
                }
                render_tick(&mut app, window);
            }
            SessionEvent::Input(LiveCommand::Quit) => return SessionEnd::Quit,
            SessionEvent::Input(command) => {
                handle_command(&mut app, command).await;
                gate.input_rendered();
            }
            SessionEvent::Reload => app.reload(),
            SessionEvent::Interrupt => return SessionEnd::Interrupted,
        }
    }
    SessionEnd::Closed
}

/// The crossing window for a producer that polls every [`TICK_INTERVAL`].
pub fn tick_window() -> Duration {
    Duration::milliseconds(TICK_INTERVAL.as_millis() as i64) + guard_margin()
}

fn render_tick(app: &mut AppState, window: Duration) {
    let outcome = app.tick(window);
    if let Some(crossing) = outcome.crossing {
        let display = app.display.clone();
        tokio::spawn(async move { deliver_notification(&display, crossing).await });
    }
    terminal::redraw_line(&app.render_line(outcome.bell));
}

/// Apply one live command and redraw the line in response.
async fn handle_command(app: &mut AppState, command: LiveCommand) {
    if let LiveCommand::Timer(timer_command) = command {
        if let Err(e) = app.execute(timer_command) {
            error!("Failed to apply {:?}: {}", timer_command, e);
        }
    }
    if command == LiveCommand::ClearScreen {
        if let Err(e) = terminal::clear_screen().await {
            warn!("Could not clear the screen: {}", e);
        }
    }

    match command.feedback() {
        Some(text) => terminal::redraw_line(text),
        None => terminal::redraw_line(&app.render_line(false)),
    }
}
