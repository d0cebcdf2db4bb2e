//! Background activities feeding the live session's event channel

use std::time::Duration;

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use super::events::{LiveCommand, SessionEvent};
use crate::utils::termination_signal;

/// Emit `event` every `period`, starting one period from now.
pub async fn periodic_task(tx: mpsc::Sender<SessionEvent>, period: Duration, event: SessionEvent) {
    let mut interval = interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // the first tick completes immediately
    interval.tick().await;

    loop {
        interval.tick().await;
        if tx.send(event.clone()).await.is_err() {
            debug!("Session closed, stopping {:?} producer", event);
            break;
        }
    }
}

/// Read whitespace-separated tokens from standard input.
pub async fn input_reader_task(tx: mpsc::Sender<SessionEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                for token in line.split_whitespace() {
                    let command = LiveCommand::parse(token);
                    debug!("Input {:?} -> {:?}", token, command);
                    if tx.send(SessionEvent::Input(command)).await.is_err() {
                        return;
                    }
                }
            }
            Ok(None) => {
                info!("Standard input closed, live session keeps running");
                return;
            }
            Err(e) => {
                warn!("Failed to read standard input: {}", e);
                return;
            }
        }
    }
}

/// Forward the first interrupt or termination signal.
pub async fn signal_task(tx: mpsc::Sender<SessionEvent>) {
    match termination_signal().await {
        Ok(_) => {
            let _ = tx.send(SessionEvent::Interrupt).await;
        }
        Err(e) => warn!("Signal listener stopped: {}", e),
    }
}
