//! Signal handling for the live session

use futures::stream::StreamExt;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::info;

/// Signals that end the live display
pub const TERMINATION_SIGNALS: [i32; 2] = [SIGTERM, SIGINT];

/// Wait for the first interrupt or termination signal and return its number.
pub async fn termination_signal() -> std::io::Result<i32> {
    let mut signals = Signals::new(TERMINATION_SIGNALS)?;
    let handle = signals.handle();

    let received = signals.next().await;
    handle.close();

    match received {
        Some(signal) => {
            info!("Received signal: {}", signal);
            Ok(signal)
        }
        None => Err(std::io::Error::other("signal stream closed")),
    }
}
