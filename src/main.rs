//! Pomobar - a pomodoro timer for the terminal and the status bar
//!
//! This is the main entry point for the pomobar binary.

use std::{io::Write, sync::Arc};

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pomobar::{
    commands::{dispatch, Completion},
    config::Config,
    services::AuditLog,
    state::{AppState, SystemClock},
    storage::{AppPaths, FileStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing on stderr so stdout stays a clean status line
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pomobar={}", config.log_level())));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let paths = AppPaths::locate().context("failed to locate the pomobar data directory")?;
    debug!("Using state {:?}, config {:?}", paths.state, paths.config);

    let store = FileStore::new(&paths);
    let audit = AuditLog::new(&paths.audit_log);
    let app = AppState::load(Box::new(store), Arc::new(SystemClock), audit);

    let mut stdout = std::io::stdout();
    let completion = dispatch(config.command, app, &mut stdout).await?;
    stdout.flush()?;

    if let Completion::Live(end) = completion {
        info!("Live session finished: {:?}", end);
        // the stdin reader blocks on a read the runtime cannot cancel
        std::process::exit(0);
    }
    Ok(())
}
