//! Terminal control for the live display

use std::{
    io::Write,
    process::{Command as StdCommand, ExitStatus, Stdio},
};

use tokio::process::Command;
use tracing::warn;

use crate::error::ServiceError;

pub const CLEAR_LINE: &str = "\x1b[2K";
pub const CARRIAGE_RETURN: &str = "\r";
pub const CURSOR_HIDE: &str = "\x1b[?25l";
pub const CURSOR_SHOW: &str = "\x1b[?25h";
pub const CURSOR_PREV_LINE: &str = "\x1b[1A";

fn echo_mode(enabled: bool) -> &'static str {
    if enabled { "echo" } else { "-echo" }
}

fn check_stty(mode: &str, result: std::io::Result<ExitStatus>) -> Result<(), ServiceError> {
    let status = result.map_err(|source| ServiceError::Spawn {
        command: "stty".to_string(),
        source,
    })?;
    if !status.success() {
        return Err(ServiceError::Failed {
            command: format!("stty {}", mode),
            stderr: status.to_string(),
        });
    }
    Ok(())
}

/// Set the controlling terminal's local echo. stty reads the terminal from stdin.
async fn stty_echo(enabled: bool) -> Result<(), ServiceError> {
    let mode = echo_mode(enabled);
    let result = Command::new("stty")
        .arg(mode)
        .stdin(Stdio::inherit())
        .status()
        .await;
    check_stty(mode, result)
}

/// Blocking variant for `Drop`, which cannot await.
fn stty_echo_blocking(enabled: bool) -> Result<(), ServiceError> {
    let mode = echo_mode(enabled);
    let result = StdCommand::new("stty").arg(mode).stdin(Stdio::inherit()).status();
    check_stty(mode, result)
}

fn emit(sequence: &str) {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(sequence.as_bytes());
    let _ = stdout.flush();
}

/// Replace the current line with `text`, leaving the cursor at its end.
pub fn redraw_line(text: &str) {
    emit(&format!("{}{}{}", CLEAR_LINE, CARRIAGE_RETURN, text));
}

/// Clear the screen but keep scrollback.
pub async fn clear_screen() -> Result<(), ServiceError> {
    let status = Command::new("clear")
        .arg("-x")
        .status()
        .await
        .map_err(|source| ServiceError::Spawn {
            command: "clear".to_string(),
            source,
        })?;
    if !status.success() {
        return Err(ServiceError::Failed {
            command: "clear -x".to_string(),
            stderr: status.to_string(),
        });
    }
    Ok(())
}

/// Echo off and cursor hidden for the life of the value; restored on drop.
#[derive(Debug)]
pub struct TerminalSession {
    restored: bool,
}

impl TerminalSession {
    pub async fn enter() -> Self {
        if let Err(e) = stty_echo(false).await {
            warn!("Could not disable terminal echo: {}", e);
        }
        emit(&format!("{}{}{}", CURSOR_PREV_LINE, CLEAR_LINE, CURSOR_HIDE));
        Self { restored: false }
    }

    /// Turn echo back on, clear the line and show the cursor.
    pub async fn restore(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = stty_echo(true).await {
            warn!("Could not restore terminal echo: {}", e);
        }
        self.finish();
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }

    fn finish(&mut self) {
        emit(&format!("{}{}{}", CLEAR_LINE, CARRIAGE_RETURN, CURSOR_SHOW));
        self.restored = true;
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = stty_echo_blocking(true) {
            warn!("Could not restore terminal echo: {}", e);
        }
        self.finish();
    }
}
