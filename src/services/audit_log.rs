//! User-facing audit trail of timer events

use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local, Utc};
use tracing::warn;

/// Appends one line per timer event to `timer.log`.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: Option<PathBuf>,
}

/// `3:04PM`
const KITCHEN_FORMAT: &str = "%-I:%M%p";

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A log that drops everything.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn format_line(at: DateTime<Utc>, event: &str, task: &str) -> String {
        let stamp = at.with_timezone(&Local).format(KITCHEN_FORMAT).to_string();
        format!("{:<10}\t{:<20}\t{}", stamp, event, task)
    }

    /// Append an event line. Failures are logged and otherwise ignored.
    pub fn record(&self, at: DateTime<Utc>, event: &str, task: &str) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(e) = append_line(path, &Self::format_line(at, event, task)) {
            warn!("Failed to write audit log {}: {}", path.display(), e);
        }
    }

    /// Delete the log file. Returns whether a file was removed.
    pub fn remove(&self) -> std::io::Result<bool> {
        let Some(path) = &self.path else {
            return Ok(false);
        };
        match std::fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn appends_tab_separated_lines() {
        let dir = TempDir::new().unwrap();
        let log = AuditLog::new(dir.path().join("logs/timer.log"));
        let now = Utc::now();
        log.record(now, "start", "write tests");
        log.record(now, "stop", "");

        let text = std::fs::read_to_string(log.path().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let fields: Vec<&str> = lines[0].split('\t').collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].len(), 10);
        assert_eq!(fields[1], format!("{:<20}", "start"));
        assert_eq!(fields[2], "write tests");
        assert!(fields[0].trim_end().ends_with('M'));
    }

    #[test]
    fn remove_tolerates_missing_file() {
        let dir = TempDir::new().unwrap();
        let log = AuditLog::new(dir.path().join("timer.log"));
        assert!(!log.remove().unwrap());
        log.record(Utc::now(), "start", "");
        assert!(log.remove().unwrap());
        assert!(!dir.path().join("timer.log").exists());
    }

    #[test]
    fn disabled_log_writes_nothing() {
        let log = AuditLog::disabled();
        log.record(Utc::now(), "start", "");
        assert!(log.path().is_none());
        assert!(!log.remove().unwrap());
    }
}
