//! Location of the state, configuration and audit-log files

use std::path::{Path, PathBuf};

use crate::error::StoreError;

pub const PROGRAM_NAME: &str = "pomobar";
pub const STATE_FILE: &str = "state.json";
pub const CONFIG_FILE: &str = "config.json";
pub const AUDIT_LOG_FILE: &str = "timer.log";

/// Overrides every platform directory with a single one
pub const HOME_ENV: &str = "POMOBAR_HOME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub state: PathBuf,
    pub config: PathBuf,
    pub audit_log: PathBuf,
}

impl AppPaths {
    /// Keep all files side by side in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            state: dir.join(STATE_FILE),
            config: dir.join(CONFIG_FILE),
            audit_log: dir.join(AUDIT_LOG_FILE),
        }
    }

    /// Resolve paths from `POMOBAR_HOME`, or the platform cache/config
    /// directories, or the directory of the running binary.
    pub fn locate() -> Result<Self, StoreError> {
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::in_dir(home));
        }

        let fallback = || -> Result<PathBuf, StoreError> {
            let exe = std::env::current_exe().map_err(|_| StoreError::NoDataDir)?;
            exe.parent()
                .map(Path::to_path_buf)
                .ok_or(StoreError::NoDataDir)
        };

        let cache = match dirs::cache_dir() {
            Some(dir) => dir,
            None => fallback()?,
        }
        .join(PROGRAM_NAME);
        let config = match dirs::config_dir() {
            Some(dir) => dir,
            None => fallback()?,
        }
        .join(PROGRAM_NAME);

        Ok(Self {
            state: cache.join(STATE_FILE),
            config: config.join(CONFIG_FILE),
            audit_log: cache.join(AUDIT_LOG_FILE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_dir_places_files_together() {
        let paths = AppPaths::in_dir("/tmp/pomo");
        assert_eq!(paths.state, PathBuf::from("/tmp/pomo/state.json"));
        assert_eq!(paths.config, PathBuf::from("/tmp/pomo/config.json"));
        assert_eq!(paths.audit_log, PathBuf::from("/tmp/pomo/timer.log"));
    }
}
