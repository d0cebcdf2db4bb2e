//! JSON files on disk

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::{AppPaths, StateStore};
use crate::{
    error::StoreError,
    state::{DisplayConfig, TimerState},
};

#[derive(Debug, Clone)]
pub struct FileStore {
    state_path: PathBuf,
    config_path: PathBuf,
}

impl FileStore {
    pub fn new(paths: &AppPaths) -> Self {
        Self {
            state_path: paths.state.clone(),
            config_path: paths.config.clone(),
        }
    }

    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let bytes = std::fs::read(path).map_err(|e| StoreError::io(path, e))?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }
    debug!("Writing {}", path.display());
    std::fs::write(path, json).map_err(|e| StoreError::io(path, e))
}

impl StateStore for FileStore {
    fn load_timer(&self) -> Result<TimerState, StoreError> {
        read_json(&self.state_path)
    }

    fn save_timer(&self, state: &TimerState) -> Result<(), StoreError> {
        write_json(&self.state_path, state)
    }

    fn load_display(&self) -> Result<DisplayConfig, StoreError> {
        read_json(&self.config_path)
    }

    fn save_display(&self, config: &DisplayConfig) -> Result<(), StoreError> {
        write_json(&self.config_path, config)
    }
}
