//! Durable storage for the timer record and display configuration
//!
//! Both records are plain pretty-printed JSON so they can be read and edited
//! by hand. Loading never fails from the caller's point of view: a missing or
//! unreadable record is replaced by defaults.

pub mod file_store;
pub mod memory_store;
pub mod paths;

use tracing::debug;

use crate::{
    error::StoreError,
    state::{DisplayConfig, TimerState},
};

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use paths::AppPaths;

/// Load/save access to both persisted records.
pub trait StateStore: Send + Sync {
    fn load_timer(&self) -> Result<TimerState, StoreError>;
    fn save_timer(&self, state: &TimerState) -> Result<(), StoreError>;
    fn load_display(&self) -> Result<DisplayConfig, StoreError>;
    fn save_display(&self, config: &DisplayConfig) -> Result<(), StoreError>;

    /// Load the timer record, falling back to defaults on any failure.
    fn load_timer_or_default(&self) -> TimerState {
        match self.load_timer() {
            Ok(state) => state.normalized(),
            Err(e) => {
                debug!("Using default timer state: {}", e);
                TimerState::default()
            }
        }
    }

    /// Load the display configuration, falling back to defaults on any failure.
    fn load_display_or_default(&self) -> DisplayConfig {
        self.load_display().unwrap_or_else(|e| {
            debug!("Using default display configuration: {}", e);
            DisplayConfig::default()
        })
    }
}

impl<T: StateStore + ?Sized> StateStore for std::sync::Arc<T> {
    fn load_timer(&self) -> Result<TimerState, StoreError> {
        (**self).load_timer()
    }

    fn save_timer(&self, state: &TimerState) -> Result<(), StoreError> {
        (**self).save_timer(state)
    }

    fn load_display(&self) -> Result<DisplayConfig, StoreError> {
        (**self).load_display()
    }

    fn save_display(&self, config: &DisplayConfig) -> Result<(), StoreError> {
        (**self).save_display(config)
    }
}
