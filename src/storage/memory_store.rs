//! In-memory store, used in tests and anywhere persistence is not wanted

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use super::StateStore;
use crate::{
    error::StoreError,
    state::{DisplayConfig, TimerState},
};

#[derive(Debug, Default)]
pub struct MemoryStore {
    timer: Mutex<Option<TimerState>>,
    display: Mutex<Option<DisplayConfig>>,
    fail_writes: AtomicBool,
}

fn unavailable() -> StoreError {
    StoreError::io(
        "<memory>",
        std::io::Error::new(std::io::ErrorKind::NotFound, "no record stored"),
    )
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(timer: TimerState, display: DisplayConfig) -> Self {
        Self {
            timer: Mutex::new(Some(timer)),
            display: Mutex::new(Some(display)),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every subsequent save fail, to exercise write-failure handling.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn stored_timer(&self) -> Option<TimerState> {
        self.timer.lock().ok().and_then(|t| t.clone())
    }

    pub fn stored_display(&self) -> Option<DisplayConfig> {
        self.display.lock().ok().and_then(|d| d.clone())
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::io(
                "<memory>",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "writes disabled"),
            ));
        }
        Ok(())
    }
}

impl StateStore for MemoryStore {
    fn load_timer(&self) -> Result<TimerState, StoreError> {
        self.stored_timer().ok_or_else(unavailable)
    }

    fn save_timer(&self, state: &TimerState) -> Result<(), StoreError> {
        self.check_writable()?;
        if let Ok(mut timer) = self.timer.lock() {
            *timer = Some(state.clone());
        }
        Ok(())
    }

    fn load_display(&self) -> Result<DisplayConfig, StoreError> {
        self.stored_display().ok_or_else(unavailable)
    }

    fn save_display(&self, config: &DisplayConfig) -> Result<(), StoreError> {
        self.check_writable()?;
        if let Ok(mut display) = self.display.lock() {
            *display = Some(config.clone());
        }
        Ok(())
    }
}
