//! Pomobar - a pomodoro timer for the terminal and the status bar
//!
//! The timer is a pair of persisted timestamps; everything shown (icon, bar,
//! clock, percentage) is derived from them and the current time. A one-shot
//! invocation renders a single line for a prompt or status bar, while `run`
//! keeps a live line updating in place.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod services;
pub mod state;
pub mod storage;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use utils::signals::termination_signal;
