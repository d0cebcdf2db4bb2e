//! State management module
//!
//! The timer record, its derived snapshot, the transitions that mutate it,
//! the display configuration and the application state that ties them together.

pub mod app_state;
pub mod clock;
pub mod display_config;
pub mod snapshot;
pub mod timer_state;
pub mod transitions;
pub mod trigger;

// Re-export main types
pub use app_state::{AppState, TickOutcome};
pub use clock::{Clock, ManualClock, SystemClock};
pub use display_config::{DisplayConfig, Toggle};
pub use snapshot::{Phase, Snapshot};
pub use timer_state::TimerState;
pub use transitions::{TimerCommand, Transition};
pub use trigger::{BoundaryWatch, Crossing};
