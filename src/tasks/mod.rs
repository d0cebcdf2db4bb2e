//! Background tasks module
//!
//! The live session's control loop and the producers that feed it.

pub mod events;
pub mod live_session;
pub mod producers;

// Re-export main types and functions
pub use events::{LiveCommand, RenderHint, SessionEvent, TickGate};
pub use live_session::{run_live_session, SessionEnd};
