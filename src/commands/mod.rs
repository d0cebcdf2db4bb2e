//! Command dispatch module
//!
//! One handler per CLI command. Handlers write their output to any
//! [`std::io::Write`] so they can be exercised without a terminal.

pub mod handlers;

pub use handlers::{dispatch, Completion};
