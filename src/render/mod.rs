//! Rendering of the single-line timer display
//!
//! All functions here are pure: they read a [`Snapshot`](crate::state::Snapshot)
//! and a [`DisplayConfig`](crate::state::DisplayConfig) and return text.

pub mod format;
pub mod line;
pub mod symbols;

pub use format::{format_clock, format_percent, format_span, parse_span};
pub use line::{bar_fill, Renderer, BELL};
pub use symbols::{bar_style, icon_set, BarStyle, IconSet};
