//! Phase-boundary detection for the bell and notifications
//!
//! There is no scheduler: callers poll, and a crossing is reported when the
//! end of the current phase is less than one polling window away. A
//! [`BoundaryWatch`] remembers the boundary it last reported so consecutive
//! polls landing in the same window report it only once.

use chrono::{DateTime, Duration, Utc};

use super::Snapshot;

pub const MESSAGE_BREAK: &str = "time for a break";
pub const MESSAGE_WORK: &str = "time to work";
pub const MESSAGE_DONE: &str = "time complete";

/// Slack added to the polling interval to absorb scheduling jitter.
pub fn guard_margin() -> Duration {
    Duration::milliseconds(100)
}

/// Window used by one-shot invocations, which have no polling cadence of their own.
pub fn one_shot_window() -> Duration {
    Duration::seconds(1)
}

/// Which phase is about to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    WorkEnding,
    BreakEnding,
}

impl Crossing {
    /// Notification text; the end of a break reads differently when the timer restarts itself.
    pub fn message(&self, restart: bool) -> &'static str {
        match (self, restart) {
            (Crossing::WorkEnding, _) => MESSAGE_BREAK,
            (Crossing::BreakEnding, true) => MESSAGE_WORK,
            (Crossing::BreakEnding, false) => MESSAGE_DONE,
        }
    }

    pub fn audit_event(&self) -> &'static str {
        match self {
            Crossing::WorkEnding => "completed",
            Crossing::BreakEnding => "break over",
        }
    }
}

/// The crossing, and its boundary instant, if the phase ends within `window`.
pub fn crossing_within(snapshot: &Snapshot, window: Duration) -> Option<(Crossing, DateTime<Utc>)> {
    let boundary = snapshot.phase_boundary()?;
    let (crossing, remaining) = if snapshot.on_break {
        (Crossing::BreakEnding, snapshot.remaining_total())
    } else {
        (Crossing::WorkEnding, snapshot.remaining_in_interval())
    };
    if remaining > Duration::zero() && remaining < window {
        Some((crossing, boundary))
    } else {
        None
    }
}

/// Edge detector that fires at most once per phase boundary.
#[derive(Debug, Clone, Default)]
pub struct BoundaryWatch {
    last_fired: Option<DateTime<Utc>>,
}

impl BoundaryWatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A watch that treats `boundary` as already reported.
    pub fn seeded(boundary: Option<DateTime<Utc>>) -> Self {
        Self { last_fired: boundary }
    }

    pub fn poll(&mut self, snapshot: &Snapshot, window: Duration) -> Option<Crossing> {
        let (crossing, boundary) = crossing_within(snapshot, window)?;
        if self.last_fired == Some(boundary) {
            return None;
        }
        self.last_fired = Some(boundary);
        Some(crossing)
    }

    pub fn last_fired(&self) -> Option<DateTime<Utc>> {
        self.last_fired
    }
}
