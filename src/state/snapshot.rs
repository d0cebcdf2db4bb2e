//! Derived timer predicates and quantities
//!
//! Everything the renderer and the notification trigger need is computed here,
//! once per evaluation, from the stored [`TimerState`] and a single "now".
//! Icon, bar, clock and percent all read the same [`Snapshot`], so they can
//! never disagree about which phase the timer is in.

use chrono::{DateTime, Duration, Utc};

use super::TimerState;

/// The mutually exclusive states a timer can be observed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Stopped,
    Running,
    Paused,
    OnBreak,
    PausedOnBreak,
    Expired,
}

/// A point-in-time evaluation of a [`TimerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub now: DateTime<Utc>,
    pub work: Duration,
    pub rest: Duration,
    pub stopped: bool,
    pub paused: bool,
    pub on_break: bool,
    pub expired: bool,
    pub on_alert: bool,
    /// Wall-clock time since the interval started, pauses included
    pub elapsed: Duration,
    /// Time since start minus the time frozen by the current pause
    pub effective: Duration,
}

impl Snapshot {
    pub fn capture(state: &TimerState, now: DateTime<Utc>) -> Self {
        let Some(started_at) = state.started_at else {
            return Self {
                now,
                work: state.work,
                rest: state.rest,
                stopped: true,
                paused: false,
                on_break: false,
                expired: false,
                on_alert: false,
                elapsed: Duration::zero(),
                effective: Duration::zero(),
            };
        };

        let elapsed = now - started_at;
        let (paused, effective) = match state.paused_at {
            Some(paused_at) => (true, elapsed - (now - paused_at)),
            None => (false, elapsed),
        };
        let total = state.work + state.rest;

        Self {
            now,
            work: state.work,
            rest: state.rest,
            stopped: false,
            paused,
            on_break: effective >= state.work && effective < total,
            expired: effective >= total && !paused,
            on_alert: elapsed >= state.work - state.alert && elapsed < state.work,
            elapsed,
            effective,
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.stopped, self.expired, self.paused, self.on_break) {
            (true, ..) => Phase::Stopped,
            (_, true, ..) => Phase::Expired,
            (_, _, true, true) => Phase::PausedOnBreak,
            (_, _, true, false) => Phase::Paused,
            (_, _, false, true) => Phase::OnBreak,
            (_, _, false, false) => Phase::Running,
        }
    }

    /// Work time left; negative once the work interval is past due.
    pub fn remaining_in_interval(&self) -> Duration {
        self.work - self.effective
    }

    /// Work plus break time left.
    pub fn remaining_total(&self) -> Duration {
        self.work + self.rest - self.effective
    }

    /// Effective time spent in the current phase.
    pub fn elapsed_in_phase(&self) -> Duration {
        if self.on_break {
            self.effective - self.work
        } else {
            self.effective
        }
    }

    /// Time left in the current phase, counting toward its end.
    pub fn remaining_in_phase(&self) -> Duration {
        if self.on_break {
            self.remaining_total()
        } else {
            self.remaining_in_interval()
        }
    }

    pub fn phase_duration(&self) -> Duration {
        if self.on_break {
            self.rest
        } else {
            self.work
        }
    }

    /// Completed share of the current phase, clamped to `0.0..=1.0`.
    pub fn phase_fraction(&self) -> f64 {
        if self.stopped {
            return 0.0;
        }
        if self.expired {
            return 1.0;
        }
        let span = self.phase_duration();
        if span <= Duration::zero() {
            return 1.0;
        }
        let fraction = seconds_f64(self.elapsed_in_phase()) / seconds_f64(span);
        if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        }
    }

    /// Whole percent of the current phase completed, always in `0..=100`.
    pub fn percent_complete(&self) -> u8 {
        if self.expired {
            return 100;
        }
        (self.phase_fraction() * 100.0).floor() as u8
    }

    /// The instant the current phase ends, for a running (unpaused) timer.
    pub fn phase_boundary(&self) -> Option<DateTime<Utc>> {
        if self.stopped || self.paused || self.expired {
            return None;
        }
        Some(self.now + self.remaining_in_phase())
    }
}

fn seconds_f64(duration: Duration) -> f64 {
    match duration.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1e9,
        None => duration.num_milliseconds() as f64 / 1e3,
    }
}
