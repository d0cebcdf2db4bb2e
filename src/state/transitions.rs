//! Timer transitions: start, stop, pause/resume, break, clear

use chrono::{DateTime, Utc};

use super::{Snapshot, TimerState};

/// Commands that mutate the timer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start,
    Stop,
    /// Pauses a running timer, resumes a paused one
    Pause,
    Resume,
    Break,
    Clear,
}

/// What a transition actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started,
    Stopped,
    Paused,
    Resumed,
    BreakStarted,
    TaskCleared,
    /// The command does not apply to the current state
    Ignored,
}

impl Transition {
    /// Audit-log event name, if the transition is worth recording.
    pub fn audit_event(&self) -> Option<&'static str> {
        match self {
            Transition::Started => Some("start"),
            Transition::Stopped => Some("stop"),
            Transition::Paused => Some("pause"),
            Transition::Resumed => Some("resume"),
            Transition::BreakStarted => Some("break"),
            Transition::TaskCleared | Transition::Ignored => None,
        }
    }

    pub fn changed(&self) -> bool {
        !matches!(self, Transition::Ignored)
    }
}

impl TimerState {
    pub fn apply(&mut self, command: TimerCommand, now: DateTime<Utc>) -> Transition {
        match command {
            TimerCommand::Start => self.start(now),
            TimerCommand::Stop => self.stop(),
            TimerCommand::Pause => self.toggle_pause(now),
            TimerCommand::Resume => self.resume(now),
            TimerCommand::Break => self.take_break(now),
            TimerCommand::Clear => self.clear_task(),
        }
    }

    /// Begin a new interval now. Restarting a running timer resets it.
    pub fn start(&mut self, now: DateTime<Utc>) -> Transition {
        self.started_at = Some(now);
        self.paused_at = None;
        Transition::Started
    }

    pub fn stop(&mut self) -> Transition {
        self.started_at = None;
        self.paused_at = None;
        Transition::Stopped
    }

    /// Pause a running timer, or resume it if already paused.
    ///
    /// Stopped and expired timers are left untouched.
    pub fn toggle_pause(&mut self, now: DateTime<Utc>) -> Transition {
        let snapshot = Snapshot::capture(self, now);
        if snapshot.stopped || snapshot.expired {
            return Transition::Ignored;
        }
        if snapshot.paused {
            return self.resume(now);
        }
        self.paused_at = Some(now);
        Transition::Paused
    }

    /// Shift the start forward by the paused span so the interval keeps its budget.
    pub fn resume(&mut self, now: DateTime<Utc>) -> Transition {
        let (Some(started_at), Some(paused_at)) = (self.started_at, self.paused_at) else {
            tracing::debug!("Resume requested but timer is not paused");
            return Transition::Ignored;
        };
        self.started_at = Some(started_at + (now - paused_at));
        self.paused_at = None;
        Transition::Resumed
    }

    /// Jump straight to the break phase, however much work time is left.
    pub fn take_break(&mut self, now: DateTime<Utc>) -> Transition {
        let previous = self.started_at;
        self.paused_at = None;
        self.started_at = Some(now - self.work);
        if let Some(previous) = previous {
            tracing::debug!("Break skips {}s of work", (previous - (now - self.work)).num_seconds());
        }
        Transition::BreakStarted
    }

    pub fn clear_task(&mut self) -> Transition {
        self.task.clear();
        Transition::TaskCleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn start_resets_interval() {
        let mut state = TimerState::default();
        assert_eq!(state.start(t0()), Transition::Started);
        let snap = Snapshot::capture(&state, t0());
        assert!(!snap.stopped && !snap.paused && !snap.on_break);
        assert_eq!(snap.percent_complete(), 0);

        state.paused_at = Some(t0() + Duration::minutes(1));
        state.start(t0() + Duration::minutes(9));
        assert_eq!(state.started_at, Some(t0() + Duration::minutes(9)));
        assert_eq!(state.paused_at, None);
    }

    #[test]
    fn stop_clears_both_timestamps() {
        let mut state = TimerState::default();
        state.start(t0());
        state.toggle_pause(t0() + Duration::minutes(2));
        state.stop();
        assert_eq!(state.started_at, None);
        assert_eq!(state.paused_at, None);
    }

    #[test]
    fn pause_then_resume_excludes_paused_time() {
        let mut state = TimerState::default();
        state.start(t0());

        let pause_at = t0() + Duration::minutes(10);
        let before = Snapshot::capture(&state, pause_at).effective;
        assert_eq!(state.toggle_pause(pause_at), Transition::Paused);

        let resume_at = pause_at + Duration::minutes(3);
        assert_eq!(state.toggle_pause(resume_at), Transition::Resumed);

        let snap = Snapshot::capture(&state, resume_at);
        assert_eq!(snap.effective, before);
        assert_eq!(snap.remaining_in_interval(), Duration::minutes(15));
        assert_eq!(state.started_at, Some(t0() + Duration::minutes(3)));
    }

    #[test]
    fn pause_ignored_when_stopped_or_expired() {
        let mut state = TimerState::default();
        assert_eq!(state.toggle_pause(t0()), Transition::Ignored);
        assert_eq!(state, TimerState::default());

        state.start(t0());
        let expired_at = t0() + Duration::minutes(31);
        assert_eq!(state.toggle_pause(expired_at), Transition::Ignored);
        assert_eq!(state.paused_at, None);
    }

    #[test]
    fn resume_ignored_when_not_paused() {
        let mut state = TimerState::default();
        state.start(t0());
        assert_eq!(state.resume(t0() + Duration::minutes(1)), Transition::Ignored);
        assert_eq!(state.started_at, Some(t0()));
    }

    #[test]
    fn break_starts_now() {
        let mut state = TimerState::default();
        state.start(t0());
        let now = t0() + Duration::minutes(5);
        assert_eq!(state.apply(TimerCommand::Break, now), Transition::BreakStarted);

        let snap = Snapshot::capture(&state, now);
        assert!(snap.on_break);
        assert_eq!(snap.phase(), Phase::OnBreak);
        assert_eq!(snap.remaining_total(), state.rest);
    }

    #[test]
    fn break_from_paused_or_stopped() {
        let mut state = TimerState::default();
        let now = t0();
        state.take_break(now);
        assert_eq!(Snapshot::capture(&state, now).phase(), Phase::OnBreak);

        state.toggle_pause(now + Duration::minutes(1));
        state.take_break(now + Duration::minutes(2));
        let snap = Snapshot::capture(&state, now + Duration::minutes(2));
        assert_eq!(snap.phase(), Phase::OnBreak);
        assert_eq!(snap.remaining_total(), state.rest);
    }

    #[test]
    fn clear_only_touches_task() {
        let mut state = TimerState::default();
        state.start(t0());
        state.set_task("refactor");
        assert_eq!(state.apply(TimerCommand::Clear, t0()), Transition::TaskCleared);
        assert!(state.task.is_empty());
        assert_eq!(state.started_at, Some(t0()));
    }

    #[test]
    fn audit_events() {
        assert_eq!(Transition::Started.audit_event(), Some("start"));
        assert_eq!(Transition::Resumed.audit_event(), Some("resume"));
        assert_eq!(Transition::Ignored.audit_event(), None);
        assert!(!Transition::Ignored.changed());
    }
}
