//! Main application state management

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, error, info};

use super::{
    BoundaryWatch, Clock, Crossing, DisplayConfig, Snapshot, TimerCommand, TimerState, Transition,
};
use crate::{
    error::StoreError,
    render::{format_span, Renderer},
    services::AuditLog,
    storage::StateStore,
};

/// What a periodic evaluation found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The expired timer was restarted
    pub restarted: bool,
    /// A phase boundary is imminent and notifications should go out
    pub crossing: Option<Crossing>,
    /// The bell should ring on this render
    pub bell: bool,
}

/// The timer record, display configuration and the collaborators that persist them.
///
/// Owned by exactly one activity: the one-shot command handler or the live
/// session's control loop. Only [`AppState::execute`] and the setters below
/// mutate the records, and each of them asks the store to persist the result.
pub struct AppState {
    pub timer: TimerState,
    pub display: DisplayConfig,
    store: Box<dyn StateStore>,
    clock: Arc<dyn Clock>,
    audit: AuditLog,
    bell_watch: BoundaryWatch,
    notify_watch: BoundaryWatch,
}

impl AppState {
    /// Load both records, using defaults for anything missing or unreadable
    pub fn load(store: Box<dyn StateStore>, clock: Arc<dyn Clock>, audit: AuditLog) -> Self {
        let timer = store.load_timer_or_default();
        let display = store.load_display_or_default();
        debug!("Loaded timer state: {:?}", timer);
        let notified = timer.notified;

        Self {
            timer,
            display,
            store,
            clock,
            audit,
            bell_watch: BoundaryWatch::seeded(notified),
            notify_watch: BoundaryWatch::seeded(notified),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.timer, self.now())
    }

    /// Append an audit line if logging is enabled in the display configuration
    pub fn record(&self, event: &str) {
        if self.display.logging {
            self.audit.record(self.now(), event, &self.timer.task);
        }
    }

    /// Apply a timer command and persist the result.
    ///
    /// A failed save is returned to the caller; the in-memory state keeps the mutation.
    pub fn execute(&mut self, command: TimerCommand) -> Result<Transition, StoreError> {
        let transition = self.timer.apply(command, self.now());
        debug!("{:?} -> {:?}", command, transition);
        if !transition.changed() {
            return Ok(transition);
        }

        self.store.save_timer(&self.timer).map_err(|e| {
            error!("Failed to save timer state after {:?}: {}", command, e);
            e
        })?;

        if let Some(event) = transition.audit_event() {
            info!("Timer {}", event);
            self.record(event);
        }
        Ok(transition)
    }

    pub fn set_task(&mut self, task: impl Into<String>) -> Result<(), StoreError> {
        self.timer.set_task(task);
        self.store.save_timer(&self.timer)?;
        self.record("changed task to");
        Ok(())
    }

    /// Update any of the configured durations; `None` leaves a value unchanged.
    pub fn set_durations(
        &mut self,
        work: Option<Duration>,
        rest: Option<Duration>,
        alert: Option<Duration>,
    ) -> Result<(), StoreError> {
        if let Some(work) = work {
            self.timer.set_work(work);
        }
        if let Some(rest) = rest {
            self.timer.set_break(rest);
        }
        if let Some(alert) = alert {
            self.timer.set_alert(alert);
        }
        info!(
            "Durations set: work={} break={} alert={}",
            format_span(self.timer.work),
            format_span(self.timer.rest),
            format_span(self.timer.alert)
        );
        self.store.save_timer(&self.timer)
    }

    /// Mutate the display configuration and persist it
    pub fn update_display<F>(&mut self, updater: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut DisplayConfig),
    {
        updater(&mut self.display);
        self.store.save_display(&self.display)
    }

    /// Replace both records in place with whatever storage currently holds.
    pub fn reload(&mut self) {
        self.timer = self.store.load_timer_or_default();
        self.display = self.store.load_display_or_default();
        if self.timer.notified > self.notify_watch.last_fired() {
            self.bell_watch = BoundaryWatch::seeded(self.timer.notified);
            self.notify_watch = BoundaryWatch::seeded(self.timer.notified);
        }
        debug!("Reloaded timer state and display configuration");
    }

    /// Periodic evaluation: auto-restart, bell and notification edge detection.
    ///
    /// `window` is how far ahead of a phase boundary a crossing is reported;
    /// it must exceed the polling interval. A reported boundary is saved with
    /// the timer so later invocations inside the same window stay quiet.
    pub fn tick(&mut self, window: Duration) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if self.display.restart && self.snapshot().expired {
            match self.execute(TimerCommand::Start) {
                Ok(_) => outcome.restarted = true,
                Err(e) => error!("Automatic restart failed: {}", e),
            }
        }

        let snapshot = self.snapshot();
        outcome.bell = self.bell_watch.poll(&snapshot, window).is_some();
        outcome.crossing = self.notify_watch.poll(&snapshot, window);
        if let Some(crossing) = outcome.crossing {
            self.record(crossing.audit_event());
            if let Some(boundary) = self.notify_watch.last_fired() {
                self.timer.mark_notified(boundary);
                if let Err(e) = self.store.save_timer(&self.timer) {
                    error!("Failed to save notification marker: {}", e);
                }
            }
        }
        outcome
    }

    pub fn render_line(&self, bell: bool) -> String {
        let snapshot = self.snapshot();
        Renderer::new(&self.display).line(&self.timer, &snapshot, bell)
    }

    pub fn status_label(&self) -> String {
        let snapshot = self.snapshot();
        Renderer::new(&self.display).status_label(&self.timer, &snapshot)
    }

    /// Work and break durations, e.g. `25m0s 5m0s`
    pub fn info(&self) -> String {
        format!("{} {}", format_span(self.timer.work), format_span(self.timer.rest))
    }

    pub fn audit_log(&self) -> &AuditLog {
        &self.audit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        state::{ManualClock, Phase},
        storage::MemoryStore,
    };
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    fn setup() -> (AppState, Arc<MemoryStore>, Arc<ManualClock>) {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(ManualClock::new(t0()));
        let app = AppState::load(Box::new(store.clone()), clock.clone(), AuditLog::disabled());
        (app, store, clock)
    }

    #[test]
    fn loads_defaults_from_empty_store() {
        let (app, _, _) = setup();
        assert_eq!(app.timer, TimerState::default());
        assert_eq!(app.display, DisplayConfig::default());
        assert_eq!(app.snapshot().phase(), Phase::Stopped);
    }

    #[test]
    fn execute_persists_changes() {
        let (mut app, store, clock) = setup();
        assert_eq!(app.execute(TimerCommand::Start).unwrap(), Transition::Started);
        assert_eq!(store.stored_timer().unwrap().started_at, Some(t0()));

        clock.advance(Duration::minutes(10));
        app.execute(TimerCommand::Pause).unwrap();
        clock.advance(Duration::minutes(3));
        app.execute(TimerCommand::Resume).unwrap();

        let stored = store.stored_timer().unwrap();
        assert_eq!(stored.started_at, Some(t0() + Duration::minutes(3)));
        assert_eq!(stored.paused_at, None);
        assert_eq!(app.snapshot().remaining_in_interval(), Duration::minutes(15));
    }

    #[test]
    fn ignored_commands_do_not_save() {
        let (mut app, store, _) = setup();
        assert_eq!(app.execute(TimerCommand::Pause).unwrap(), Transition::Ignored);
        assert!(store.stored_timer().is_none());
    }

    #[test]
    fn failed_save_keeps_mutation() {
        let (mut app, store, _) = setup();
        store.fail_writes(true);
        assert!(app.execute(TimerCommand::Start).is_err());
        assert_eq!(app.timer.started_at, Some(t0()));
        assert!(store.stored_timer().is_none());
    }

    #[test]
    fn reload_replaces_records() {
        let (mut app, store, _) = setup();
        let mut other = TimerState::default();
        other.set_task("from another shell");
        let mut display = DisplayConfig::default();
        display.set_bar_size(3);
        store.save_timer(&other).unwrap();
        store.save_display(&display).unwrap();

        app.reload();
        assert_eq!(app.timer.task, "from another shell");
        assert_eq!(app.display.bar_size, 3);
    }

    #[test]
    fn tick_restarts_expired_timer() {
        let (mut app, store, clock) = setup();
        app.update_display(|d| d.restart = true).unwrap();
        app.execute(TimerCommand::Start).unwrap();

        clock.advance(Duration::minutes(31));
        let outcome = app.tick(Duration::milliseconds(1100));
        assert!(outcome.restarted);
        assert_eq!(app.timer.started_at, Some(t0() + Duration::minutes(31)));
        assert_eq!(store.stored_timer().unwrap().started_at, app.timer.started_at);
        assert_eq!(app.snapshot().phase(), Phase::Running);
    }

    #[test]
    fn tick_without_restart_leaves_expired_timer() {
        let (mut app, _, clock) = setup();
        app.execute(TimerCommand::Start).unwrap();
        clock.advance(Duration::hours(1));
        let outcome = app.tick(Duration::milliseconds(1100));
        assert!(!outcome.restarted);
        assert_eq!(app.snapshot().phase(), Phase::Expired);
    }

    #[test]
    fn tick_reports_crossing_once() {
        let (mut app, _, clock) = setup();
        app.execute(TimerCommand::Start).unwrap();
        let window = Duration::milliseconds(1100);

        clock.set(t0() + Duration::minutes(25) - Duration::milliseconds(900));
        let first = app.tick(window);
        assert_eq!(first.crossing, Some(Crossing::WorkEnding));
        assert!(first.bell);

        clock.advance(Duration::milliseconds(500));
        let second = app.tick(window);
        assert_eq!(second.crossing, None);
        assert!(!second.bell);
    }

    #[test]
    fn crossing_reported_once_across_invocations() {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(ManualClock::new(t0()));
        let window = crate::state::trigger::one_shot_window();
        let load = || AppState::load(Box::new(store.clone()), clock.clone(), AuditLog::disabled());

        load().execute(TimerCommand::Start).unwrap();

        clock.set(t0() + Duration::minutes(25) - Duration::milliseconds(900));
        let first = load().tick(window);
        assert_eq!(first.crossing, Some(Crossing::WorkEnding));
        assert_eq!(store.stored_timer().unwrap().notified, Some(t0() + Duration::minutes(25)));

        clock.set(t0() + Duration::minutes(25) - Duration::milliseconds(400));
        let second = load().tick(window);
        assert_eq!(second.crossing, None);
        assert!(!second.bell);

        clock.set(t0() + Duration::minutes(30) - Duration::milliseconds(500));
        assert_eq!(load().tick(window).crossing, Some(Crossing::BreakEnding));
    }

    #[test]
    fn durations_task_and_info() {
        let (mut app, store, _) = setup();
        app.set_durations(Some(Duration::minutes(50)), None, Some(Duration::seconds(30)))
            .unwrap();
        app.set_task("deep work").unwrap();
        assert_eq!(app.info(), "50m0s 5m0s");

        let stored = store.stored_timer().unwrap();
        assert_eq!(stored.work, Duration::minutes(50));
        assert_eq!(stored.alert, Duration::seconds(30));
        assert_eq!(stored.task, "deep work");
    }

    #[test]
    fn audit_log_follows_logging_toggle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timer.log");
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(ManualClock::new(t0()));
        let mut app = AppState::load(Box::new(store), clock, AuditLog::new(&path));

        app.execute(TimerCommand::Start).unwrap();
        assert!(!path.exists());

        app.update_display(|d| d.logging = true).unwrap();
        app.execute(TimerCommand::Stop).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("stop"));
    }

    #[test]
    fn render_and_status_agree_on_phase() {
        let (mut app, _, clock) = setup();
        app.update_display(|d| d.icon_style = 3).unwrap();
        app.execute(TimerCommand::Start).unwrap();
        clock.advance(Duration::minutes(26));
        assert!(app.render_line(false).starts_with("+ "));
        assert_eq!(app.status_label(), "break");
    }
}
