//! Persisted timer record

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WORK_MINUTES: i64 = 25;
pub const DEFAULT_BREAK_MINUTES: i64 = 5;
pub const DEFAULT_ALERT_MINUTES: i64 = 2;

/// Timer state carried between invocations.
///
/// Only the timestamps and configured durations are stored; whether the timer
/// is running, paused, on break or expired is derived from them against the
/// current instant (see [`Snapshot`](super::Snapshot)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Start of the current interval; `None` means the timer is stopped
    #[serde(rename = "start", default)]
    pub started_at: Option<DateTime<Utc>>,
    /// When the timer was paused; `None` means not paused
    #[serde(rename = "pause", default)]
    pub paused_at: Option<DateTime<Utc>>,
    #[serde(rename = "interval", with = "nanos", default = "default_work")]
    pub work: Duration,
    #[serde(rename = "break", with = "nanos", default = "default_break")]
    pub rest: Duration,
    #[serde(rename = "alert", with = "nanos", default = "default_alert")]
    pub alert: Duration,
    #[serde(default)]
    pub task: String,
    /// Phase boundary the last notification went out for
    #[serde(default)]
    pub notified: Option<DateTime<Utc>>,
}

fn default_work() -> Duration {
    Duration::minutes(DEFAULT_WORK_MINUTES)
}
fn default_break() -> Duration {
    Duration::minutes(DEFAULT_BREAK_MINUTES)
}
fn default_alert() -> Duration {
    Duration::minutes(DEFAULT_ALERT_MINUTES)
}

impl TimerState {
    /// A stopped timer with the default 25/5/2 minute durations
    pub fn new() -> Self {
        Self {
            started_at: None,
            paused_at: None,
            work: default_work(),
            rest: default_break(),
            alert: default_alert(),
            task: String::new(),
            notified: None,
        }
    }

    /// Repair records that violate the pause-implies-start invariant.
    pub fn normalized(mut self) -> Self {
        if self.started_at.is_none() && self.paused_at.is_some() {
            tracing::debug!("Dropping pause timestamp of a stopped timer");
            self.paused_at = None;
        }
        self
    }

    pub fn set_work(&mut self, work: Duration) {
        self.work = work;
    }

    pub fn set_break(&mut self, rest: Duration) {
        self.rest = rest;
    }

    pub fn set_alert(&mut self, alert: Duration) {
        self.alert = alert;
    }

    pub fn set_task(&mut self, task: impl Into<String>) {
        self.task = task.into();
    }

    pub fn mark_notified(&mut self, boundary: DateTime<Utc>) {
        self.notified = Some(boundary);
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Durations stored as signed integer nanoseconds
mod nanos {
    use chrono::Duration;
    use serde::{ser::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let nanos = value
            .num_nanoseconds()
            .ok_or_else(|| S::Error::custom(format!("duration {} does not fit in nanoseconds", value)))?;
        serializer.serialize_i64(nanos)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        i64::deserialize(deserializer).map(Duration::nanoseconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_is_stopped() {
        let state = TimerState::default();
        assert!(state.started_at.is_none());
        assert!(state.paused_at.is_none());
        assert_eq!(state.work, Duration::minutes(25));
        assert_eq!(state.rest, Duration::minutes(5));
        assert_eq!(state.alert, Duration::minutes(2));
    }

    #[test]
    fn json_round_trip_is_exact() {
        let start = Utc.with_ymd_and_hms(2024, 3, 9, 14, 7, 11).unwrap()
            + Duration::nanoseconds(123_456_789);
        let state = TimerState {
            started_at: Some(start),
            paused_at: Some(start + Duration::seconds(42)),
            work: Duration::minutes(50),
            rest: Duration::seconds(601),
            alert: Duration::milliseconds(1500),
            task: "write report ✍".to_string(),
            notified: Some(start + Duration::minutes(50)),
        };

        let json = serde_json::to_string_pretty(&state).unwrap();
        let parsed: TimerState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
        assert_eq!(serde_json::to_string_pretty(&parsed).unwrap(), json);
    }

    #[test]
    fn json_uses_field_names_and_nanoseconds() {
        let json = serde_json::to_value(TimerState::default()).unwrap();
        assert_eq!(json["start"], serde_json::Value::Null);
        assert_eq!(json["pause"], serde_json::Value::Null);
        assert_eq!(json["interval"], 1_500_000_000_000i64);
        assert_eq!(json["break"], 300_000_000_000i64);
        assert_eq!(json["alert"], 120_000_000_000i64);
        assert_eq!(json["task"], "");
        assert_eq!(json["notified"], serde_json::Value::Null);
    }

    #[test]
    fn oversized_duration_fails_to_serialize() {
        let mut state = TimerState::default();
        state.set_work(Duration::hours(3_000_000));
        assert!(serde_json::to_string(&state).is_err());

        state.set_work(Duration::hours(2_000_000));
        let parsed: TimerState = serde_json::from_str(&serde_json::to_string(&state).unwrap()).unwrap();
        assert_eq!(parsed.work, Duration::hours(2_000_000));
    }

    #[test]
    fn missing_keys_take_defaults() {
        let parsed: TimerState = serde_json::from_str(r#"{"task":"x"}"#).unwrap();
        assert_eq!(parsed.task, "x");
        assert_eq!(parsed.work, Duration::minutes(25));
    }

    #[test]
    fn normalized_clears_orphan_pause() {
        let state = TimerState {
            paused_at: Some(Utc::now()),
            ..TimerState::default()
        };
        assert!(state.normalized().paused_at.is_none());
    }
}
