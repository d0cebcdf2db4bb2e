//! Status line composition

use super::{
    format::{format_clock, format_percent},
    symbols::{bar_style, icon_set, BarStyle, IconSet},
};
use crate::state::{DisplayConfig, Phase, Snapshot, TimerState};

pub const BELL: &str = "\x07";

/// Number of filled bar cells for a phase fraction, always within `0..=width`.
pub fn bar_fill(width: u16, fraction: f64) -> usize {
    let width = f64::from(width);
    let filled = (width * fraction).round();
    if filled.is_nan() {
        return 0;
    }
    filled.clamp(0.0, width) as usize
}

/// Turns a [`Snapshot`] into text fragments according to a [`DisplayConfig`].
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    config: &'a DisplayConfig,
    icons: &'static IconSet,
    bar: &'static BarStyle,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a DisplayConfig) -> Self {
        Self {
            config,
            icons: icon_set(config.icon_style),
            bar: bar_style(config.bar_style),
        }
    }

    pub fn icons(&self) -> &'static IconSet {
        self.icons
    }

    /// Icon for the observed phase; the alert glyph only replaces the running one.
    pub fn icon(&self, snapshot: &Snapshot) -> String {
        if self.config.hide_icon {
            return String::new();
        }
        let glyph = match snapshot.phase() {
            Phase::Stopped => self.icons.stopped,
            Phase::Expired => self.icons.expired,
            Phase::Paused => self.icons.paused,
            Phase::PausedOnBreak => self.icons.break_paused,
            Phase::OnBreak => self.icons.on_break,
            Phase::Running if snapshot.on_alert => self.icons.warning,
            Phase::Running => self.icons.running,
        };
        format!("{} ", glyph)
    }

    pub fn task(&self, task: &str) -> String {
        if self.config.hide_task {
            return String::new();
        }
        let label: String = task.chars().take(self.config.task_length).collect();
        if label.is_empty() {
            return String::new();
        }
        format!("{} ", label)
    }

    pub fn bar(&self, snapshot: &Snapshot) -> String {
        if self.config.hide_bar || snapshot.stopped {
            return String::new();
        }
        let width = usize::from(self.config.bar_size);
        let filled = if snapshot.expired {
            width
        } else {
            bar_fill(self.config.bar_size, snapshot.phase_fraction())
        };
        format!(
            "{}{}",
            self.bar.done.repeat(filled),
            self.bar.todo.repeat(width - filled)
        )
    }

    /// Remaining time when counting down, time spent in the phase otherwise.
    pub fn clock(&self, snapshot: &Snapshot) -> String {
        if self.config.hide_clock || snapshot.stopped {
            return String::new();
        }
        let reading = match (self.config.reverse, snapshot.expired) {
            (true, true) => chrono::Duration::zero(),
            (false, true) => snapshot.work,
            (true, false) => snapshot.remaining_in_phase(),
            (false, false) => snapshot.elapsed_in_phase(),
        };
        format!(" {}", format_clock(reading, self.config.hide_seconds))
    }

    pub fn percent(&self, snapshot: &Snapshot) -> String {
        if !self.config.percent || snapshot.stopped {
            return String::new();
        }
        format!(" {}", format_percent(snapshot.percent_complete()))
    }

    /// Terminal bell when a phase boundary is imminent and the bell is enabled.
    pub fn bell(&self, snapshot: &Snapshot, due: bool) -> &'static str {
        if !self.config.bell || snapshot.stopped || snapshot.paused || !due {
            return "";
        }
        BELL
    }

    /// Icon, task, bar, clock, percent and bell, in that order.
    pub fn line(&self, state: &TimerState, snapshot: &Snapshot, bell_due: bool) -> String {
        format!(
            "{}{}{}{}{}{}",
            self.icon(snapshot),
            self.task(&state.task),
            self.bar(snapshot),
            self.clock(snapshot),
            self.percent(snapshot),
            self.bell(snapshot, bell_due),
        )
    }

    /// Plain-word state for status bars, e.g. `report break paused r`.
    pub fn status_label(&self, state: &TimerState, snapshot: &Snapshot) -> String {
        let word = match snapshot.phase() {
            Phase::Expired => "complete",
            Phase::Stopped => "stopped",
            Phase::PausedOnBreak => "break paused",
            Phase::OnBreak => "break",
            Phase::Paused => "paused",
            Phase::Running => "running",
        };

        let mut parts = Vec::new();
        if !state.task.is_empty() {
            parts.push(state.task.as_str());
        }
        parts.push(word);
        if self.config.restart {
            parts.push(self.icons.restart);
        }
        if self.config.desktop_notify {
            parts.push(self.icons.notify);
        }
        parts.join(" ")
    }
}
