//! Persisted display and notification preferences

use serde::{Deserialize, Serialize};

pub const MAX_BAR_SIZE: u16 = 300;

/// Display configuration, loaded once per process and saved after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    #[serde(rename = "barsize")]
    pub bar_size: u16,
    #[serde(rename = "barstyle")]
    pub bar_style: u8,
    #[serde(rename = "icon")]
    pub icon_style: u8,
    #[serde(rename = "tasklength")]
    pub task_length: usize,
    /// Start a new interval as soon as the previous one expires
    pub restart: bool,
    pub bell: bool,
    #[serde(rename = "hidetime")]
    pub hide_clock: bool,
    #[serde(rename = "hidetask")]
    pub hide_task: bool,
    #[serde(rename = "hideseconds")]
    pub hide_seconds: bool,
    #[serde(rename = "hideicon")]
    pub hide_icon: bool,
    #[serde(rename = "hidebar")]
    pub hide_bar: bool,
    /// Count down instead of up
    pub reverse: bool,
    pub percent: bool,
    #[serde(rename = "notify")]
    pub desktop_notify: bool,
    #[serde(rename = "tmux")]
    pub tmux_notify: bool,
    #[serde(rename = "log")]
    pub logging: bool,
}

/// Boolean preferences flipped by the `toggle` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    HideBar,
    Bell,
    HideClock,
    HideIcon,
    Percent,
    DesktopNotify,
    TmuxNotify,
    Restart,
    Reverse,
    HideSeconds,
    HideTask,
    Logging,
}

impl DisplayConfig {
    pub fn new() -> Self {
        Self {
            bar_size: 10,
            bar_style: 0,
            icon_style: 0,
            task_length: 20,
            restart: false,
            bell: false,
            hide_clock: false,
            hide_task: false,
            hide_seconds: false,
            hide_icon: false,
            hide_bar: false,
            reverse: true,
            percent: false,
            desktop_notify: false,
            tmux_notify: false,
            logging: false,
        }
    }

    fn flag_mut(&mut self, toggle: Toggle) -> &mut bool {
        match toggle {
            Toggle::HideBar => &mut self.hide_bar,
            Toggle::Bell => &mut self.bell,
            Toggle::HideClock => &mut self.hide_clock,
            Toggle::HideIcon => &mut self.hide_icon,
            Toggle::Percent => &mut self.percent,
            Toggle::DesktopNotify => &mut self.desktop_notify,
            Toggle::TmuxNotify => &mut self.tmux_notify,
            Toggle::Restart => &mut self.restart,
            Toggle::Reverse => &mut self.reverse,
            Toggle::HideSeconds => &mut self.hide_seconds,
            Toggle::HideTask => &mut self.hide_task,
            Toggle::Logging => &mut self.logging,
        }
    }

    /// Flip a boolean preference and return its new value.
    pub fn toggle(&mut self, toggle: Toggle) -> bool {
        let flag = self.flag_mut(toggle);
        *flag = !*flag;
        *flag
    }

    pub fn set_bar_size(&mut self, size: u16) {
        self.bar_size = size.min(MAX_BAR_SIZE);
    }

    pub fn set_bar_style(&mut self, style: u8) {
        self.bar_style = style;
    }

    pub fn set_icon_style(&mut self, style: u8) {
        self.icon_style = style;
    }

    pub fn set_task_length(&mut self, length: usize) {
        self.task_length = length;
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}
