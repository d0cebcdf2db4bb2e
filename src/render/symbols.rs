//! Icon sets and progress-bar glyphs

/// Glyphs for every timer phase, plus the markers used by the status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet {
    pub running: &'static str,
    pub warning: &'static str,
    pub paused: &'static str,
    pub stopped: &'static str,
    pub expired: &'static str,
    pub on_break: &'static str,
    pub break_paused: &'static str,
    pub notify: &'static str,
    pub tmux: &'static str,
    pub restart: &'static str,
}

// Nerd Font glyphs
pub const SOLID: IconSet = IconSet {
    running: "\u{F13AB}",
    warning: "\u{F1ACC}",
    paused: "\u{F1AD4}",
    stopped: "\u{F13AC}",
    expired: "\u{F0026}",
    on_break: "\u{F0004}",
    break_paused: "\u{F115E}",
    notify: "\u{F0369}",
    tmux: "\u{EBC8}",
    restart: "\u{F0709}",
};

pub const TRACE: IconSet = IconSet {
    running: "\u{F051B}",
    warning: "\u{F1ACD}",
    paused: "\u{F1AD7}",
    stopped: "\u{F051E}",
    expired: "\u{F002A}",
    on_break: "\u{F0013}",
    break_paused: "\u{F115F}",
    notify: "\u{F036A}",
    tmux: "\u{EBC8}",
    restart: "\u{F0709}",
};

pub const ASCII: IconSet = IconSet {
    running: ">",
    warning: "!",
    paused: "~",
    stopped: ":",
    expired: "-",
    on_break: "+",
    break_paused: "+",
    notify: "*",
    tmux: "t",
    restart: "r",
};

/// Filled and unfilled progress-bar cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub done: &'static str,
    pub todo: &'static str,
}

pub const BAR_SOLID: BarStyle = BarStyle { done: "█", todo: "░" };
pub const BAR_SOLID_REV: BarStyle = BarStyle { done: "░", todo: "█" };
pub const BAR_SHADE: BarStyle = BarStyle { done: "▒", todo: "░" };
pub const BAR_SHADE_REV: BarStyle = BarStyle { done: "░", todo: "▒" };
pub const BAR_ASCII: BarStyle = BarStyle { done: "@", todo: "-" };

/// Icon set by style index; unknown indices fall back to solid.
pub fn icon_set(index: u8) -> &'static IconSet {
    match index {
        2 => &TRACE,
        3 => &ASCII,
        _ => &SOLID,
    }
}

/// Bar style by index; unknown indices fall back to solid.
pub fn bar_style(index: u8) -> &'static BarStyle {
    match index {
        2 => &BAR_SOLID_REV,
        3 => &BAR_SHADE,
        4 => &BAR_SHADE_REV,
        5 => &BAR_ASCII,
        _ => &BAR_SOLID,
    }
}
