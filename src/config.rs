//! Configuration and CLI argument handling

use chrono::Duration;
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::{render::parse_span, state::Toggle};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pomobar")]
#[command(about = "A pomodoro timer for the terminal and the status bar")]
#[command(version)]
pub struct Config {
    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Without a command, print the status line once
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a new work interval
    Start,
    /// Stop the timer
    Stop,
    /// Pause the timer, or resume it if already paused
    Pause,
    /// Resume a paused timer
    Resume,
    /// Skip straight to the break
    Break,
    /// Clear the task label
    Clear,
    /// Show the live display; type s/t/p/r/b/c or q
    Run,
    /// Set the task label
    Task {
        /// Words of the label, joined by spaces
        words: Vec<String>,
    },
    /// Print the work and break durations
    Info,
    /// Print the timer state label
    Status,
    /// Remove the audit log
    Clean,
    /// Change the work, break or alert durations
    Set(SetArgs),
    /// Change the bar width, bar style, icon set or task length
    Style(StyleArgs),
    /// Flip display and notification options
    Toggle(ToggleArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct SetArgs {
    /// Work duration, e.g. 25m or 1h30m
    #[arg(short = 't', long = "timer", value_parser = parse_span)]
    pub timer: Option<Duration>,

    /// Break duration
    #[arg(short = 'k', long = "break", value_parser = parse_span)]
    pub rest: Option<Duration>,

    /// Warn this long before the work interval ends
    #[arg(short = 'a', long = "alert", value_parser = parse_span)]
    pub alert: Option<Duration>,
}

impl SetArgs {
    /// Durations to apply; zero means unchanged.
    pub fn effective(&self) -> (Option<Duration>, Option<Duration>, Option<Duration>) {
        let nonzero = |d: Option<Duration>| d.filter(|d| *d != Duration::zero());
        (nonzero(self.timer), nonzero(self.rest), nonzero(self.alert))
    }

    pub fn is_empty(&self) -> bool {
        self.effective() == (None, None, None)
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleArgs {
    /// Width of the progress bar, at most 300
    #[arg(short = 'w', long = "width")]
    pub width: Option<u16>,

    /// Bar style: 1 solid, 2 solid reversed, 3 shade, 4 shade reversed, 5 ascii
    #[arg(short = 'b', long = "bar")]
    pub bar: Option<u8>,

    /// Icon set: 1 solid, 2 trace, 3 ascii
    #[arg(short = 'i', long = "icon")]
    pub icon: Option<u8>,

    /// Maximum task label length
    #[arg(short = 'L', long = "length")]
    pub length: Option<usize>,
}

impl StyleArgs {
    pub fn is_empty(&self) -> bool {
        self.width.unwrap_or(0) == 0
            && self.bar.unwrap_or(0) == 0
            && self.icon.unwrap_or(0) == 0
            && self.length.unwrap_or(0) == 0
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct ToggleArgs {
    /// Hide the progress bar
    #[arg(short = 'p', long)]
    pub progress: bool,
    /// Ring the terminal bell at the end of each phase
    #[arg(short = 'l', long)]
    pub bell: bool,
    /// Hide the clock
    #[arg(short = 'c', long)]
    pub clock: bool,
    /// Hide the icon
    #[arg(short = 's', long)]
    pub symbol: bool,
    /// Show the percentage
    #[arg(short = 'P', long)]
    pub percent: bool,
    /// Desktop notifications
    #[arg(short = 'n', long)]
    pub notify: bool,
    /// tmux popup notifications
    #[arg(short = 't', long)]
    pub tmux: bool,
    /// Restart automatically when the break ends
    #[arg(short = 'r', long)]
    pub restart: bool,
    /// Count down instead of up
    #[arg(short = 'v', long)]
    pub reverse: bool,
    /// Hide seconds in the clock
    #[arg(short = 'S', long)]
    pub seconds: bool,
    /// Hide the task label
    #[arg(short = 'T', long)]
    pub label: bool,
    /// Write the audit log
    #[arg(long)]
    pub log: bool,
}

impl ToggleArgs {
    /// The preferences selected on the command line, in display order.
    pub fn selected(&self) -> Vec<Toggle> {
        [
            (self.progress, Toggle::HideBar),
            (self.bell, Toggle::Bell),
            (self.clock, Toggle::HideClock),
            (self.symbol, Toggle::HideIcon),
            (self.percent, Toggle::Percent),
            (self.notify, Toggle::DesktopNotify),
            (self.tmux, Toggle::TmuxNotify),
            (self.restart, Toggle::Restart),
            (self.reverse, Toggle::Reverse),
            (self.seconds, Toggle::HideSeconds),
            (self.label, Toggle::HideTask),
            (self.log, Toggle::Logging),
        ]
        .into_iter()
        .filter_map(|(on, toggle)| on.then_some(toggle))
        .collect()
    }
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    /// Help text for one subcommand, or for the whole program.
    pub fn usage(subcommand: &str) -> String {
        let mut command = Self::command();
        match command.find_subcommand_mut(subcommand) {
            Some(sub) => sub.render_help().to_string(),
            None => command.render_help().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("pomobar").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Config::command().debug_assert();
    }

    #[test]
    fn no_subcommand_renders() {
        let config = parse(&[]);
        assert_eq!(config.command, None);
        assert_eq!(config.log_level(), "warn");
        assert_eq!(parse(&["--verbose"]).log_level(), "debug");
    }

    #[test]
    fn task_words_are_collected() {
        let config = parse(&["task", "write", "the", "docs"]);
        assert_eq!(
            config.command,
            Some(Command::Task { words: vec!["write".into(), "the".into(), "docs".into()] })
        );
    }

    #[test]
    fn set_parses_durations() {
        let Some(Command::Set(args)) = parse(&["set", "-t", "50m", "--break", "10m"]).command else {
            panic!("expected set");
        };
        assert_eq!(args.timer, Some(Duration::minutes(50)));
        assert_eq!(args.rest, Some(Duration::minutes(10)));
        assert_eq!(args.alert, None);
        assert!(!args.is_empty());

        assert!(Config::try_parse_from(["pomobar", "set", "-t", "-5m"]).is_err());
    }

    #[test]
    fn zero_values_count_as_unset() {
        let Some(Command::Set(args)) = parse(&["set", "-t", "0"]).command else {
            panic!("expected set");
        };
        assert!(args.is_empty());

        let Some(Command::Style(style)) = parse(&["style", "-w", "0"]).command else {
            panic!("expected style");
        };
        assert!(style.is_empty());
    }

    #[test]
    fn toggle_flags_map_to_preferences() {
        let Some(Command::Toggle(args)) = parse(&["toggle", "-P", "-t", "--log"]).command else {
            panic!("expected toggle");
        };
        assert_eq!(args.selected(), vec![Toggle::Percent, Toggle::TmuxNotify, Toggle::Logging]);
        assert!(ToggleArgs::default().selected().is_empty());
    }

    #[test]
    fn usage_names_the_flags() {
        assert!(Config::usage("set").contains("--timer"));
        assert!(Config::usage("toggle").contains("--percent"));
    }
}
