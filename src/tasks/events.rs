//! Events funnelled into the live session's control loop

use crate::state::TimerCommand;

/// Everything the control loop reacts to, from every producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The redraw cadence elapsed
    Tick,
    /// A token typed on standard input
    Input(LiveCommand),
    /// Time to re-read both records from storage
    Reload,
    /// SIGINT or SIGTERM
    Interrupt,
}

/// Whether the next scheduled tick should redraw the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderHint {
    #[default]
    Render,
    /// An input-driven render is on screen; leave it for one tick
    Skip,
}

/// Tracks whether the next scheduled tick has been superseded by input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickGate {
    next: RenderHint,
}

impl TickGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input just redrew the line; the next tick stays quiet.
    pub fn input_rendered(&mut self) {
        self.next = RenderHint::Skip;
    }

    /// What the tick arriving now should do. Resets to [`RenderHint::Render`].
    pub fn take(&mut self) -> RenderHint {
        std::mem::take(&mut self.next)
    }
}

/// Commands accepted while the live display is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveCommand {
    Timer(TimerCommand),
    ClearScreen,
    Quit,
    /// Unrecognised input: just redraw the line
    Redraw,
}

impl LiveCommand {
    /// Map a typed token to a command. Anything starting with `q` quits.
    pub fn parse(token: &str) -> Self {
        match token {
            "s" | "start" => LiveCommand::Timer(TimerCommand::Start),
            "t" | "stop" => LiveCommand::Timer(TimerCommand::Stop),
            "p" | "pause" => LiveCommand::Timer(TimerCommand::Pause),
            "r" | "resume" => LiveCommand::Timer(TimerCommand::Resume),
            "b" | "break" => LiveCommand::Timer(TimerCommand::Break),
            "c" | "clear" | "clear-screen" => LiveCommand::ClearScreen,
            t if t.starts_with('q') => LiveCommand::Quit,
            _ => LiveCommand::Redraw,
        }
    }

    /// Text shown in place of the timer right after the command runs.
    pub fn feedback(&self) -> Option<&'static str> {
        match self {
            LiveCommand::Timer(TimerCommand::Start) => Some("start timer"),
            LiveCommand::Timer(TimerCommand::Stop) => Some("stop timer"),
            LiveCommand::Timer(TimerCommand::Pause) => Some("pause timer"),
            LiveCommand::Timer(TimerCommand::Resume) => Some("resume timer"),
            LiveCommand::Timer(TimerCommand::Break) => Some("take a break"),
            LiveCommand::Timer(TimerCommand::Clear) => Some("task cleared"),
            LiveCommand::ClearScreen | LiveCommand::Quit | LiveCommand::Redraw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_tokens() {
        assert_eq!(LiveCommand::parse("s"), LiveCommand::Timer(TimerCommand::Start));
        assert_eq!(LiveCommand::parse("stop"), LiveCommand::Timer(TimerCommand::Stop));
        assert_eq!(LiveCommand::parse("p"), LiveCommand::Timer(TimerCommand::Pause));
        assert_eq!(LiveCommand::parse("resume"), LiveCommand::Timer(TimerCommand::Resume));
        assert_eq!(LiveCommand::parse("b"), LiveCommand::Timer(TimerCommand::Break));
        assert_eq!(LiveCommand::parse("clear-screen"), LiveCommand::ClearScreen);
    }

    #[test]
    fn anything_starting_with_q_quits() {
        assert_eq!(LiveCommand::parse("q"), LiveCommand::Quit);
        assert_eq!(LiveCommand::parse("quit"), LiveCommand::Quit);
        assert_eq!(LiveCommand::parse("qqq"), LiveCommand::Quit);
    }

    #[test]
    fn input_render_supersedes_one_tick() {
        let mut gate = TickGate::new();
        assert_eq!(gate.take(), RenderHint::Render);

        gate.input_rendered();
        assert_eq!(gate.take(), RenderHint::Skip);
        assert_eq!(gate.take(), RenderHint::Render);

        gate.input_rendered();
        gate.input_rendered();
        assert_eq!(gate.take(), RenderHint::Skip);
        assert_eq!(gate.take(), RenderHint::Render);
    }

    #[test]
    fn unknown_tokens_redraw() {
        assert_eq!(LiveCommand::parse("hello"), LiveCommand::Redraw);
        assert_eq!(LiveCommand::Redraw.feedback(), None);
        assert_eq!(LiveCommand::parse("b").feedback(), Some("take a break"));
    }
}
