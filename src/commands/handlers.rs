//! Command handlers

use std::io::Write;

use anyhow::Context;
use tracing::{debug, info};

use crate::{
    config::{Command, Config, SetArgs, StyleArgs, ToggleArgs},
    services::deliver_notification,
    state::{trigger::one_shot_window, AppState, TimerCommand},
    storage::paths::PROGRAM_NAME,
    tasks::{run_live_session, SessionEnd},
};

/// How a dispatched command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Done,
    /// The live display ran and has ended
    Live(SessionEnd),
}

/// Run one command against the loaded state.
pub async fn dispatch<W: Write>(
    command: Option<Command>,
    mut app: AppState,
    out: &mut W,
) -> anyhow::Result<Completion> {
    debug!("Dispatching {:?}", command);
    let Some(command) = command else {
        render_handler(&mut app, out).await?;
        return Ok(Completion::Done);
    };

    match command {
        Command::Start => timer_handler(&mut app, TimerCommand::Start)?,
        Command::Stop => timer_handler(&mut app, TimerCommand::Stop)?,
        Command::Pause => timer_handler(&mut app, TimerCommand::Pause)?,
        Command::Resume => timer_handler(&mut app, TimerCommand::Resume)?,
        Command::Break => timer_handler(&mut app, TimerCommand::Break)?,
        Command::Clear => timer_handler(&mut app, TimerCommand::Clear)?,
        Command::Run => return Ok(Completion::Live(run_live_session(app).await)),
        Command::Task { words } => task_handler(&mut app, &words, out)?,
        Command::Info => write!(out, "{}", app.info())?,
        Command::Status => write!(out, "{}", app.status_label())?,
        Command::Clean => clean_handler(&app, out)?,
        Command::Set(args) => set_handler(&mut app, &args, out)?,
        Command::Style(args) => style_handler(&mut app, &args, out)?,
        Command::Toggle(args) => toggle_handler(&mut app, &args, out)?,
    }
    Ok(Completion::Done)
}

/// Print the status line once, as a status bar refresh would.
pub async fn render_handler<W: Write>(app: &mut AppState, out: &mut W) -> anyhow::Result<()> {
    let outcome = app.tick(one_shot_window());
    if let Some(crossing) = outcome.crossing {
        deliver_notification(&app.display, crossing).await;
    }
    write!(out, "{}", app.render_line(outcome.bell))?;
    Ok(())
}

pub fn timer_handler(app: &mut AppState, command: TimerCommand) -> anyhow::Result<()> {
    let transition = app
        .execute(command)
        .with_context(|| format!("failed to {:?} the timer", command))?;
    info!("{:?} -> {:?}", command, transition);
    Ok(())
}

pub fn task_handler<W: Write>(app: &mut AppState, words: &[String], out: &mut W) -> anyhow::Result<()> {
    if words.is_empty() {
        write!(out, "{}", Config::usage("task"))?;
        return Ok(());
    }
    app.set_task(words.join(" ")).context("failed to save the task")?;
    Ok(())
}

pub fn clean_handler<W: Write>(app: &AppState, out: &mut W) -> anyhow::Result<()> {
    match app.audit_log().remove() {
        Ok(removed) => {
            debug!("Audit log removed: {}", removed);
            writeln!(out, "{} log files removed", PROGRAM_NAME)?;
        }
        Err(e) => writeln!(out, "{} clean error: {}", PROGRAM_NAME, e)?,
    }
    Ok(())
}

pub fn set_handler<W: Write>(app: &mut AppState, args: &SetArgs, out: &mut W) -> anyhow::Result<()> {
    if args.is_empty() {
        write!(out, "{}", Config::usage("set"))?;
        return Ok(());
    }
    let (work, rest, alert) = args.effective();
    app.set_durations(work, rest, alert).context("failed to save the durations")?;
    Ok(())
}

pub fn style_handler<W: Write>(app: &mut AppState, args: &StyleArgs, out: &mut W) -> anyhow::Result<()> {
    if args.is_empty() {
        write!(out, "{}", Config::usage("style"))?;
        return Ok(());
    }
    app.update_display(|display| {
        if let Some(width) = args.width.filter(|w| *w > 0) {
            display.set_bar_size(width);
        }
        if let Some(bar) = args.bar.filter(|b| *b > 0) {
            display.set_bar_style(bar);
        }
        if let Some(icon) = args.icon.filter(|i| *i > 0) {
            display.set_icon_style(icon);
        }
        if let Some(length) = args.length.filter(|l| *l > 0) {
            display.set_task_length(length);
        }
    })
    .context("failed to save the display configuration")?;
    Ok(())
}

pub fn toggle_handler<W: Write>(app: &mut AppState, args: &ToggleArgs, out: &mut W) -> anyhow::Result<()> {
    let selected = args.selected();
    if selected.is_empty() {
        write!(out, "{}", Config::usage("toggle"))?;
        return Ok(());
    }
    app.update_display(|display| {
        for toggle in selected {
            let value = display.toggle(toggle);
            debug!("{:?} is now {}", toggle, value);
        }
    })
    .context("failed to save the display configuration")?;
    Ok(())
}
