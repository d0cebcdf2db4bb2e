//! Popup notifications inside a running tmux server

use tokio::process::Command;
use tracing::{debug, info};

use super::process::run_command;
use crate::error::ServiceError;

const TMUX: &str = "tmux";
const ALIGN_CENTRE: &str = "#[align=absolute-centre]";
const DISABLED_PADDING: [&str; 3] = ["-#[nodim]", "", ""];
const SEPARATOR: [&str; 3] = ["", "", ""];

/// Whether a tmux server with at least one session is reachable.
pub async fn tmux_available() -> bool {
    match Command::new(TMUX).arg("list-sessions").output().await {
        Ok(output) => output.status.success() && !output.stdout.is_empty(),
        Err(e) => {
            debug!("tmux not reachable: {}", e);
            false
        }
    }
}

/// Arguments for a centred `display-menu` showing `message` under `title`.
pub fn menu_args(title: &str, message: &str) -> Vec<String> {
    let body = format!("{}{}", ALIGN_CENTRE, message);
    let mut args: Vec<String> = [
        "display-menu",
        "-T",
        title,
        "-x",
        "#{window_width}",
        "-y",
        "#{window_height}",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let mut push = |items: &[&str]| args.extend(items.iter().map(|s| s.to_string()));
    push(&SEPARATOR);
    push(&DISABLED_PADDING);
    push(&DISABLED_PADDING);
    push(&[body.as_str(), "", ""]);
    push(&DISABLED_PADDING);
    push(&DISABLED_PADDING);
    push(&SEPARATOR);
    args
}

/// Close any open popup, then show a menu popup with the message.
pub async fn open_tmux_popup(title: &str, message: &str) -> Result<(), ServiceError> {
    if !tmux_available().await {
        return Err(ServiceError::Unavailable("tmux".to_string()));
    }

    if let Err(e) = run_command(TMUX, &["display-popup", "-C"]).await {
        debug!("No popup closed: {}", e);
    }

    let args = menu_args(title, message);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    run_command(TMUX, &args).await?;
    info!("tmux notification shown: {}", message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_is_title_then_item_triples() {
        let args = menu_args(" + Notification + ", "time for a break");
        assert_eq!(&args[..3], ["display-menu", "-T", " + Notification + "]);
        let items = &args[7..];
        assert_eq!(items.len() % 3, 0);
        assert!(items.contains(&"#[align=absolute-centre]time for a break".to_string()));
        assert_eq!(items.first().map(String::as_str), Some(""));
    }
}
