//! External capabilities module
//!
//! Desktop notifications, tmux popups, terminal control and the audit log.
//! All of them are best-effort: failures are logged and never abort a command.

pub mod audit_log;
pub mod desktop;
pub mod process;
pub mod terminal;
pub mod tmux;

use tracing::{info, warn};

use crate::{
    render::icon_set,
    state::{Crossing, DisplayConfig},
};

// Re-export main types and functions
pub use audit_log::AuditLog;
pub use desktop::send_desktop_notification;
pub use terminal::TerminalSession;
pub use tmux::open_tmux_popup;

/// Send the notification for `crossing` on every enabled channel.
pub async fn deliver_notification(config: &DisplayConfig, crossing: Crossing) {
    let message = crossing.message(config.restart);
    info!("Phase boundary reached: {}", message);

    if config.desktop_notify {
        if let Err(e) = send_desktop_notification(message).await {
            warn!("Desktop notification failed: {}", e);
        }
    }

    if config.tmux_notify {
        let icons = icon_set(config.icon_style);
        let symbol = match crossing {
            Crossing::WorkEnding => icons.on_break,
            Crossing::BreakEnding => icons.running,
        };
        let title = format!(" {} Notification {} ", symbol, symbol);
        if let Err(e) = open_tmux_popup(&title, message).await {
            warn!("tmux notification failed: {}", e);
        }
    }
}
