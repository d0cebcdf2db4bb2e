//! Desktop notifications through notify-send

use tracing::info;

use super::process::run_command;
use crate::{error::ServiceError, storage::paths::PROGRAM_NAME};

/// Show a desktop notification with `message`.
pub async fn send_desktop_notification(message: &str) -> Result<(), ServiceError> {
    let app_name = format!("--app-name={}", PROGRAM_NAME);
    run_command("notify-send", &[message, &app_name, "--icon=clock"]).await?;
    info!("Desktop notification sent: {}", message);
    Ok(())
}
