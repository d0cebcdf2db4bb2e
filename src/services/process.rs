//! Running external commands

use std::process::Output;

use tokio::process::Command;
use tracing::debug;

use crate::error::ServiceError;

/// Run a command to completion and fail on a non-zero exit status.
pub async fn run_command(program: &str, args: &[&str]) -> Result<Output, ServiceError> {
    debug!("Running {} {:?}", program, args);

    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|source| ServiceError::Spawn {
            command: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ServiceError::Failed {
            command: program.to_string(),
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let result = run_command("pomobar-no-such-binary", &[]).await;
        assert!(matches!(result, Err(ServiceError::Spawn { .. })));
    }
}
