// ─── Process Supervision ───
// Spawns the assembled command, relays its output streams, and waits for
// completion.

use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::core::error::{LauncherError, LauncherResult};

/// Spawn `program` with `args`, mirror its stdout/stderr onto the parent's
/// streams, and wait for it to terminate.
///
/// Each relay task copies one child stream until end-of-stream. Both relays
/// are joined after the child exits and before returning, so callers see all
/// buffered output before any cleanup runs.
///
/// The exit status is propagated untranslated. Spawn failure is a fatal
/// `LaunchFailure`.
pub async fn supervise(program: &str, args: &[String]) -> LauncherResult<ExitStatus> {
    let mut child = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| LauncherError::LaunchFailure(format!("{}: {}", program, e)))?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let stdout_relay = tokio::spawn(async move {
        if let Some(mut stream) = stdout {
            let _ = tokio::io::copy(&mut stream, &mut tokio::io::stdout()).await;
        }
    });
    let stderr_relay = tokio::spawn(async move {
        if let Some(mut stream) = stderr {
            let _ = tokio::io::copy(&mut stream, &mut tokio::io::stderr()).await;
        }
    });

    let status = child
        .wait()
        .await
        .map_err(|e| LauncherError::LaunchFailure(format!("wait on {}: {}", program, e)))?;

    // Join both relays so all buffered output reaches the parent's streams
    // before the caller moves on to cleanup.
    let _ = stdout_relay.await;
    let _ = stderr_relay.await;

    if status.success() {
        info!("Process exited cleanly");
    } else {
        warn!("Process exited with {}", status);
    }
    debug!("Supervision complete for {}", program);

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn propagates_child_exit_status() {
        let ok = supervise("sh", &["-c".into(), "exit 0".into()]).await.unwrap();
        assert!(ok.success());

        let failed = supervise("sh", &["-c".into(), "exit 3".into()])
            .await
            .unwrap();
        assert_eq!(failed.code(), Some(3));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn relays_output_until_end_of_stream() {
        // Both streams produce output; supervise must drain them and return.
        let status = supervise(
            "sh",
            &["-c".into(), "echo out; echo err >&2".into()],
        )
        .await
        .unwrap();
        assert!(status.success());
    }

    #[tokio::test]
    async fn missing_program_is_a_launch_failure() {
        let err = supervise("definitely-not-a-real-binary-1234", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, LauncherError::LaunchFailure(_)));
    }
}
