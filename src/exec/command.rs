use anyhow::{Context, Result};
use chrono::Local;
use tokio::process::Command;

use crate::{
    exec::{BuildCommand, BuildOutcome},
    logging::Logger,
};

/// Runs `sh -c "<install> && <build>"` in the repository directory and
/// classifies the outcome.
///
/// A build counts as failed when the shell exits non-zero OR when anything
/// was written to stderr, even on exit code 0. Tools that emit benign
/// warnings on stderr will be flagged as failures; that is the contract.
/// A spawn error is returned as `Err` and classified as failed by the
/// caller.
pub async fn run_build(dir: &str, command: &BuildCommand, logger: &Logger) -> Result<BuildOutcome> {
    let composed = command.composed();
    let started_at = Local::now();

    logger.info(&format!("Build started : {composed}")).await?;

    let output = Command::new("sh")
        .arg("-c")
        .arg(&composed)
        .current_dir(dir)
        .output()
        .await
        .with_context(|| format!("Failed to run build command in {dir}"))?;

    let finished_at = Local::now();

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    logger.raw(&stdout).await?;
    logger.raw(&stderr).await?;

    let succeeded = output.status.success() && stderr.is_empty();
    if succeeded {
        logger.info("Build succeeded").await?;
    } else {
        logger
            .error(&format!(
                "Build failed (exit code {:?}, {} bytes on stderr)",
                output.status.code(),
                stderr.len()
            ))
            .await?;
    }

    Ok(BuildOutcome {
        succeeded,
        stdout,
        stderr,
        started_at,
        finished_at,
    })
}
