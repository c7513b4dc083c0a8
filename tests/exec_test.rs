use anyhow::Result;
use buildwatch::{
    exec::{BuildCommand, command::run_build},
    logging::Logger,
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn command(install: &str, build: &str) -> BuildCommand {
    BuildCommand {
        install: install.to_string(),
        build: build.to_string(),
    }
}

async fn test_logger(dir: &std::path::Path) -> Result<Logger> {
    Ok(Logger::new(&dir.join("build.log")).await?)
}

#[test]
fn test_default_command_is_the_npm_sequence() {
    assert_eq!(BuildCommand::default().composed(), "npm install && npm run build");
}

#[tokio::test]
async fn test_clean_build_succeeds() -> Result<()> {
    let dir = tempdir()?;
    let logger = test_logger(dir.path()).await?;

    let outcome = run_build(
        &dir.path().to_string_lossy(),
        &command("true", "echo built"),
        &logger,
    )
    .await?;

    assert!(outcome.succeeded);
    assert!(outcome.stdout.contains("built"));
    assert!(outcome.stderr.is_empty());
    assert!(outcome.finished_at >= outcome.started_at);
    Ok(())
}

#[tokio::test]
async fn test_stderr_output_fails_the_build_even_on_exit_zero() -> Result<()> {
    let dir = tempdir()?;
    let logger = test_logger(dir.path()).await?;

    let outcome = run_build(
        &dir.path().to_string_lossy(),
        &command("true", "echo warning 1>&2"),
        &logger,
    )
    .await?;

    assert!(!outcome.succeeded);
    assert!(outcome.stderr.contains("warning"));
    Ok(())
}

#[tokio::test]
async fn test_nonzero_exit_fails_the_build() -> Result<()> {
    let dir = tempdir()?;
    let logger = test_logger(dir.path()).await?;

    let outcome = run_build(
        &dir.path().to_string_lossy(),
        &command("true", "exit 3"),
        &logger,
    )
    .await?;

    assert!(!outcome.succeeded);
    Ok(())
}

#[tokio::test]
async fn test_failing_install_step_skips_the_build_step() -> Result<()> {
    let dir = tempdir()?;
    let logger = test_logger(dir.path()).await?;

    let outcome = run_build(
        &dir.path().to_string_lossy(),
        &command("exit 1", "echo built"),
        &logger,
    )
    .await?;

    assert!(!outcome.succeeded);
    assert!(!outcome.stdout.contains("built"));
    Ok(())
}

#[tokio::test]
async fn test_missing_working_directory_is_a_spawn_error() -> Result<()> {
    let dir = tempdir()?;
    let logger = test_logger(dir.path()).await?;

    let result = run_build("/nonexistent/workdir", &command("true", "echo built"), &logger).await;

    assert!(result.is_err());
    Ok(())
}

#[tokio::test]
async fn test_build_output_lands_in_the_log_file() -> Result<()> {
    let dir = tempdir()?;
    let log_path = dir.path().join("build.log");
    let logger = Logger::new(&log_path).await?;

    run_build(
        &dir.path().to_string_lossy(),
        &command("echo step-one", "echo step-two 1>&2"),
        &logger,
    )
    .await?;

    let content = std::fs::read_to_string(&log_path)?;
    assert!(content.contains("step-one"));
    assert!(content.contains("step-two"));
    assert!(content.contains("Build started"));
    Ok(())
}
