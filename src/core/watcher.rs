use anyhow::Result;
use chrono::Local;

use crate::{
    config::RepoConfig,
    exec::{BuildCommand, command::run_build},
    git::repo,
    logging::Logger,
    notifications::{Notify, build_failed, build_started, build_succeeded},
};

/// Shared collaborators for one pass over the repository list. Immutable
/// during a tick.
pub struct TickContext<'a> {
    pub command: &'a BuildCommand,
    pub notifier: &'a dyn Notify,
}

/// One repository, one tick: ensure the local clone exists, pull and compare
/// HEAD, then build and report when new commits arrived, the repository is
/// marked for forced updates, or it was just cloned.
///
/// Git errors are logged and swallowed here or below so a broken repository
/// never blocks the rest of the list. A build failure sends the failure mail
/// and returns early. Mail errors propagate to the caller.
pub async fn process_repo(cfg: &RepoConfig, ctx: &TickContext<'_>) -> Result<()> {
    let was_present = repo::is_repo(&cfg.src);

    if !was_present
        && let Err(e) = repo::init_repo(cfg)
    {
        eprintln!("[{}] clone failed: {e}", cfg.project_name);
    }

    let changed = repo::verify_origin_changes(cfg);

    if !changed && !cfg.force_update && was_present {
        return Ok(());
    }

    let logger = Logger::new(&Logger::path_for(&cfg.project_name)).await?;

    ctx.notifier
        .send(
            &build_started(&cfg.project_name, cfg.force_update, Local::now()),
            &cfg.project_name,
        )
        .await?;

    let outcome = match run_build(&cfg.src, ctx.command, &logger).await {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("[{}] build error: {e}", cfg.project_name);
            ctx.notifier
                .send(&build_failed(&cfg.project_name, Local::now()), &cfg.project_name)
                .await?;
            return Ok(());
        }
    };

    if !outcome.succeeded {
        eprintln!("[{}] build failed: {}", cfg.project_name, outcome.stderr);
        ctx.notifier
            .send(&build_failed(&cfg.project_name, Local::now()), &cfg.project_name)
            .await?;
        return Ok(());
    }

    ctx.notifier
        .send(
            &build_succeeded(&cfg.project_name, Local::now(), outcome.duration()),
            &cfg.project_name,
        )
        .await?;

    Ok(())
}
