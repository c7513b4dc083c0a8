use std::{path::Path, time::Duration};

use anyhow::Result;
use tokio::time::{MissedTickBehavior, interval};

use crate::{
    config::parser::load_config,
    core::watcher::{TickContext, process_repo},
};

/// One pass over the configured repositories, in list order, strictly
/// sequential. A repository that fails to process is logged and skipped;
/// later repositories still run.
pub async fn run_tick(config_path: &Path, ctx: &TickContext<'_>) -> Result<()> {
    let config = load_config(config_path)?;

    for repo in &config.repos {
        if let Err(e) = process_repo(repo, ctx).await {
            eprintln!("[{}] processing failed: {e}", repo.project_name);
        }
    }

    Ok(())
}

/// Fires a tick every `interval_secs`, forever. The tick body is awaited
/// inside the loop, so a pass that outruns the interval delays the next one
/// instead of racing it over the same working copies.
pub async fn supervisor_loop(config_path: &Path, ctx: TickContext<'_>, interval_secs: u64) {
    let mut ticker = interval(Duration::from_secs(interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        if let Err(e) = run_tick(config_path, &ctx).await {
            eprintln!("tick failed: {e}");
        }
    }
}
