use std::path::Path;

use anyhow::Result;
use git2::{Repository, build::CheckoutBuilder};

use crate::{config::RepoConfig, git::remote::fetch_options};

/// True iff the path holds an existing git working copy.
pub fn is_repo(path: &str) -> bool {
    Repository::open(path).is_ok()
}

/// Brings an absent working copy into existence: init, register `origin`,
/// pull the tracked branch and check out its tip (detached, like
/// `git checkout origin/<branch>`).
///
/// Errors are logged by the caller; whatever partial state a failure leaves
/// behind is retried on the next tick, there is no rollback.
pub fn init_repo(cfg: &RepoConfig) -> Result<()> {
    println!("Cloning {} ...", cfg.project_name);

    let repo = Repository::init(&cfg.src)?;
    repo.remote("origin", &cfg.repo_url)?;
    pull(&repo, &cfg.track_branch)?;

    println!("Cloned {} successfully", cfg.project_name);
    Ok(())
}

/// Fetches `origin/<branch>` and moves the working copy onto the fetched
/// commit. This is a `git pull` that always lands on the remote tip: the
/// tracking ref is updated, the tree force-checked-out, HEAD detached on
/// the new commit.
pub fn pull(repo: &Repository, branch: &str) -> Result<()> {
    let mut remote = repo.find_remote("origin")?;
    let refspec = format!("+refs/heads/{branch}:refs/remotes/origin/{branch}");
    remote.fetch(&[&refspec], Some(&mut fetch_options()), None)?;

    let fetched = repo
        .find_reference(&format!("refs/remotes/origin/{branch}"))?
        .peel_to_commit()?;

    repo.checkout_tree(fetched.as_object(), Some(CheckoutBuilder::new().force()))?;
    repo.set_head_detached(fetched.id())?;
    Ok(())
}

/// Commit id of HEAD, the `git rev-parse HEAD` equivalent.
pub fn head_revision(repo: &Repository) -> Result<String> {
    Ok(repo.head()?.peel_to_commit()?.id().to_string())
}

/// Pulls the tracked branch and reports whether HEAD moved. The pull IS the
/// update: detection mutates the working copy as a side effect. Any error
/// (network, unborn HEAD on a half-initialized clone, conflict) is logged
/// and reported as "no change" so the loop moves on.
pub fn verify_origin_changes(cfg: &RepoConfig) -> bool {
    match check_origin(cfg) {
        Ok(changed) => changed,
        Err(e) => {
            eprintln!("[{}] pull failed: {e}", cfg.project_name);
            false
        }
    }
}

fn check_origin(cfg: &RepoConfig) -> Result<bool> {
    let repo = Repository::open(Path::new(&cfg.src))?;

    let before = head_revision(&repo)?;
    pull(&repo, &cfg.track_branch)?;
    let after = head_revision(&repo)?;

    if before != after {
        println!(
            "[{}] new commit detected: {} -> {}",
            cfg.project_name, before, after
        );
    }

    Ok(before != after)
}
