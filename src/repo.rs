use crate::command_utils::{CommandRunner, Invocation};
use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

/// One repository to bring to the remote tip of one branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTarget {
    pub url: String,
    pub destination: PathBuf,
    pub branch: String,
}

impl SyncTarget {
    pub fn new(
        url: impl Into<String>,
        destination: impl Into<PathBuf>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            destination: destination.into(),
            branch: branch.into(),
        }
    }
}

/// Clone `target.url` into `target.destination`, or update it if it already exists.
///
/// Updates only fast-forward; a diverged checkout fails instead of merging.
/// A failed clone is left on disk as-is.
pub fn ensure_repo<R: CommandRunner>(
    runner: &mut R,
    git: &str,
    target: &SyncTarget,
) -> Result<()> {
    let destination = &target.destination;

    if destination.exists() {
        println!("Updating repository in {}", destination.display());
        info!(path = %destination.display(), branch = %target.branch, "updating repository");

        runner.run(&Invocation::new(git).args(["fetch", "--all"]).current_dir(destination))?;
        runner.run(
            &Invocation::new(git)
                .args(["checkout", target.branch.as_str()])
                .current_dir(destination),
        )?;
        runner.run(&Invocation::new(git).args(["pull", "--ff-only"]).current_dir(destination))?;
    } else {
        println!("Cloning {} into {}", target.url, destination.display());
        info!(
            url = %target.url,
            path = %destination.display(),
            branch = %target.branch,
            "cloning repository"
        );

        runner.run(
            &Invocation::new(git)
                .args(["clone", "--branch", target.branch.as_str(), target.url.as_str()])
                .arg(destination),
        )?;
    }

    Ok(())
}
