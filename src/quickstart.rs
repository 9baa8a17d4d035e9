use crate::command_utils::{CommandRunner, Invocation};
use crate::config::{self, QuickstartConfig, FORK_DIR_NAME, PACKAGING_BRANCH, PACKAGING_DIR_NAME};
use crate::error::Result;
use crate::repo::{ensure_repo, SyncTarget};
use crate::system_config::SystemConfig;
use std::path::Path;
use tracing::info;

/// Sync both repositories, build the images and optionally start the stack.
pub fn run<R: CommandRunner>(
    runner: &mut R,
    system: &SystemConfig,
    config: &QuickstartConfig,
) -> Result<()> {
    let workspace = config::prepare_workspace(&config.workspace)?;
    info!(workspace = %workspace.display(), "using workspace");

    let packaging_dir = workspace.join(PACKAGING_DIR_NAME);
    let fork_dir = workspace.join(FORK_DIR_NAME);

    ensure_repo(
        runner,
        &system.git_path,
        &SyncTarget::new(config.packaging_url.as_str(), &packaging_dir, PACKAGING_BRANCH),
    )?;
    ensure_repo(
        runner,
        &system.git_path,
        &SyncTarget::new(config.repo_url.as_str(), &fork_dir, config.branch.as_str()),
    )?;

    build_and_run(runner, system, config, &packaging_dir)
}

fn build_and_run<R: CommandRunner>(
    runner: &mut R,
    system: &SystemConfig,
    config: &QuickstartConfig,
    packaging_dir: &Path,
) -> Result<()> {
    let build = Invocation::new(system.docker_path.as_str())
        .args(["compose", "build"])
        .arg("--build-arg")
        .arg(format!("COMMITTISH={}", config.branch))
        .arg("--build-arg")
        .arg(format!("GIT_URL={}", config.repo_url))
        .args(config.compose_services.iter().map(String::as_str))
        .current_dir(packaging_dir);

    println!("Building Docker images…");
    runner.run(&build)?;

    if config.start_after_build {
        let up = Invocation::new(system.docker_path.as_str())
            .args(["compose", "up", "-d"])
            .current_dir(packaging_dir);

        println!("Starting Docker stack…");
        runner.run(&up)?;
        println!("Stack started. Use 'docker compose logs -f' to watch output.");
    } else {
        println!("Build complete. Skipping 'docker compose up' as requested.");
    }

    Ok(())
}
