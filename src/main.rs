use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use netdisco_quickstart::command_utils::SystemRunner;
use netdisco_quickstart::config::{self, QuickstartConfig, DEFAULT_BRANCH, DEFAULT_PACKAGING_REPO};
use netdisco_quickstart::logging;
use netdisco_quickstart::quickstart;
use netdisco_quickstart::system_config::SystemConfig;

#[derive(Parser)]
#[command(name = "netdisco-quickstart")]
#[command(about = "Build and run Netdisco in Docker from a fork or feature branch")]
struct Cli {
    /// HTTPS or SSH URL for your netdisco fork
    #[arg(long)]
    repo_url: String,

    /// Branch name in your fork to build
    #[arg(long, default_value = DEFAULT_BRANCH)]
    branch: String,

    /// Directory to store the cloned repositories [default: ~/netdisco-docker-workspace]
    #[arg(long)]
    workspace: Option<PathBuf>,

    /// Alternate netdisco-docker repository URL
    #[arg(long, default_value = DEFAULT_PACKAGING_REPO)]
    packaging_url: String,

    /// Services to pass to 'docker compose build'
    #[arg(
        long,
        num_args = 0..,
        default_values_t = config::DEFAULT_COMPOSE_SERVICES.map(String::from)
    )]
    compose_services: Vec<String>,

    /// Do not run 'docker compose up -d' after building
    #[arg(long)]
    no_start: bool,

    /// Log every external command
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let workspace = match cli.workspace {
        Some(path) => path,
        None => config::default_workspace()?,
    };

    let mut config = QuickstartConfig::new(cli.repo_url, workspace);
    config.branch = cli.branch;
    config.packaging_url = cli.packaging_url;
    config.compose_services = cli.compose_services;
    config.start_after_build = !cli.no_start;

    quickstart::run(&mut SystemRunner, &SystemConfig::from_env(), &config)?;

    Ok(())
}
