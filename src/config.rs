use crate::error::{QuickstartError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PACKAGING_REPO: &str = "https://github.com/netdisco/netdisco-docker.git";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_COMPOSE_SERVICES: [&str; 2] = ["netdisco-backend", "netdisco-web"];

/// Branch of the packaging repository that is always built from.
pub const PACKAGING_BRANCH: &str = "main";
pub const PACKAGING_DIR_NAME: &str = "netdisco-docker";
pub const FORK_DIR_NAME: &str = "netdisco";
const WORKSPACE_DIR_NAME: &str = "netdisco-docker-workspace";

/// Everything one quickstart run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct QuickstartConfig {
    pub repo_url: String,
    pub branch: String,
    pub workspace: PathBuf,
    pub packaging_url: String,
    pub compose_services: Vec<String>,
    pub start_after_build: bool,
}

impl QuickstartConfig {
    /// Config with defaults for everything except the fork URL and workspace.
    pub fn new(repo_url: impl Into<String>, workspace: impl Into<PathBuf>) -> Self {
        Self {
            repo_url: repo_url.into(),
            branch: DEFAULT_BRANCH.to_string(),
            workspace: workspace.into(),
            packaging_url: DEFAULT_PACKAGING_REPO.to_string(),
            compose_services: DEFAULT_COMPOSE_SERVICES.iter().map(|s| s.to_string()).collect(),
            start_after_build: true,
        }
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(QuickstartError::HomeNotSet)
}

pub fn default_workspace() -> Result<PathBuf> {
    Ok(home_dir()?.join(WORKSPACE_DIR_NAME))
}

/// Replace a leading `~` component with the current user's home directory.
///
/// `~user` forms are left untouched.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(home_dir()?.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}

/// Expand, create (with parents) and canonicalize the workspace directory.
pub fn prepare_workspace(path: &Path) -> Result<PathBuf> {
    let expanded = expand_home(path)?;
    fs::create_dir_all(&expanded)?;
    Ok(fs::canonicalize(&expanded)?)
}
