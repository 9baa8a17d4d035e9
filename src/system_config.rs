#[derive(Debug, Clone)]
pub struct SystemConfig {
    pub git_path: String,
    pub docker_path: String,
}

impl SystemConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let git_path = std::env::var("NETDISCO_QUICKSTART_GIT").unwrap_or(defaults.git_path);
        let docker_path =
            std::env::var("NETDISCO_QUICKSTART_DOCKER").unwrap_or(defaults.docker_path);

        Self {
            git_path,
            docker_path,
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            git_path: "git".to_string(),
            docker_path: "docker".to_string(),
        }
    }
}
