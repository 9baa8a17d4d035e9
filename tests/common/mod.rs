#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;
use tempfile::TempDir;

pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub fn setup_test_git_repo(dir: &Path) {
    git(dir, &["init"]);
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "user.email", "test@example.com"]);

    fs::write(dir.join("README.md"), "# Test Repo").unwrap();
    git(dir, &["add", "README.md"]);
    git(dir, &["commit", "-m", "Initial commit"]);
    git(dir, &["branch", "-M", "main"]);
}

/// A bare repository standing in for a remote, plus the working copy it was seeded from.
pub struct TestRemote {
    _temp_dir: TempDir,
    seed: PathBuf,
    bare: PathBuf,
}

impl TestRemote {
    /// Bare remote with a `main` branch and any extra branches, each carrying one commit.
    pub fn new(branches: &[&str]) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let seed = temp_dir.path().join("seed");
        let bare = temp_dir.path().join("remote.git");
        fs::create_dir(&seed).unwrap();

        setup_test_git_repo(&seed);
        for branch in branches {
            git(&seed, &["checkout", "-b", branch, "main"]);
            fs::write(seed.join("BRANCH"), branch).unwrap();
            git(&seed, &["add", "BRANCH"]);
            git(&seed, &["commit", "-m", &format!("Work on {}", branch)]);
        }
        git(&seed, &["checkout", "main"]);

        git(
            temp_dir.path(),
            &["clone", "--bare", seed.to_str().unwrap(), bare.to_str().unwrap()],
        );
        git(&seed, &["remote", "add", "origin", bare.to_str().unwrap()]);

        Self {
            _temp_dir: temp_dir,
            seed,
            bare,
        }
    }

    pub fn url(&self) -> String {
        self.bare.to_string_lossy().into_owned()
    }

    /// Push a new commit adding `file` to `branch` on the remote.
    pub fn push_commit(&self, branch: &str, file: &str) {
        git(&self.seed, &["checkout", branch]);
        fs::write(self.seed.join(file), file).unwrap();
        git(&self.seed, &["add", file]);
        git(&self.seed, &["commit", "-m", &format!("Add {}", file)]);
        git(&self.seed, &["push", "origin", branch]);
    }

    /// Replace `branch` on the remote with a single commit on top of `main`.
    pub fn force_rewrite(&self, branch: &str, file: &str) {
        git(&self.seed, &["checkout", "-B", branch, "main"]);
        fs::write(self.seed.join(file), file).unwrap();
        git(&self.seed, &["add", file]);
        git(&self.seed, &["commit", "-m", &format!("Rewrite {}", branch)]);
        git(&self.seed, &["push", "--force", "origin", branch]);
    }
}

/// A fake `docker` that appends `<cwd>|<args>` to a log file.
///
/// `FAKE_DOCKER_BUILD_EXIT` sets the exit code of `compose build`.
pub struct FakeDocker {
    _temp_dir: TempDir,
    script: PathBuf,
    log: PathBuf,
}

impl FakeDocker {
    #[cfg(unix)]
    pub fn new() -> Self {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("docker");
        let log = temp_dir.path().join("docker.log");

        let body = format!(
            "#!/bin/sh\n\
             echo \"$(pwd -P)|$*\" >> '{}'\n\
             if [ \"$2\" = build ]; then exit ${{FAKE_DOCKER_BUILD_EXIT:-0}}; fi\n\
             exit 0\n",
            log.display()
        );
        fs::write(&script, body).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        Self {
            _temp_dir: temp_dir,
            script,
            log,
        }
    }

    pub fn path(&self) -> &Path {
        &self.script
    }

    /// Logged invocations as `(cwd, args)` pairs.
    pub fn calls(&self) -> Vec<(String, String)> {
        match fs::read(&self.log) {
            Ok(contents) => String::from_utf8_lossy(&contents)
                .lines()
                .filter_map(|line| line.split_once('|'))
                .map(|(cwd, args)| (cwd.to_string(), args.to_string()))
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}
