use crate::error::{QuickstartError, Result};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// A single external process call: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(args.into_iter().map(|arg| arg.as_ref().to_os_string()));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }
}

/// Lossy rendering for logs and error messages; the process gets the raw bytes.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Something that can execute an [`Invocation`] to completion.
pub trait CommandRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()>;
}

/// Runs invocations as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        run_command(invocation)
    }
}

/// Execute a command with inherited stdio, failing on a nonzero exit
pub fn run_command(invocation: &Invocation) -> Result<()> {
    match &invocation.cwd {
        Some(cwd) => debug!("Executing command: {} (in {})", invocation, cwd.display()),
        None => debug!("Executing command: {}", invocation),
    }

    let mut command = Command::new(&invocation.program);
    command.args(&invocation.args);
    if let Some(cwd) = &invocation.cwd {
        command.current_dir(cwd);
    }

    let status = command.status().map_err(|err| {
        // A missing cwd also surfaces as NotFound, so only blame the program
        // when the directory is actually there.
        let cwd_missing = invocation.cwd.as_ref().is_some_and(|cwd| !cwd.is_dir());
        if err.kind() == ErrorKind::NotFound && !cwd_missing {
            QuickstartError::ExecutableNotFound {
                program: invocation.program.clone(),
            }
        } else {
            QuickstartError::Io(err)
        }
    })?;

    if status.success() {
        debug!("Command succeeded: {}", invocation);
        Ok(())
    } else {
        // Killed by a signal: no exit code to report.
        let code = status.code().unwrap_or(-1);
        debug!("Command failed: {} (exit code: {})", invocation, code);
        Err(QuickstartError::CommandFailed {
            command: invocation.to_string(),
            code,
        })
    }
}
