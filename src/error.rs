use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuickstartError {
    #[error("Command failed ({code}): {command}")]
    CommandFailed { command: String, code: i32 },

    #[error("Required executable not found: {program}. Please install git and docker.")]
    ExecutableNotFound { program: String },

    #[error("Cannot determine the home directory; pass --workspace explicitly")]
    HomeNotSet,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuickstartError>;
