//! Error types for scaffolding runs

use crate::options::{Framework, TemplateType};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for scaffolding operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// A rejected option value, reported before any file is touched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("--name is required when using CLI arguments")]
    MissingName,

    #[error(
        "Invalid project name '{0}': project name can only contain letters, numbers, hyphens, and underscores"
    )]
    InvalidName(String),

    #[error("Invalid value '{value}' for --{flag} (expected one of: {allowed})")]
    InvalidValue {
        flag: &'static str,
        value: String,
        allowed: String,
    },

    #[error(
        "--oauth is only valid with --framework=sdk and --template=stateful (got --framework={framework} --template={template})"
    )]
    OAuthRequiresSdkStateful {
        framework: Framework,
        template: TemplateType,
    },
}

/// Error type for scaffolding operations
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The user stopped at a prompt
    #[error("Operation cancelled")]
    Cancelled,

    /// A prompt came back without a project name
    #[error("Project name is required")]
    MissingProjectName,

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Prompt failed: {0}")]
    Prompt(#[source] io::Error),

    #[error("Write task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ScaffoldError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::Cancelled => 0,
            _ => 1,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScaffoldError::Cancelled)
    }
}

/// Prompt I/O: an interrupted prompt (Esc / Ctrl+C) is a cancellation
impl From<io::Error> for ScaffoldError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::Interrupted {
            ScaffoldError::Cancelled
        } else {
            ScaffoldError::Prompt(err)
        }
    }
}
