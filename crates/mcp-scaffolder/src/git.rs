//! Best-effort `git init` for freshly generated projects

use std::fmt;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

/// Shown to the user whenever the repository could not be created
pub const GIT_INIT_WARNING: &str = "Could not initialize git repository (is git installed?)";

/// What happened when initializing the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitInitOutcome {
    Initialized,
    /// `git` could not be started
    Unavailable(String),
    /// `git init` ran and exited non-zero
    Failed(Option<i32>),
}

impl GitInitOutcome {
    pub fn is_initialized(&self) -> bool {
        matches!(self, GitInitOutcome::Initialized)
    }
}

impl fmt::Display for GitInitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitInitOutcome::Initialized => write!(f, "initialized"),
            GitInitOutcome::Unavailable(reason) => write!(f, "git unavailable: {}", reason),
            GitInitOutcome::Failed(Some(code)) => write!(f, "git init exited with status {}", code),
            GitInitOutcome::Failed(None) => write!(f, "git init terminated by signal"),
        }
    }
}

/// Run `git init` in `dir` with all stdio discarded. Never fails the caller.
pub async fn init_repository(dir: &Path) -> GitInitOutcome {
    init_with(dir, "git").await
}

async fn init_with(dir: &Path, program: &str) -> GitInitOutcome {
    let status = Command::new(program)
        .arg("init")
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    let outcome = match status {
        Ok(status) if status.success() => GitInitOutcome::Initialized,
        Ok(status) => GitInitOutcome::Failed(status.code()),
        Err(e) => GitInitOutcome::Unavailable(e.to_string()),
    };

    if outcome.is_initialized() {
        debug!(dir = %dir.display(), "initialized git repository");
    } else {
        warn!(dir = %dir.display(), %outcome, "git init failed");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_binary_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let outcome = init_with(temp.path(), "definitely-not-a-real-git-binary").await;
        assert!(matches!(outcome, GitInitOutcome::Unavailable(_)));
        assert!(!outcome.is_initialized());
    }

    #[tokio::test]
    async fn test_missing_directory_does_not_panic() {
        let temp = TempDir::new().unwrap();
        let outcome = init_repository(&temp.path().join("missing")).await;
        assert!(!outcome.is_initialized());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(GitInitOutcome::Initialized.to_string(), "initialized");
        assert_eq!(
            GitInitOutcome::Failed(Some(128)).to_string(),
            "git init exited with status 128"
        );
    }
}
