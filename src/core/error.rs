//! Review errors and their process exit codes

use thiserror::Error;

use super::database::DatabaseError;
use crate::git::GitError;
use crate::platform::PlatformError;

/// A failure that ends the current operation.
///
/// Each variant maps to the exit status the process terminates with; the
/// message tells the operator which command to re-run by hand.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("{0}")]
    Usage(String),

    #[error("Aborted: backup {0} already exists")]
    Aborted(String),

    #[error("Updating the current branch failed. Resolve it and re-run `git pull` manually.\n{0}")]
    Update(#[source] GitError),

    #[error("Could not create branch {branch}. Run `git checkout -b {branch}` manually.\n{source}")]
    Checkout {
        branch: String,
        #[source]
        source: GitError,
    },

    #[error("Pulling {remote}/{branch} failed. Run `git pull {remote} {branch}` manually.\n{source}")]
    PullRequestBranch {
        remote: String,
        branch: String,
        #[source]
        source: GitError,
    },

    #[error("Cherry-pick of {target} failed. Resolve the conflicts or run `git cherry-pick {target}` manually.\n{source}")]
    CherryPick {
        target: String,
        #[source]
        source: GitError,
    },

    #[error("Database restore failed: {0}")]
    Restore(String),

    #[error("Could not look up the pull request: {0}")]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown command name '{0}': invoke as rpr, crp or rrpr (or `prreview <rpr|crp|rrpr> ...`)")]
    UnknownCommand(String),
}

impl ReviewError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ReviewError::Aborted(_) => 1,
            ReviewError::Usage(_) | ReviewError::Checkout { .. } => 2,
            ReviewError::PullRequestBranch { .. } => 3,
            ReviewError::CherryPick { .. } => 4,
            ReviewError::Update(_) => 5,
            ReviewError::Restore(_) => 6,
            ReviewError::Platform(_)
            | ReviewError::Database(_)
            | ReviewError::Git(_)
            | ReviewError::Io(_)
            | ReviewError::UnknownCommand(_) => 1,
        }
    }
}
