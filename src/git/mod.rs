//! Git operations wrapper
//!
//! Every operation shells out to the `git` CLI through a [`ProcessRunner`],
//! the same commands an operator would type to recover by hand.

pub mod branch;
pub mod cherry_pick;
pub mod remote;

pub use branch::*;
pub use cherry_pick::*;
pub use remote::*;

use thiserror::Error;

use crate::util::{command_line, CommandOutput, ProcessRunner};

/// Errors that can occur during git operations
#[derive(Error, Debug)]
pub enum GitError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with status {status}: {output}")]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },
}

impl GitError {
    /// The git command line that failed
    pub fn command(&self) -> &str {
        match self {
            GitError::Spawn { command, .. } | GitError::CommandFailed { command, .. } => command,
        }
    }
}

/// Run `git <args>` and turn a non-zero exit into [`GitError::CommandFailed`].
pub fn git(runner: &dyn ProcessRunner, args: &[&str]) -> Result<CommandOutput, GitError> {
    let output = try_git(runner, args)?;
    if output.success() {
        Ok(output)
    } else {
        Err(GitError::CommandFailed {
            command: command_line("git", args),
            status: output
                .status
                .map(|code| code.to_string())
                .unwrap_or_else(|| "signal".to_string()),
            output: output.combined(),
        })
    }
}

/// Run `git <args>` and hand back the output whatever the exit status.
pub fn try_git(runner: &dyn ProcessRunner, args: &[&str]) -> Result<CommandOutput, GitError> {
    runner.run("git", args).map_err(|source| GitError::Spawn {
        command: command_line("git", args),
        source,
    })
}

/// Pull the current branch from its upstream
pub fn pull(runner: &dyn ProcessRunner) -> Result<(), GitError> {
    git(runner, &["pull"])?;
    Ok(())
}

/// Pull a branch of a named remote into the current branch
pub fn pull_from(runner: &dyn ProcessRunner, remote: &str, branch: &str) -> Result<(), GitError> {
    git(runner, &["pull", remote, branch])?;
    Ok(())
}
