//! Git branch operations

use super::{git, GitError};
use crate::util::ProcessRunner;

/// Create a new local branch from HEAD and check it out
pub fn create_and_checkout_branch(
    runner: &dyn ProcessRunner,
    branch_name: &str,
) -> Result<(), GitError> {
    git(runner, &["checkout", "-b", branch_name])?;
    Ok(())
}

/// Checkout an existing branch
pub fn checkout_branch(runner: &dyn ProcessRunner, branch_name: &str) -> Result<(), GitError> {
    git(runner, &["checkout", branch_name])?;
    Ok(())
}

/// Delete a local branch even if it is not merged
pub fn force_delete_branch(runner: &dyn ProcessRunner, branch_name: &str) -> Result<(), GitError> {
    git(runner, &["branch", "-D", branch_name])?;
    Ok(())
}

/// Get the current branch name (`HEAD` when detached)
pub fn get_current_branch(runner: &dyn ProcessRunner) -> Result<String, GitError> {
    let output = git(runner, &["rev-parse", "--abbrev-ref", "HEAD"])?;
    Ok(output.stdout.trim().to_string())
}
