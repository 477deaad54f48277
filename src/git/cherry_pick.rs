//! Git cherry-pick operations

use super::{git, GitError};
use crate::util::ProcessRunner;

/// Cherry-pick a revision (commit, branch or `remote/branch`) onto HEAD
pub fn cherry_pick(runner: &dyn ProcessRunner, revision: &str) -> Result<(), GitError> {
    git(runner, &["cherry-pick", revision])?;
    Ok(())
}
