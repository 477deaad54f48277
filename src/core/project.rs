//! Project identity and review naming conventions
//!
//! The project is whatever directory the tool runs in. Its name decides the
//! GitHub organization PRs are looked up in and the long-lived main branch.

use std::path::Path;

/// Checkouts of the upstream repository are often named `<project>_upstream`
const UPSTREAM_SUFFIX: &str = "_upstream";

/// Prefix of the local branch a PR is checked out into
pub const REVIEW_BRANCH_PREFIX: &str = "review/pr";

/// Projects whose main branch is `develop` instead of `master`
const DEVELOP_PROJECTS: [&str; 2] = ["foreman", "smart-proxy"];

/// The project being reviewed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Project name, used as the GitHub repository name
    pub name: String,
}

impl Project {
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            name: project_name(dir.as_ref()),
        }
    }

    /// Long-lived branch reviews start from and return to
    pub fn main_branch(&self) -> &'static str {
        if DEVELOP_PROJECTS.contains(&self.name.as_str()) {
            "develop"
        } else {
            "master"
        }
    }

    /// GitHub organization owning the upstream repository
    pub fn organization(&self) -> &'static str {
        if self.name == "katello" {
            "katello"
        } else {
            "theforeman"
        }
    }
}

/// Last path segment of `dir` with a trailing `_upstream` removed
pub fn project_name(dir: &Path) -> String {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    match name.strip_suffix(UPSTREAM_SUFFIX) {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}

/// Whether `arg` is a PR number: a decimal integer written in canonical form.
///
/// `"42"` and `"0"` qualify; `"042"`, `"+42"`, `"-0"`, `"42a"` and `""` do not.
pub fn is_pr_number(arg: &str) -> bool {
    let digits = arg.strip_prefix('-').unwrap_or(arg);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if digits.starts_with('0') {
        return arg == "0";
    }
    true
}

/// Local branch a PR is checked out into
pub fn review_branch(number: &str) -> String {
    format!("{}{}", REVIEW_BRANCH_PREFIX, number)
}

/// Backup suffix for a branch: `review/pr123` gives `123`, other names pass through
pub fn suffix_from_branch(branch: &str) -> &str {
    branch.strip_prefix(REVIEW_BRANCH_PREFIX).unwrap_or(branch)
}
