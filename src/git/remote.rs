//! Git remote operations

use tracing::debug;
use url::Url;

use super::{git, try_git, GitError};
use crate::util::ProcessRunner;

const GITHUB_HTTPS_PREFIXES: [&str; 2] = ["https://github.com/", "http://github.com/"];
const GITHUB_SSH_PREFIX: &str = "git@github.com:";

/// Get the URL of a remote, `None` if no remote has that name
pub fn get_remote_url(runner: &dyn ProcessRunner, remote: &str) -> Result<Option<String>, GitError> {
    let output = try_git(runner, &["remote", "get-url", remote])?;

    if output.success() {
        let url = output.stdout.trim().to_string();
        Ok(Some(url))
    } else {
        debug!(remote, stderr = %output.stderr.trim(), "remote not found");
        Ok(None)
    }
}

/// Add a new remote
pub fn add_remote(runner: &dyn ProcessRunner, remote: &str, url: &str) -> Result<(), GitError> {
    git(runner, &["remote", "add", remote, url])?;
    Ok(())
}

/// Point an existing remote at a new URL
pub fn set_remote_url(runner: &dyn ProcessRunner, remote: &str, url: &str) -> Result<(), GitError> {
    git(runner, &["remote", "set-url", remote, url])?;
    Ok(())
}

/// Fetch from remote
pub fn fetch_remote(runner: &dyn ProcessRunner, remote: &str) -> Result<(), GitError> {
    git(runner, &["fetch", remote])?;
    Ok(())
}

/// Whether a remote URL uses the http or https scheme
pub fn is_http_url(url: &str) -> bool {
    Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Convert a GitHub web URL to its SSH clone form.
///
/// `https://github.com/foo/bar` becomes `git@github.com:foo/bar.git`.
/// URLs on other hosts are returned unchanged.
pub fn to_ssh_url(url: &str) -> String {
    let Some(path) = GITHUB_HTTPS_PREFIXES
        .iter()
        .find_map(|prefix| url.strip_prefix(prefix))
    else {
        return url.to_string();
    };

    let path = path.trim_end_matches('/');
    if path.ends_with(".git") {
        format!("{}{}", GITHUB_SSH_PREFIX, path)
    } else {
        format!("{}{}.git", GITHUB_SSH_PREFIX, path)
    }
}
