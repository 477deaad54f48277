//! Pull request metadata types

use serde::Deserialize;

use super::traits::PlatformError;

/// A pull request resolved to the remote and branch its commits live on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    /// PR number as given on the command line
    pub number: String,
    /// Git remote name: the head repository owner's login, lowercased
    pub remote_name: String,
    /// Web URL of the head repository
    pub remote_url: String,
    /// Branch holding the PR's commits
    pub remote_branch: String,
}

impl PullRequestRef {
    /// `remote/branch`, the revision to cherry-pick
    pub fn remote_ref(&self) -> String {
        format!("{}/{}", self.remote_name, self.remote_branch)
    }
}

/// The part of the pull request document we read
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestInfo {
    pub head: PRHead,
}

/// PR head reference information
#[derive(Debug, Clone, Deserialize)]
pub struct PRHead {
    /// Branch reference name
    #[serde(rename = "ref")]
    pub ref_name: String,
    /// Head repository, null once the fork has been deleted
    pub repo: Option<PRHeadRepo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PRHeadRepo {
    pub html_url: String,
    pub owner: PROwner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PROwner {
    pub login: String,
}

impl PullRequestInfo {
    /// Parse a pull request document. JSON responses are valid YAML.
    pub fn parse(body: &str) -> Result<Self, PlatformError> {
        serde_yaml::from_str(body).map_err(|e| PlatformError::ParseError(e.to_string()))
    }

    /// Resolve the head repository into a [`PullRequestRef`]
    pub fn into_ref(self, number: &str) -> Result<PullRequestRef, PlatformError> {
        let repo = self.head.repo.ok_or_else(|| {
            PlatformError::NotFound(format!(
                "head repository of PR #{} no longer exists",
                number
            ))
        })?;

        Ok(PullRequestRef {
            number: number.to_string(),
            remote_name: repo.owner.login.to_lowercase(),
            remote_url: repo.html_url,
            remote_branch: self.head.ref_name,
        })
    }
}
