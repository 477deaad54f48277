//! Pull request source trait definition

use async_trait::async_trait;
use thiserror::Error;

use super::types::PullRequestRef;

/// Errors that can occur while looking up a pull request
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Looks up where a pull request's commits live
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    /// Fetch PR `number` of `organization/project`
    async fn fetch_pull_request(
        &self,
        organization: &str,
        project: &str,
        number: &str,
    ) -> Result<PullRequestRef, PlatformError>;
}
