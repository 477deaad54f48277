//! GitHub pull request lookup

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

use super::traits::{PlatformError, PullRequestSource};
use super::types::{PullRequestInfo, PullRequestRef};

/// Public GitHub API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default connection timeout in seconds
const CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// GitHub REST client for pull request metadata
pub struct GitHubClient {
    base_url: String,
    token: Option<String>,
    http_client: Client,
}

impl GitHubClient {
    /// Create a client against `base_url`, authenticating with `token` if given
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("prreview/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            http_client,
        }
    }

    fn pull_request_url(&self, organization: &str, project: &str, number: &str) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}",
            self.base_url, organization, project, number
        )
    }
}

#[async_trait]
impl PullRequestSource for GitHubClient {
    async fn fetch_pull_request(
        &self,
        organization: &str,
        project: &str,
        number: &str,
    ) -> Result<PullRequestRef, PlatformError> {
        let url = self.pull_request_url(organization, project, number);
        debug!(%url, "fetching pull request");

        let mut request = self
            .http_client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(ref token) = self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| PlatformError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(PlatformError::NotFound(format!(
                "PR #{} in {}/{}",
                number, organization, project
            )));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PlatformError::ApiError(format!(
                "GitHub API error ({}): {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PlatformError::NetworkError(e.to_string()))?;

        PullRequestInfo::parse(&body)?.into_ref(number)
    }
}
