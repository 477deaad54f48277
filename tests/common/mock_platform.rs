//! Pull request source doubles: an in-memory source for command tests and
//! wiremock helpers for the GitHub client.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use prreview::platform::{PlatformError, PullRequestRef, PullRequestSource};

/// Serves pull requests from memory and records every lookup.
#[derive(Default)]
pub struct StaticPullRequests {
    pulls: HashMap<String, PullRequestRef>,
    requests: Mutex<Vec<(String, String, String)>>,
}

impl StaticPullRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register PR `number` opened from `owner`'s fork on `branch`
    pub fn with_pull(mut self, number: &str, owner: &str, project: &str, branch: &str) -> Self {
        self.pulls.insert(
            number.to_string(),
            PullRequestRef {
                number: number.to_string(),
                remote_name: owner.to_lowercase(),
                remote_url: format!("https://github.com/{}/{}", owner, project),
                remote_branch: branch.to_string(),
            },
        );
        self
    }

    /// `(organization, project, number)` of every lookup
    pub fn requests(&self) -> Vec<(String, String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PullRequestSource for StaticPullRequests {
    async fn fetch_pull_request(
        &self,
        organization: &str,
        project: &str,
        number: &str,
    ) -> Result<PullRequestRef, PlatformError> {
        self.requests.lock().unwrap().push((
            organization.to_string(),
            project.to_string(),
            number.to_string(),
        ));
        self.pulls
            .get(number)
            .cloned()
            .ok_or_else(|| PlatformError::NotFound(format!("PR #{}", number)))
    }
}

/// A trimmed GitHub pull request document
pub fn github_pull_json(number: u64, owner: &str, repo: &str, branch: &str) -> Value {
    json!({
        "number": number,
        "state": "open",
        "title": format!("Fixes #{} - test change", number),
        "head": {
            "label": format!("{}:{}", owner, branch),
            "ref": branch,
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "repo": {
                "name": repo,
                "full_name": format!("{}/{}", owner, repo),
                "html_url": format!("https://github.com/{}/{}", owner, repo),
                "owner": { "login": owner, "type": "User" }
            }
        },
        "base": { "ref": "develop" }
    })
}

/// Mount `GET /repos/{org}/{project}/pulls/{number}` answering with `body`
pub async fn mock_get_pull(
    server: &MockServer,
    org: &str,
    project: &str,
    number: u64,
    body: Value,
) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/{}/pulls/{}", org, project, number)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
