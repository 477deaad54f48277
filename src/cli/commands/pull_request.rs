//! Steps shared by review and cherry-pick: updating the current branch and
//! wiring up the remote a pull request comes from.

use tracing::debug;

use crate::cli::context::ReviewContext;
use crate::cli::output::Output;
use crate::core::ReviewError;
use crate::git::{
    self, add_remote, fetch_remote, get_remote_url, is_http_url, set_remote_url, to_ssh_url,
};
use crate::platform::PullRequestRef;

/// `git pull` on the current branch. Failure is fatal (exit 5).
pub fn update_current_branch(ctx: &ReviewContext) -> Result<(), ReviewError> {
    Output::info("Updating current branch...");
    git::pull(ctx.runner()).map_err(ReviewError::Update)?;
    Ok(())
}

/// Resolve PR `number` to its head repository and make sure a git remote
/// for it exists, uses SSH, and has been fetched.
///
/// Remote setup problems only warn: the pull or cherry-pick that follows
/// reports the real failure with its own exit code.
pub async fn resolve_pull_request_remote(
    ctx: &ReviewContext,
    number: &str,
) -> Result<PullRequestRef, ReviewError> {
    let spinner = Output::spinner(&format!("Fetching PR #{}...", number));
    let result = ctx
        .pull_requests()
        .fetch_pull_request(ctx.project.organization(), &ctx.project.name, number)
        .await;
    spinner.finish_and_clear();
    let pr = result?;
    debug!(?pr, "resolved pull request");

    let runner = ctx.runner();
    let remote = pr.remote_name.as_str();

    match get_remote_url(runner, remote)? {
        Some(url) if is_http_url(&url) => {
            let ssh_url = to_ssh_url(&url);
            if ssh_url != url {
                match set_remote_url(runner, remote, &ssh_url) {
                    Ok(()) => Output::info(&format!(
                        "Switched remote {} to {}",
                        Output::remote_name(remote),
                        ssh_url
                    )),
                    Err(e) => Output::warning(&format!(
                        "Could not switch remote {} to SSH, run `git remote set-url {} {}` manually: {}",
                        remote, remote, ssh_url, e
                    )),
                }
            }
        }
        Some(url) => debug!(remote, %url, "remote already configured"),
        None => {
            let ssh_url = to_ssh_url(&pr.remote_url);
            match add_remote(runner, remote, &ssh_url) {
                Ok(()) => Output::info(&format!(
                    "Added remote {} ({})",
                    Output::remote_name(remote),
                    ssh_url
                )),
                Err(e) => Output::warning(&format!(
                    "Could not add remote {}, run `git remote add {} {}` manually: {}",
                    remote, remote, ssh_url, e
                )),
            }
        }
    }

    if let Err(e) = fetch_remote(runner, remote) {
        Output::warning(&format!(
            "Fetching {} failed, run `git fetch {}` manually: {}",
            remote, remote, e
        ));
    }

    Ok(pr)
}
