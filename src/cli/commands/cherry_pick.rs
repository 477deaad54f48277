//! Cherry-pick command implementation
//!
//! Applies a PR's head onto the current branch.

use tracing::instrument;

use super::pull_request::{resolve_pull_request_remote, update_current_branch};
use crate::cli::context::ReviewContext;
use crate::cli::output::Output;
use crate::core::{ReviewCommand, ReviewError};
use crate::git;

/// Run the cherry-pick command
#[instrument(skip(ctx), fields(project = %ctx.project.name))]
pub async fn run_cherry_pick(ctx: &ReviewContext, args: &[String]) -> Result<(), ReviewError> {
    ReviewCommand::CherryPick.check_args(args)?;
    let number = args[0].as_str();

    update_current_branch(ctx)?;
    let pr = resolve_pull_request_remote(ctx, number).await?;

    let target = pr.remote_ref();
    git::cherry_pick(ctx.runner(), &target).map_err(|source| ReviewError::CherryPick {
        target: target.clone(),
        source,
    })?;

    Output::success(&format!(
        "Cherry-picked PR #{} ({})",
        number,
        Output::branch_name(&target)
    ));
    Ok(())
}
